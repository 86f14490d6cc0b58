//! "My bookings" page state.
//!
//! When the bookings fetch fails or comes back empty, the page shows one
//! sample booking instead of an empty list. [`Dashboard::source`] says which
//! of the two the user is looking at.

use std::fmt::Display;

use crate::backend::BookingBackend;
use crate::models::BookingRecord;

pub const PLACEHOLDER_BOOKING_ID: u64 = 1001;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BookingsSource {
    Backend,
    Placeholder,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
    bookings: Vec<BookingRecord>,
    source: BookingsSource,
    loading: bool,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    pub fn new() -> Self {
        Self {
            bookings: Vec::new(),
            source: BookingsSource::Backend,
            loading: true,
        }
    }

    /// The sample record shown when there is nothing real to show.
    pub fn placeholder() -> BookingRecord {
        BookingRecord {
            id: Some(PLACEHOLDER_BOOKING_ID),
            movie_id: None,
            seat_label: Some("A1".to_string()),
            username: None,
            booked_at: None,
            movie_title: Some("Sample Movie".to_string()),
            total_amount: Some(299.0),
            status: Some("confirmed".to_string()),
        }
    }

    pub fn bookings(&self) -> &[BookingRecord] {
        &self.bookings
    }

    pub fn source(&self) -> BookingsSource {
        self.source
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Install the outcome of a bookings fetch.
    pub fn apply<E: Display>(&mut self, result: Result<Vec<BookingRecord>, E>) {
        self.loading = false;
        match result {
            Ok(bookings) if !bookings.is_empty() => {
                self.bookings = bookings;
                self.source = BookingsSource::Backend;
            }
            Ok(_) => {
                tracing::info!("no bookings yet; showing sample booking");
                self.use_placeholder();
            }
            Err(e) => {
                tracing::error!("failed to load bookings: {e}");
                self.use_placeholder();
            }
        }
    }

    fn use_placeholder(&mut self) {
        self.bookings = vec![Self::placeholder()];
        self.source = BookingsSource::Placeholder;
    }

    pub async fn load<B: BookingBackend>(&mut self, backend: &B) {
        self.loading = true;
        let result = backend.my_bookings().await;
        self.apply(result);
    }

    /// Drop a cancelled booking. Returns whether it was listed.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.bookings.len();
        self.bookings.retain(|b| b.id != Some(id));
        before != self.bookings.len()
    }
}

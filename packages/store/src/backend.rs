//! The booking service as seen by the page controllers.
//!
//! Implemented over HTTP by `api::ApiClient`; tests substitute an in-memory
//! fake. Futures are not required to be `Send` because everything runs on
//! the browser's single thread.

use std::fmt::Display;
use std::future::Future;

use crate::config::SubmitMode;
use crate::models::{BookingRecord, BookingRequest};

/// Async interface to the booking service.
pub trait BookingBackend {
    type Error: Display;

    /// `POST /bookings`, identified by the bearer token.
    fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> impl Future<Output = Result<BookingRecord, Self::Error>>;

    /// `POST /bookings/no-auth`, identified by `request.username`.
    fn create_booking_no_auth(
        &self,
        request: &BookingRequest,
    ) -> impl Future<Output = Result<BookingRecord, Self::Error>>;

    /// `GET /bookings/me`.
    fn my_bookings(&self) -> impl Future<Output = Result<Vec<BookingRecord>, Self::Error>>;

    /// `DELETE /bookings/{id}`.
    fn cancel_booking(&self, id: u64) -> impl Future<Output = Result<(), Self::Error>>;

    /// Send a booking to the endpoint selected by `mode`.
    fn submit(
        &self,
        mode: SubmitMode,
        request: &BookingRequest,
    ) -> impl Future<Output = Result<BookingRecord, Self::Error>> {
        async move {
            match mode {
                SubmitMode::Authenticated => self.create_booking(request).await,
                SubmitMode::NoAuth => self.create_booking_no_auth(request).await,
            }
        }
    }
}

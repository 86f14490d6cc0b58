//! # Booking flow: the booking page's state machine
//!
//! [`BookingFlow`] walks one user through movie → seats → payment →
//! confirmation. It is built when the booking page mounts and dropped when the
//! user navigates away, so a draft never outlives its page.
//!
//! ## States
//!
//! ```text
//!            select_movie            toggle_seat (≥1)         proceed
//!   Idle ───────────────► MovieSelected ─────────► SeatsSelected ───────► PaymentStep
//!    ▲      clear_movie        ▲   toggle_seat (0)       │ ◄─── back_to_seats ──┘ │ ▲
//!    └─────────────────────────┴─────────────────────────┘                        │ │
//!                                                                    begin_submit │ │ complete_submit(Err)
//!                                                                                 ▼ │
//!                                     Confirmed ◄──── complete_submit(Ok) ──── Submitting ──► Failed
//! ```
//!
//! `Failed` is PaymentStep with the failure still on record. Every field the
//! user typed is kept, so resubmitting needs no re-entry. The next edit or
//! submission attempt clears it.
//!
//! ## Guards
//!
//! Every action checks its preconditions first and leaves the state alone on
//! failure: no movie, no seats, not signed in, or a phone that is not exactly
//! ten digits. [`BookingFlow::begin_submit`] runs all of them before the
//! request exists, so an invalid draft never reaches the network.
//!
//! ## One seat on the wire
//!
//! The booking service stores a single seat per booking. The request carries
//! the first selected seat in label order (or a random `A1`–`A10` if the
//! selection is somehow empty). The confirmation still reports the full
//! ticket count and total. This mismatch is deliberate until the service
//! accepts seat lists.
//!
//! ## Async boundaries
//!
//! Submission is split into [`begin_submit`](BookingFlow::begin_submit) (sync,
//! validates and returns the request) and
//! [`complete_submit`](BookingFlow::complete_submit) (sync, applies the
//! response), so a reactive UI never holds the flow across an `.await`.
//! [`submit`](BookingFlow::submit) chains the two around a
//! [`BookingBackend`] call for hosts that can.

use std::fmt::Display;
use std::sync::Arc;

use rand::Rng;

use crate::backend::BookingBackend;
use crate::config::{BookingConfig, SubmitMode};
use crate::handoff::CatalogReady;
use crate::models::{BookingRecord, BookingRequest, Movie};
use crate::pricing::Pricing;
use crate::seats::{SeatGrid, SeatLabel, SeatSelection};
use crate::session::{KeyValueStore, Session, SessionStore};

/// Show times offered on the payment step. Display only; the booking service
/// has no show-time field.
pub const SHOW_TIMES: [&str; 4] = ["10:00", "13:30", "17:00", "20:30"];

const GUEST_USERNAME: &str = "guest@example.com";

/// Observable state of the flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowState {
    Idle,
    MovieSelected,
    SeatsSelected,
    PaymentStep,
    Submitting,
    Confirmed,
    Failed,
}

/// Why a flow action was refused. The messages are shown to the user as is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FlowError {
    #[error("Please select a movie first")]
    NoMovieSelected,
    #[error("Please select at least one seat")]
    NoSeatsSelected,
    #[error("Movie {0} is not available")]
    UnknownMovie(u64),
    #[error("Seat {0} does not exist in this hall")]
    SeatOutOfRange(SeatLabel),
    #[error("Please log in to complete your booking.")]
    Unauthenticated,
    #[error("Please enter a valid 10-digit phone number")]
    InvalidPhone,
    #[error("Booking failed. Please try again.")]
    MissingBookingId,
    #[error("Booking failed: {0}")]
    Submission(String),
    #[error("That action is not available at this step")]
    WrongStep,
    #[error("This booking is already confirmed")]
    Finished,
}

impl FlowError {
    /// Failures reported by (or about) the booking service, as opposed to
    /// input or precondition errors caught locally.
    pub fn is_submission_failure(&self) -> bool {
        matches!(self, FlowError::MissingBookingId | FlowError::Submission(_))
    }
}

/// What the confirmation step shows.
#[derive(Clone, Debug, PartialEq)]
pub struct Confirmation {
    pub booking_id: u64,
    pub movie_title: String,
    /// The one seat the service recorded.
    pub seat_label: String,
    pub seat_count: u32,
    pub total: f64,
}

/// Payment-form input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerDetails {
    pub name: String,
    pub phone: String,
    pub show_time: Option<String>,
}

/// Load state of the movie dropdown.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogStatus {
    Loading,
    Loaded(Vec<Movie>),
    Failed,
}

#[derive(Clone, Debug, PartialEq)]
enum Stage {
    Selecting,
    Payment,
    Submitting { seat_label: String },
    Confirmed(Confirmation),
}

/// Exactly ten ASCII digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

fn fallback_seat() -> String {
    format!("A{}", rand::thread_rng().gen_range(1..=10))
}

/// Take the pending movie id handed over by another page, then wait for the
/// catalog to be ready.
///
/// The handoff is cleared before waiting, so it is used at most once even if
/// the catalog never loads.
pub async fn take_pending_selection<S: KeyValueStore>(
    sessions: &SessionStore<S>,
    ready: &mut CatalogReady,
) -> Option<(u64, Arc<Vec<Movie>>)> {
    let movie_id = sessions.take_pending_movie()?;
    match ready.wait().await {
        Some(movies) => Some((movie_id, movies)),
        None => {
            tracing::warn!(movie_id, "catalog failed to load; dropping pending selection");
            None
        }
    }
}

/// The booking page's controller.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingFlow {
    grid: SeatGrid,
    submit_mode: SubmitMode,
    catalog: CatalogStatus,
    selected: Option<Movie>,
    seats: SeatSelection,
    manual_tickets: Option<u32>,
    customer: CustomerDetails,
    /// Set once the name field was filled from the session or edited.
    name_settled: bool,
    stage: Stage,
    last_error: Option<FlowError>,
}

impl BookingFlow {
    pub fn new(config: &BookingConfig) -> Self {
        Self {
            grid: SeatGrid::new(config.seat_rows, config.seat_columns),
            submit_mode: config.submit_mode,
            catalog: CatalogStatus::Loading,
            selected: None,
            seats: SeatSelection::new(),
            manual_tickets: None,
            customer: CustomerDetails::default(),
            name_settled: false,
            stage: Stage::Selecting,
            last_error: None,
        }
    }

    pub fn state(&self) -> FlowState {
        match &self.stage {
            Stage::Confirmed(_) => FlowState::Confirmed,
            Stage::Submitting { .. } => FlowState::Submitting,
            Stage::Payment => match &self.last_error {
                Some(e) if e.is_submission_failure() => FlowState::Failed,
                _ => FlowState::PaymentStep,
            },
            Stage::Selecting => match (&self.selected, self.seats.is_empty()) {
                (None, _) => FlowState::Idle,
                (Some(_), true) => FlowState::MovieSelected,
                (Some(_), false) => FlowState::SeatsSelected,
            },
        }
    }

    pub fn grid(&self) -> SeatGrid {
        self.grid
    }

    pub fn submit_mode(&self) -> SubmitMode {
        self.submit_mode
    }

    pub fn catalog(&self) -> &CatalogStatus {
        &self.catalog
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.selected.as_ref()
    }

    pub fn seats(&self) -> &SeatSelection {
        &self.seats
    }

    pub fn customer(&self) -> &CustomerDetails {
        &self.customer
    }

    pub fn last_error(&self) -> Option<&FlowError> {
        self.last_error.as_ref()
    }

    pub fn confirmation(&self) -> Option<&Confirmation> {
        match &self.stage {
            Stage::Confirmed(c) => Some(c),
            _ => None,
        }
    }

    /// The manual count if one was entered since the last seat toggle,
    /// otherwise the number of selected seats (at least 1).
    pub fn ticket_count(&self) -> u32 {
        self.manual_tickets
            .unwrap_or_else(|| self.seats.len().max(1) as u32)
    }

    /// Current totals, or `None` while no movie is selected.
    pub fn pricing(&self) -> Option<Pricing> {
        self.selected
            .as_ref()
            .map(|m| Pricing::compute(m.ticket_price, self.ticket_count()))
    }

    /// Proceed is enabled iff a movie is selected and at least one seat is.
    pub fn can_proceed(&self) -> bool {
        matches!(self.stage, Stage::Selecting) && self.selected.is_some() && !self.seats.is_empty()
    }

    fn ensure_selecting(&self) -> Result<(), FlowError> {
        match self.stage {
            Stage::Selecting => Ok(()),
            Stage::Confirmed(_) => Err(FlowError::Finished),
            _ => Err(FlowError::WrongStep),
        }
    }

    fn ensure_payment(&self) -> Result<(), FlowError> {
        match self.stage {
            Stage::Payment => Ok(()),
            Stage::Confirmed(_) => Err(FlowError::Finished),
            _ => Err(FlowError::WrongStep),
        }
    }

    fn ensure_editable(&self) -> Result<(), FlowError> {
        match self.stage {
            Stage::Selecting | Stage::Payment => Ok(()),
            Stage::Confirmed(_) => Err(FlowError::Finished),
            Stage::Submitting { .. } => Err(FlowError::WrongStep),
        }
    }

    fn refuse<T>(&mut self, error: FlowError) -> Result<T, FlowError> {
        self.last_error = Some(error.clone());
        Err(error)
    }

    /// Install the fetched movie list.
    pub fn load_catalog(&mut self, movies: Vec<Movie>) {
        self.catalog = CatalogStatus::Loaded(movies);
    }

    pub fn catalog_failed(&mut self) {
        self.catalog = CatalogStatus::Failed;
    }

    /// Select a movie from the loaded catalog, replacing any previous one.
    pub fn select_movie(&mut self, movie_id: u64) -> Result<&Movie, FlowError> {
        self.ensure_selecting()?;
        let movie = match &self.catalog {
            CatalogStatus::Loaded(movies) => movies.iter().find(|m| m.id == movie_id).cloned(),
            _ => None,
        }
        .ok_or(FlowError::UnknownMovie(movie_id))?;
        tracing::debug!(movie_id, "movie selected");
        self.last_error = None;
        Ok(self.selected.insert(movie))
    }

    /// Back to Idle. Selected seats are kept for the next movie.
    pub fn clear_movie(&mut self) -> Result<(), FlowError> {
        self.ensure_selecting()?;
        self.selected = None;
        self.last_error = None;
        Ok(())
    }

    /// Flip one seat. Returns `true` if the seat is now selected.
    ///
    /// The grid is only live once a movie is selected. A toggle discards any
    /// manual ticket count.
    pub fn toggle_seat(&mut self, seat: SeatLabel) -> Result<bool, FlowError> {
        self.ensure_selecting()?;
        if self.selected.is_none() {
            return Err(FlowError::NoMovieSelected);
        }
        if !self.grid.contains(&seat) {
            return Err(FlowError::SeatOutOfRange(seat));
        }
        self.manual_tickets = None;
        self.last_error = None;
        Ok(self.seats.toggle(seat))
    }

    /// Manual ticket-count edit; values below 1 clamp to 1.
    pub fn set_ticket_count(&mut self, count: u32) -> Result<(), FlowError> {
        self.ensure_editable()?;
        self.manual_tickets = Some(count.max(1));
        Ok(())
    }

    /// Seat selection → payment.
    pub fn proceed(&mut self) -> Result<(), FlowError> {
        self.ensure_selecting()?;
        if self.selected.is_none() {
            return self.refuse(FlowError::NoMovieSelected);
        }
        if self.seats.is_empty() {
            return self.refuse(FlowError::NoSeatsSelected);
        }
        self.stage = Stage::Payment;
        self.last_error = None;
        Ok(())
    }

    /// Payment → seat selection.
    pub fn back_to_seats(&mut self) -> Result<(), FlowError> {
        self.ensure_payment()?;
        self.stage = Stage::Selecting;
        self.last_error = None;
        Ok(())
    }

    pub fn set_customer_name(&mut self, name: impl Into<String>) -> Result<(), FlowError> {
        self.ensure_editable()?;
        self.customer.name = name.into();
        self.name_settled = true;
        self.last_error = None;
        Ok(())
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) -> Result<(), FlowError> {
        self.ensure_editable()?;
        self.customer.phone = phone.into();
        self.last_error = None;
        Ok(())
    }

    pub fn set_show_time(&mut self, show_time: Option<String>) -> Result<(), FlowError> {
        self.ensure_editable()?;
        self.customer.show_time = show_time.filter(|t| !t.is_empty());
        self.last_error = None;
        Ok(())
    }

    /// Fill the name field from the session's username (else email), once.
    ///
    /// Does nothing after the first fill or after any edit, so a field the
    /// user cleared stays empty.
    pub fn prefill_customer_name(&mut self, session: Option<&Session>) {
        if self.name_settled {
            return;
        }
        let Some(name) = session.and_then(Session::display_name) else {
            return;
        };
        self.customer.name = name.to_string();
        self.name_settled = true;
    }

    /// Validate the draft and move to Submitting.
    ///
    /// On `Ok` the caller must send the returned request and hand the outcome
    /// to [`complete_submit`](Self::complete_submit). On `Err` the flow stays
    /// on the payment step and nothing should be sent.
    pub fn begin_submit(&mut self, session: Option<&Session>) -> Result<BookingRequest, FlowError> {
        self.ensure_payment()?;
        let Some(movie_id) = self.selected.as_ref().map(|m| m.id) else {
            return self.refuse(FlowError::NoMovieSelected);
        };
        let Some(session) = session else {
            return self.refuse(FlowError::Unauthenticated);
        };
        if !is_valid_phone(&self.customer.phone) {
            return self.refuse(FlowError::InvalidPhone);
        }

        let seat_label = self
            .seats
            .first()
            .map(|s| s.to_string())
            .unwrap_or_else(fallback_seat);
        let username = match self.submit_mode {
            SubmitMode::Authenticated => None,
            SubmitMode::NoAuth => Some(session.email().unwrap_or(GUEST_USERNAME).to_string()),
        };

        self.stage = Stage::Submitting {
            seat_label: seat_label.clone(),
        };
        self.last_error = None;
        Ok(BookingRequest {
            movie_id: movie_id.to_string(),
            seat_label,
            username,
        })
    }

    /// Apply the booking service's answer.
    ///
    /// A record with an id confirms the booking. A record without one, or an
    /// error, puts the flow back on the payment step with the draft intact.
    pub fn complete_submit<E: Display>(
        &mut self,
        result: Result<BookingRecord, E>,
    ) -> Result<Confirmation, FlowError> {
        let requested_seat = match &self.stage {
            Stage::Submitting { seat_label } => seat_label.clone(),
            Stage::Confirmed(_) => return Err(FlowError::Finished),
            _ => return Err(FlowError::WrongStep),
        };

        let error = match result {
            Ok(BookingRecord {
                id: Some(booking_id),
                seat_label,
                ..
            }) => {
                let confirmation = Confirmation {
                    booking_id,
                    movie_title: self
                        .selected
                        .as_ref()
                        .map(|m| m.title.clone())
                        .unwrap_or_default(),
                    seat_label: seat_label.unwrap_or(requested_seat),
                    seat_count: self.ticket_count(),
                    total: self.pricing().map(|p| p.total).unwrap_or_default(),
                };
                tracing::info!(booking_id, "booking confirmed");
                self.stage = Stage::Confirmed(confirmation.clone());
                return Ok(confirmation);
            }
            Ok(_) => FlowError::MissingBookingId,
            Err(e) => FlowError::Submission(e.to_string()),
        };

        tracing::warn!("booking submission failed: {error}");
        self.stage = Stage::Payment;
        self.refuse(error)
    }

    /// Validate, send through `backend`, and apply the answer.
    pub async fn submit<B: BookingBackend>(
        &mut self,
        session: Option<&Session>,
        backend: &B,
    ) -> Result<Confirmation, FlowError> {
        let request = self.begin_submit(session)?;
        let result = backend.submit(self.submit_mode, &request).await;
        self.complete_submit(result)
    }

    /// Consume the pending selection handed over by another page and select
    /// it once the catalog is ready. Returns the resolved id, if any.
    ///
    /// Holds the flow across the wait; reactive hosts call
    /// [`take_pending_selection`] and then [`select_movie`](Self::select_movie)
    /// instead.
    pub async fn resolve_pending<S: KeyValueStore>(
        &mut self,
        sessions: &SessionStore<S>,
        ready: &mut CatalogReady,
    ) -> Result<Option<u64>, FlowError> {
        let Some((movie_id, movies)) = take_pending_selection(sessions, ready).await else {
            return Ok(None);
        };
        if !matches!(self.catalog, CatalogStatus::Loaded(_)) {
            self.load_catalog(movies.as_ref().clone());
        }
        self.select_movie(movie_id)?;
        Ok(Some(movie_id))
    }
}

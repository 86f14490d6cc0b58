//! # API crate: typed clients for the booking backends
//!
//! The web client talks to three independent JSON-over-HTTP services. This
//! crate wraps all of them behind one [`ApiClient`] so pages never build URLs
//! or headers themselves.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `ApiClient`, request helpers, content-type dispatch |
//! | [`error`] | `ApiError` for transport, status and decode failures |
//! | `users` | `POST /auth/register`, `POST /auth/login` |
//! | `movies` | `GET /api/movies`, `GET /api/movies/{id}` |
//! | `bookings` | `store::BookingBackend` over the booking service |
//!
//! Service base URLs come from `store::AppConfig::services`. The token is
//! attached per client with [`ApiClient::with_token`]; build a fresh client
//! from the session whenever it changes.

pub mod client;
pub mod error;

mod bookings;
mod movies;
mod users;

pub use client::{ApiClient, ApiResponse, Service};
pub use error::ApiError;
pub use users::LoginResponse;

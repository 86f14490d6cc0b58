//! Shared UI for the booking client: context providers, the sign-in modal,
//! toasts, and the presentational components the pages are built from.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const THEME_CSS: Asset = asset!("/assets/theme.css");

mod platform;
pub use platform::{
    api_client, make_session_store, sleep, use_app_config, use_sessions, PlatformStore, Sessions,
};

mod auth;
pub use auth::{
    registration_error_message, use_auth, use_auth_gate, validate_registration, AuthControls,
    AuthFormError, AuthGate, AuthModalMode, AuthProvider, AuthState, LogoutButton,
};

pub mod notifications;
pub use notifications::{use_notifier, NotificationProvider, Notifier, ToastKind};

mod modal;
pub use modal::Modal;

mod loading;
pub use loading::{ErrorBlock, LoadingSpinner};

mod navbar;
pub use navbar::Navbar;

mod movie_card;
pub use movie_card::{MovieCard, MovieDetailsModal};

mod seat_map;
pub use seat_map::SeatMap;

mod booking_summary;
pub use booking_summary::BookingSummary;

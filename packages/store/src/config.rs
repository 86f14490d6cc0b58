//! # Client configuration: `booking.toml`
//!
//! Defines the TOML file that the web binary embeds at build time
//! (filename: [`AppConfig::filename`] = `"booking.toml"`). It locates the three
//! backend services and tunes the page controllers.
//!
//! ## Structure
//!
//! ```toml
//! [services]
//! user = "http://localhost:8081"
//! movie = "http://localhost:8082"
//! booking = "http://localhost:8083"
//!
//! [catalog]
//! page_size = 12          # movies revealed per "show more"
//! featured_count = 6      # movies on the home page
//!
//! [booking]
//! submit_mode = "no_auth" # or "authenticated"
//! seat_rows = 6
//! seat_columns = 10
//!
//! [notifications]
//! duration_ms = 4000
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ServicesConfig`] | Base URLs of the user, movie and booking services. |
//! | [`CatalogConfig`] | Reveal page size and home page count. |
//! | [`BookingConfig`] | Which booking endpoint to use and the seat grid size. |
//! | [`NotificationConfig`] | How long a toast stays on screen. |
//!
//! All structs implement `Default` with the production defaults, so a missing
//! or empty config file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `booking.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub services: ServicesConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Base URLs of the backend services.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServicesConfig {
    #[serde(default = "default_user_service")]
    pub user: String,
    #[serde(default = "default_movie_service")]
    pub movie: String,
    #[serde(default = "default_booking_service")]
    pub booking: String,
}

fn default_user_service() -> String {
    "http://localhost:8081".to_string()
}

fn default_movie_service() -> String {
    "http://localhost:8082".to_string()
}

fn default_booking_service() -> String {
    "http://localhost:8083".to_string()
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            user: default_user_service(),
            movie: default_movie_service(),
            booking: default_booking_service(),
        }
    }
}

/// Catalog page configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
}

fn default_page_size() -> usize {
    12
}

fn default_featured_count() -> usize {
    6
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            featured_count: default_featured_count(),
        }
    }
}

/// Which booking endpoint a submission goes to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitMode {
    /// `POST /bookings` with the bearer token identifying the user.
    Authenticated,
    /// `POST /bookings/no-auth` with the username in the body.
    #[default]
    NoAuth,
}

/// Booking flow configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingConfig {
    #[serde(default)]
    pub submit_mode: SubmitMode,
    #[serde(default = "default_seat_rows")]
    pub seat_rows: u8,
    #[serde(default = "default_seat_columns")]
    pub seat_columns: u8,
}

fn default_seat_rows() -> u8 {
    6
}

fn default_seat_columns() -> u8 {
    10
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            submit_mode: SubmitMode::default(),
            seat_rows: default_seat_rows(),
            seat_columns: default_seat_columns(),
        }
    }
}

/// Toast configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,
}

fn default_duration_ms() -> u32 {
    4000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "booking.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.services.movie, "http://localhost:8082");
        assert_eq!(config.catalog.page_size, 12);
        assert_eq!(config.booking.submit_mode, SubmitMode::NoAuth);
        assert_eq!(config.notifications.duration_ms, 4000);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [services]
            booking = "https://book.example.com"

            [booking]
            submit_mode = "authenticated"
            seat_rows = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.services.booking, "https://book.example.com");
        assert_eq!(config.services.user, "http://localhost:8081");
        assert_eq!(config.booking.submit_mode, SubmitMode::Authenticated);
        assert_eq!(config.booking.seat_rows, 8);
        assert_eq!(config.booking.seat_columns, 10);
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let mut config = AppConfig::default();
        config.catalog.page_size = 4;
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
    }
}

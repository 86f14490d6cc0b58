//! # Domain models for the catalog, sessions and bookings
//!
//! These are the records that cross the HTTP boundary to the three backend
//! services. Field names follow the backend's camelCase JSON.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Movie`] | A catalog entry from the movie service. Read-only on the client. |
//! | [`UserRecord`] | The current user as returned by `/auth/login`. |
//! | [`BookingRecord`] | A booking owned by the booking service. Only ever displayed. |
//! | [`BookingRequest`] | The body sent to `/bookings` or `/bookings/no-auth`. |
//!
//! ## Defaults
//!
//! The movie service marks most columns non-null, but older rows and the
//! debug endpoints can omit them. Missing fields fall back to the values the
//! home page has always displayed (`"Drama"`, `"PG-13"`, `"English"`, 120
//! minutes, ₹299) instead of being randomised, so re-rendering the same list
//! never reorders it.

use serde::{Deserialize, Serialize};

/// Ticket price shown when the catalog omits one.
pub const DEFAULT_TICKET_PRICE: f64 = 299.0;

const DEFAULT_GENRE: &str = "Drama";
const DEFAULT_RATING: &str = "PG-13";
const DEFAULT_LANGUAGE: &str = "English";
const DEFAULT_DURATION: u32 = 120;

/// A movie from the catalog service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default = "default_genre")]
    pub genre: String,
    #[serde(default = "default_language")]
    pub language: String,
    /// Running time in minutes.
    #[serde(default = "default_duration")]
    pub duration: u32,
    /// Audience rating, e.g. "PG-13".
    #[serde(default = "default_rating")]
    pub rating: String,
    /// Review score out of 10, when the catalog provides one.
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default = "default_ticket_price", alias = "price")]
    pub ticket_price: f64,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_genre() -> String {
    DEFAULT_GENRE.to_string()
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_rating() -> String {
    DEFAULT_RATING.to_string()
}

fn default_duration() -> u32 {
    DEFAULT_DURATION
}

fn default_ticket_price() -> f64 {
    DEFAULT_TICKET_PRICE
}

impl Movie {
    /// Description to display, with a generic blurb when the catalog has none.
    pub fn description_or_default(&self) -> String {
        match self.description.as_deref() {
            Some(d) if !d.trim().is_empty() => d.to_string(),
            _ => format!(
                "Experience the magic and wonder of {} in this unforgettable film.",
                self.title
            ),
        }
    }
}

/// The signed-in user, as stored alongside the auth token.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: u64,
    pub username: String,
    pub email: String,
}

impl UserRecord {
    /// Username, falling back to the email address when it is blank.
    pub fn display_name(&self) -> &str {
        if self.username.trim().is_empty() {
            &self.email
        } else {
            &self.username
        }
    }
}

/// A booking as returned by the booking service.
///
/// Every field is optional on the wire: a response without an `id` is how the
/// booking flow detects a rejected submission that still came back 2xx.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub movie_id: Option<u64>,
    #[serde(default)]
    pub seat_label: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    /// ISO-8601 local date-time, e.g. "2025-03-01T19:30:00".
    #[serde(default)]
    pub booked_at: Option<String>,
    #[serde(default)]
    pub movie_title: Option<String>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Body for a booking submission.
///
/// The booking service accepts exactly one seat per booking, so only one label
/// is ever sent even when several seats were selected.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    /// Movie id as a decimal string, which is what the booking service expects.
    pub movie_id: String,
    pub seat_label: String,
    /// Only present for the `/bookings/no-auth` endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_defaults_for_missing_fields() {
        let movie: Movie = serde_json::from_str(r#"{"id": 3, "title": "Heat"}"#).unwrap();
        assert_eq!(movie.genre, "Drama");
        assert_eq!(movie.rating, "PG-13");
        assert_eq!(movie.language, "English");
        assert_eq!(movie.duration, 120);
        assert_eq!(movie.ticket_price, 299.0);
        assert!(movie.score.is_none());
        assert!(movie.description_or_default().contains("Heat"));
    }

    #[test]
    fn test_movie_accepts_price_alias() {
        let movie: Movie =
            serde_json::from_str(r#"{"id": 1, "title": "Up", "price": 150.0}"#).unwrap();
        assert_eq!(movie.ticket_price, 150.0);

        let movie: Movie = serde_json::from_str(
            r#"{"id": 1, "title": "Up", "ticketPrice": 180.5, "posterUrl": "/up.jpg"}"#,
        )
        .unwrap();
        assert_eq!(movie.ticket_price, 180.5);
        assert_eq!(movie.poster_url.as_deref(), Some("/up.jpg"));
    }

    #[test]
    fn test_booking_request_wire_format() {
        let request = BookingRequest {
            movie_id: "7".to_string(),
            seat_label: "B4".to_string(),
            username: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"movieId": "7", "seatLabel": "B4"}));

        let request = BookingRequest {
            username: Some("ada@example.com".to_string()),
            ..request
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["username"], "ada@example.com");
    }

    #[test]
    fn test_booking_record_without_id() {
        let record: BookingRecord = serde_json::from_str(r#"{"seatLabel": "A1"}"#).unwrap();
        assert!(record.id.is_none());
        assert_eq!(record.seat_label.as_deref(), Some("A1"));
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let user = UserRecord {
            id: 1,
            username: " ".to_string(),
            email: "ada@example.com".to_string(),
        };
        assert_eq!(user.display_name(), "ada@example.com");
    }
}

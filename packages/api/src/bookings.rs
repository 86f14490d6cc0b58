//! Booking service, exposed to the page controllers as a
//! [`BookingBackend`].

use store::{BookingBackend, BookingRecord, BookingRequest};

use crate::client::{ApiClient, Service};
use crate::error::ApiError;

impl BookingBackend for ApiClient {
    type Error = ApiError;

    async fn create_booking(&self, request: &BookingRequest) -> Result<BookingRecord, ApiError> {
        let url = self.url(Service::Booking, "/bookings");
        self.post(&url, request).await?.into_json()
    }

    async fn create_booking_no_auth(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingRecord, ApiError> {
        let url = self.url(Service::Booking, "/bookings/no-auth");
        self.post(&url, request).await?.into_json()
    }

    async fn my_bookings(&self) -> Result<Vec<BookingRecord>, ApiError> {
        let url = self.url(Service::Booking, "/bookings/me");
        self.get(&url).await?.into_json()
    }

    async fn cancel_booking(&self, id: u64) -> Result<(), ApiError> {
        let url = self.url(Service::Booking, &format!("/bookings/{id}"));
        self.delete(&url).await?;
        tracing::info!(booking_id = id, "booking cancelled");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::client::ApiResponse;
    use store::{BookingRecord, BookingRequest};

    #[test]
    fn test_request_wire_format() {
        let no_auth = BookingRequest {
            movie_id: "7".to_string(),
            seat_label: "A2".to_string(),
            username: Some("ada@example.com".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&no_auth).unwrap(),
            serde_json::json!({"movieId": "7", "seatLabel": "A2", "username": "ada@example.com"})
        );

        let authed = BookingRequest {
            username: None,
            ..no_auth
        };
        assert_eq!(
            serde_json::to_value(&authed).unwrap(),
            serde_json::json!({"movieId": "7", "seatLabel": "A2"})
        );
    }

    #[test]
    fn test_booking_response_decodes() {
        let body = ApiResponse::Json(serde_json::json!({
            "id": 12,
            "movieId": 7,
            "seatLabel": "A2",
            "username": "ada@example.com",
            "bookedAt": "2025-03-01T19:30:00"
        }));
        let record: BookingRecord = body.into_json().unwrap();
        assert_eq!(record.id, Some(12));
        assert_eq!(record.movie_id, Some(7));
        assert!(record.total_amount.is_none());
    }
}

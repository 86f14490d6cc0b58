/// Failure of a call to one of the backend services.
///
/// The `Display` text is what the pages put in their error notifications.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, aborted).
    #[error("network error: {0}")]
    Request(#[from] reqwest::Error),
    /// A non-2xx response. `body` is kept for callers that map known
    /// rejection texts, such as registration conflicts.
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            ApiError::Decode(_) => None,
        }
    }

    /// Whether the service's rejection body mentions `needle`.
    pub fn body_contains(&self, needle: &str) -> bool {
        matches!(self, ApiError::Status { body, .. } if body.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_and_body() {
        let err = ApiError::Status {
            status: 400,
            body: "Username already exists".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP error! status: 400");
        assert_eq!(err.status(), Some(400));
        assert!(err.body_contains("Username already exists"));
        assert!(!err.body_contains("Email already exists"));
    }

    #[test]
    fn test_decode_error() {
        let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(err.to_string().starts_with("unexpected response"));
        assert_eq!(err.status(), None);
        assert!(!err.body_contains("nope"));
    }
}

//! # HTTP client wrapper
//!
//! [`ApiClient`] is the one place requests are built. It owns:
//!
//! - the three service base URLs from [`ServicesConfig`],
//! - the bearer token of the current session, if any.
//!
//! Every request is sent with `Content-Type: application/json` and, when a
//! token is present, `Authorization: Bearer <token>`. A missing token is not
//! an error here; the service decides what to do with an anonymous call.
//!
//! Responses whose `content-type` mentions `application/json` are parsed as
//! JSON; anything else is returned as text ([`ApiResponse`]). Non-2xx statuses
//! become [`ApiError::Status`].
//!
//! The URL, header and body helpers are free functions so they can be tested
//! without a network.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use store::config::ServicesConfig;

use crate::error::ApiError;

/// Which backend service a path belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Service {
    User,
    Movie,
    Booking,
}

/// A successful response body.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiResponse {
    Json(serde_json::Value),
    Text(String),
}

impl ApiResponse {
    /// Decode into `T`. A text body is parsed as JSON too, for services that
    /// forget the content type.
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        Ok(match self {
            ApiResponse::Json(value) => serde_json::from_value(value)?,
            ApiResponse::Text(text) => serde_json::from_str(&text)?,
        })
    }

    /// The body as display text. JSON strings are unquoted.
    pub fn into_text(self) -> String {
        match self {
            ApiResponse::Text(text) => text,
            ApiResponse::Json(serde_json::Value::String(s)) => s,
            ApiResponse::Json(value) => value.to_string(),
        }
    }
}

/// `base` + `path` with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// `Authorization` header value for a stored token.
pub fn bearer(token: Option<&str>) -> Option<String> {
    token
        .filter(|t| !t.is_empty())
        .map(|t| format!("Bearer {t}"))
}

pub fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains("application/json"))
}

/// Dispatch a 2xx body on its content type.
pub fn parse_body(content_type: Option<&str>, body: String) -> Result<ApiResponse, ApiError> {
    if !is_json(content_type) {
        return Ok(ApiResponse::Text(body));
    }
    if body.trim().is_empty() {
        return Ok(ApiResponse::Json(serde_json::Value::Null));
    }
    Ok(ApiResponse::Json(serde_json::from_str(&body)?))
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    services: ServicesConfig,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(services: ServicesConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            services,
            token: None,
        }
    }

    /// Same client, authenticated with `token`.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn url(&self, service: Service, path: &str) -> String {
        let base = match service {
            Service::User => &self.services.user,
            Service::Movie => &self.services.movie,
            Service::Booking => &self.services.booking,
        };
        join_url(base, path)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<ApiResponse, ApiError> {
        let mut request = request.header(CONTENT_TYPE, "application/json");
        if let Some(auth) = bearer(self.token.as_deref()) {
            request = request.header(AUTHORIZATION, auth);
        }

        let response = request.send().await.inspect_err(|e| {
            tracing::error!("API request failed: {e}");
        })?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "API request rejected: {body}");
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        parse_body(content_type.as_deref(), body)
    }

    pub async fn get(&self, url: &str) -> Result<ApiResponse, ApiError> {
        self.send(self.http.get(url)).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        self.send(self.http.post(url).json(body)).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<ApiResponse, ApiError> {
        self.send(self.http.put(url).json(body)).await
    }

    pub async fn delete(&self, url: &str) -> Result<ApiResponse, ApiError> {
        self.send(self.http.delete(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8082", "/api/movies"),
            "http://localhost:8082/api/movies"
        );
        assert_eq!(
            join_url("http://localhost:8082/", "api/movies"),
            "http://localhost:8082/api/movies"
        );
    }

    #[test]
    fn test_service_urls() {
        let client = ApiClient::new(ServicesConfig::default());
        assert_eq!(
            client.url(Service::User, "/auth/login"),
            "http://localhost:8081/auth/login"
        );
        assert_eq!(
            client.url(Service::Booking, "/bookings/no-auth"),
            "http://localhost:8083/bookings/no-auth"
        );
    }

    #[test]
    fn test_bearer_only_with_token() {
        assert_eq!(bearer(Some("abc")).as_deref(), Some("Bearer abc"));
        assert_eq!(bearer(Some("")), None);
        assert_eq!(bearer(None), None);

        let client = ApiClient::new(ServicesConfig::default()).with_token(Some(String::new()));
        assert_eq!(client.token(), None);
    }

    #[test]
    fn test_parse_body_by_content_type() {
        let json = parse_body(Some("application/json;charset=UTF-8"), r#"{"id":4}"#.to_string()).unwrap();
        assert_eq!(json, ApiResponse::Json(serde_json::json!({"id": 4})));

        let text = parse_body(Some("text/plain"), "User registered successfully".to_string()).unwrap();
        assert_eq!(text, ApiResponse::Text("User registered successfully".to_string()));

        let none = parse_body(None, "{}".to_string()).unwrap();
        assert_eq!(none, ApiResponse::Text("{}".to_string()));

        let empty = parse_body(Some("application/json"), String::new()).unwrap();
        assert_eq!(empty, ApiResponse::Json(serde_json::Value::Null));

        assert!(parse_body(Some("application/json"), "{oops".to_string()).is_err());
    }

    #[test]
    fn test_response_conversions() {
        let ids: Vec<u32> = ApiResponse::Text("[1,2]".to_string()).into_json().unwrap();
        assert_eq!(ids, vec![1, 2]);

        assert_eq!(ApiResponse::Json(serde_json::json!("ok")).into_text(), "ok");
        assert_eq!(ApiResponse::Json(serde_json::json!({"a": 1})).into_text(), r#"{"a":1}"#);
    }
}

//! User service: registration and login.

use serde::{Deserialize, Serialize};
use store::UserRecord;

use crate::client::{ApiClient, Service};
use crate::error::ApiError;

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    email: &'a str,
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Successful `POST /auth/login` body.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserRecord,
}

impl ApiClient {
    /// Create an account. Returns the service's confirmation text.
    ///
    /// A taken username or email comes back as [`ApiError::Status`] with the
    /// conflict named in the body.
    pub async fn register(
        &self,
        email: &str,
        username: &str,
        password: &str,
    ) -> Result<String, ApiError> {
        let url = self.url(Service::User, "/auth/register");
        let body = RegisterRequest {
            email,
            username,
            password,
        };
        Ok(self.post(&url, &body).await?.into_text())
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let url = self.url(Service::User, "/auth/login");
        self.post(&url, &LoginRequest { email, password })
            .await?
            .into_json()
    }
}

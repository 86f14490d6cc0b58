//! # Session store: auth token, current user, and the page handoff
//!
//! [`SessionStore`] keeps the client's durable state in a [`KeyValueStore`]
//! (browser `localStorage` on the web, [`crate::MemoryStore`] elsewhere):
//!
//! | Key | Value |
//! |-----|-------|
//! | `authToken` | Opaque bearer token from `/auth/login` |
//! | `currentUser` | JSON-encoded [`UserRecord`] |
//! | `selectedMovieId` | Single-use movie id handed from a listing page to the booking page |
//!
//! There is one session per browser profile. It exists from a successful
//! login until logout.
//!
//! ## Auth gate
//!
//! [`SessionStore::require_auth`] is the synchronous guard every protected
//! action calls first. On `Err(AuthRequired)` the caller raises the login
//! prompt and abandons the current operation. The prompt never resolves into
//! an authenticated state on its own; the user retries after signing in.

use crate::models::UserRecord;

pub const TOKEN_KEY: &str = "authToken";
pub const USER_KEY: &str = "currentUser";
pub const PENDING_MOVIE_KEY: &str = "selectedMovieId";

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// An authenticated session read from storage.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: Option<UserRecord>,
}

impl Session {
    /// Name for greetings and the booking form's default customer name.
    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(UserRecord::display_name)
    }

    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.email.as_str())
    }
}

/// Returned by the auth gate when no token is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Please sign in to access this page.")]
pub struct AuthRequired;

/// Durable client session backed by a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a fresh session after a successful login.
    pub fn login(&self, token: &str, user: &UserRecord) {
        self.store.set(TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(json) => self.store.set(USER_KEY, &json),
            Err(e) => tracing::warn!("failed to encode current user: {e}"),
        }
    }

    pub fn logout(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }

    /// A non-empty token is the only test.
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn current_user(&self) -> Option<UserRecord> {
        let raw = self.store.get(USER_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("ignoring unreadable current user: {e}");
                None
            }
        }
    }

    pub fn session(&self) -> Option<Session> {
        let token = self.token()?;
        Some(Session {
            token,
            user: self.current_user(),
        })
    }

    /// Synchronous auth gate.
    pub fn require_auth(&self) -> Result<Session, AuthRequired> {
        self.session().ok_or(AuthRequired)
    }

    /// Book `movie_id` from another page: with a session, store the handoff
    /// and return the session; without one, store nothing.
    pub fn hand_off_movie(&self, movie_id: u64) -> Result<Session, AuthRequired> {
        let session = self.require_auth()?;
        self.set_pending_movie(movie_id);
        Ok(session)
    }

    /// Hand a movie selection to the booking page.
    pub fn set_pending_movie(&self, movie_id: u64) {
        self.store.set(PENDING_MOVIE_KEY, &movie_id.to_string());
    }

    /// Read and clear the pending movie selection.
    ///
    /// The key is removed even when its value does not parse.
    pub fn take_pending_movie(&self) -> Option<u64> {
        let raw = self.store.get(PENDING_MOVIE_KEY)?;
        self.store.remove(PENDING_MOVIE_KEY);
        raw.trim().parse().ok()
    }
}

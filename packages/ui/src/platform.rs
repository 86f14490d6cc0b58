//! Platform glue shared by every page.
//!
//! Picks the session backing store for the target:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStorage`]
//! - **Native**: an in-process [`store::MemoryStore`]
//!
//! The session store is created once by [`AuthProvider`](crate::AuthProvider)
//! and shared through context, so native builds see one map for the whole app.

use std::time::Duration;

use api::ApiClient;
use dioxus::prelude::*;
use store::{AppConfig, Session, SessionStore};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::LocalStorage;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

pub type Sessions = SessionStore<PlatformStore>;

pub fn make_session_store() -> Sessions {
    SessionStore::new(PlatformStore::default())
}

pub fn use_sessions() -> Sessions {
    use_context::<Sessions>()
}

/// The app configuration provided at the root.
pub fn use_app_config() -> AppConfig {
    use_context::<AppConfig>()
}

/// Client for the configured services, authenticated as `session` if given.
pub fn api_client(config: &AppConfig, session: Option<&Session>) -> ApiClient {
    ApiClient::new(config.services.clone()).with_token(session.map(|s| s.token.clone()))
}

pub async fn sleep(ms: u32) {
    let duration = Duration::from_millis(u64::from(ms));
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

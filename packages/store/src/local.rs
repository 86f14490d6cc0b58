//! # `localStorage` key-value store: browser-side persistence
//!
//! [`LocalStorage`] is the [`KeyValueStore`] used on the **web platform**. It
//! writes straight through to `window.localStorage` via `web-sys`, so the
//! session survives reloads and is shared by every page of the origin.
//!
//! ## Error handling
//!
//! Reads return `None` and writes are dropped (with a `warn!`) when storage is
//! unavailable, e.g. in a private window with storage disabled. The UI then
//! behaves as if signed out rather than failing the page.

use crate::session::KeyValueStore;

/// `window.localStorage` store for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable; dropping {key}");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("failed to write {key} to localStorage");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable; cannot remove {key}");
            return;
        };
        if storage.remove_item(key).is_err() {
            tracing::warn!("failed to remove {key} from localStorage");
        }
    }
}

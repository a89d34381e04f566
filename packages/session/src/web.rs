//! # localStorage backend — browser-side persistence
//!
//! [`WebStorage`] is the [`StorageBackend`] implementation used on the
//! **web platform**. It persists the session keys into the browser's
//! `localStorage`, which is what makes the record visible to every surface
//! and every tab of the site.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). This keeps the UI resilient — storage being
//! disabled or unavailable degrades to "anonymous visitor" rather than
//! crashing. The authoritative identity always lives on the backend.

use crate::backend::StorageBackend;

/// `localStorage`-backed storage for the web platform.
#[derive(Clone, Debug, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl StorageBackend for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

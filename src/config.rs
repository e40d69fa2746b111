//! Runtime configuration shared by every view: the backend base URL.
//!
//! The store is an explicitly passed handle rather than a global. Clones share the
//! same value, so the login view can rewrite the address and the next request
//! issued by any other view picks it up. Nothing is persisted.

use std::sync::{Arc, PoisonError, RwLock};

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Shared, mutable base URL for the backend API.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    base_url: Arc<RwLock<String>>,
}

impl ConfigStore {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Arc::new(RwLock::new(base_url.into())),
        }
    }

    /// Returns the current base URL.
    #[must_use]
    pub fn get(&self) -> String {
        self.base_url
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Overwrites the base URL. The value is not validated; a malformed address
    /// surfaces as a config error on the next request.
    pub fn set(&self, base_url: impl Into<String>) {
        *self
            .base_url
            .write()
            .unwrap_or_else(PoisonError::into_inner) = base_url.into();
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigStore, DEFAULT_BASE_URL};

    #[test]
    fn default_points_at_local_backend() {
        let store = ConfigStore::default();
        assert_eq!(store.get(), DEFAULT_BASE_URL);
    }

    #[test]
    fn set_is_visible_through_every_clone() {
        let store = ConfigStore::default();
        let reader = store.clone();

        store.set("https://admin.example.test:8443");

        assert_eq!(reader.get(), "https://admin.example.test:8443");
    }

    #[test]
    fn set_accepts_unvalidated_values() {
        let store = ConfigStore::default();
        store.set("not a url");
        assert_eq!(store.get(), "not a url");

        store.set("");
        assert_eq!(store.get(), "");
    }
}

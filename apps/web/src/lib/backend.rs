//! Reactive mirror of the backend address. Requests read the [`ConfigStore`]
//! directly; the signal only exists so page chrome redraws after the login
//! page edits the address.

use leptos::prelude::*;
use useradmin::ConfigStore;

#[derive(Clone, Debug)]
pub struct BackendAddress {
    store: ConfigStore,
    current: RwSignal<String>,
}

impl BackendAddress {
    pub fn new(store: ConfigStore) -> Self {
        let current = RwSignal::new(store.get());
        Self { store, current }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Tracked read; use inside a view closure.
    pub fn get(&self) -> String {
        self.current.get()
    }

    /// Picks up a write made through the store.
    pub fn refresh(&self) {
        let latest = self.store.get();
        if self.current.with_untracked(|current| *current != latest) {
            self.current.set(latest);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BackendAddress;
    use leptos::prelude::*;
    use useradmin::{views::LoginView, ConfigStore};

    #[test]
    fn starts_from_the_store() {
        let backend = BackendAddress::new(ConfigStore::new("http://backend:5000"));
        assert_eq!(backend.current.get_untracked(), "http://backend:5000");
    }

    #[test]
    fn login_edit_reaches_the_header_value() {
        let backend = BackendAddress::new(ConfigStore::default());
        let mut view = LoginView::new(backend.store().clone());

        view.set_base_url("http://10.0.0.7:5000");
        assert_eq!(backend.current.get_untracked(), "http://localhost:5000");

        backend.refresh();
        assert_eq!(backend.current.get_untracked(), "http://10.0.0.7:5000");
    }
}

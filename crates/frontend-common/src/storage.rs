//! `localStorage` adapter for the session store

use std::rc::Rc;

use headline_core::{KeyValueStore, MemoryStore, SessionError, SessionResult};
use tracing::warn;
use web_sys::Storage;

/// Session store shared by the provider and the services
pub type SharedStore = Rc<dyn KeyValueStore>;

/// [`KeyValueStore`] over the browser's `localStorage`
#[derive(Clone, Debug)]
pub struct BrowserStore {
    storage: Storage,
}

impl BrowserStore {
    /// Open `window.localStorage`
    pub fn local() -> SessionResult<Self> {
        let window = web_sys::window().ok_or_else(|| SessionError::storage("no window"))?;
        let storage = window
            .local_storage()
            .map_err(|err| SessionError::storage(format!("localStorage denied: {err:?}")))?
            .ok_or_else(|| SessionError::storage("localStorage unavailable"))?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|err| SessionError::storage(format!("read {key}: {err:?}")))
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|err| SessionError::storage(format!("write {key}: {err:?}")))
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|err| SessionError::storage(format!("remove {key}: {err:?}")))
    }
}

/// `localStorage` when the browser allows it, otherwise an in-memory store
/// that lasts for the page load
pub fn open_session_store() -> SharedStore {
    match BrowserStore::local() {
        Ok(store) => Rc::new(store),
        Err(err) => {
            warn!(error = %err, "Falling back to in-memory session storage");
            Rc::new(MemoryStore::new())
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use headline_core::session::keys;
    use headline_core::{NewSession, SessionManager};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn store() -> BrowserStore {
        let store = BrowserStore::local().unwrap();
        for key in keys::ALL {
            store.remove(key).unwrap();
        }
        store
    }

    #[wasm_bindgen_test]
    fn test_round_trips_values() {
        let store = store();
        store.set(keys::EMAIL, "reader@example.com").unwrap();

        assert_eq!(
            store.get(keys::EMAIL).unwrap().as_deref(),
            Some("reader@example.com")
        );
        store.remove(keys::EMAIL).unwrap();
        assert_eq!(store.get(keys::EMAIL).unwrap(), None);
    }

    #[wasm_bindgen_test]
    fn test_values_are_stored_raw() {
        let store = store();
        store.set(keys::ACCESS_TOKEN, "a.b.c").unwrap();

        let raw = web_sys::window()
            .unwrap()
            .local_storage()
            .unwrap()
            .unwrap()
            .get_item("access_token")
            .unwrap();
        assert_eq!(raw.as_deref(), Some("a.b.c"));
    }

    #[wasm_bindgen_test]
    fn test_session_manager_over_local_storage() {
        let sessions = SessionManager::new(store());
        sessions
            .establish(&NewSession {
                email: "reader@example.com".into(),
                access_token: "a.b.c".into(),
                refresh_token: Some("refresh".into()),
                display_name: None,
            })
            .unwrap();

        let session = sessions.get_session().unwrap();
        assert_eq!(session.display_name.as_deref(), Some("Me"));

        sessions.clear_session().unwrap();
        assert!(sessions.get_session().unwrap().is_empty());
    }
}

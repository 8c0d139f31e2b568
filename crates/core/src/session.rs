//! Persisted client session record and the key-value seam it lives behind

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::error::SessionResult;

/// Storage key names. These are shared with previously deployed clients, so
/// renaming one logs every existing user out.
pub mod keys {
    pub const EMAIL: &str = "email";
    pub const ACCESS_TOKEN: &str = "access_token";
    pub const REFRESH_TOKEN: &str = "refresh_token";
    pub const DISPLAY_NAME: &str = "username";

    pub const ALL: [&str; 4] = [EMAIL, ACCESS_TOKEN, REFRESH_TOKEN, DISPLAY_NAME];
}

/// Display name stored when the login response does not carry one
pub const DEFAULT_DISPLAY_NAME: &str = "Me";

/// Durable string key-value storage (browser `localStorage` in production)
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    fn get(&self, key: &str) -> SessionResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> SessionResult<()>;
    fn remove(&self, key: &str) -> SessionResult<()>;
}

/// Snapshot of the four session values as they sit in storage
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub email: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub display_name: Option<String>,
}

impl Session {
    /// Read all four values from the store
    pub fn load(store: &impl KeyValueStore) -> SessionResult<Self> {
        Ok(Self {
            email: non_empty(store.get(keys::EMAIL)?),
            access_token: non_empty(store.get(keys::ACCESS_TOKEN)?),
            refresh_token: non_empty(store.get(keys::REFRESH_TOKEN)?),
            display_name: non_empty(store.get(keys::DISPLAY_NAME)?),
        })
    }

    /// Both identifying values are present (freshness not considered)
    #[must_use]
    pub const fn has_credentials(&self) -> bool {
        self.email.is_some() && self.access_token.is_some()
    }

    /// Nothing at all is stored
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.access_token.is_none()
            && self.refresh_token.is_none()
            && self.display_name.is_none()
    }

    /// Some values are stored but not enough to identify the user
    #[must_use]
    pub const fn is_partial(&self) -> bool {
        !self.is_empty() && !self.has_credentials()
    }

    /// Name to show in the UI
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(DEFAULT_DISPLAY_NAME)
    }
}

/// Values written after a successful login
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewSession {
    pub email: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub display_name: Option<String>,
}

/// Tokens returned by a successful refresh
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshedTokens {
    pub access_token: String,
    /// Present when the auth service rotates refresh tokens
    pub refresh_token: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// In-memory store, used by tests and as a fallback when the browser denies
/// access to `localStorage`
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given pairs
    #[must_use]
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        store
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    #[must_use]
    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> SessionResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> SessionResult<()> {
        (**self).remove(key)
    }
}

//! Session lifecycle: bootstrap on load, refresh on expiry, clear on failure
//!
//! Every read and write of the four session keys goes through
//! [`SessionManager`], so the record is established, refreshed and cleared
//! as a unit instead of key by key from each page.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::error::{SessionError, SessionResult};
use crate::session::{DEFAULT_DISPLAY_NAME, KeyValueStore, NewSession, RefreshedTokens, Session, keys};
use crate::token::{TokenStatus, check_token};

/// Exchanges a refresh token for new tokens (the remote auth service)
#[async_trait(?Send)]
pub trait TokenRefresher {
    type Error: std::fmt::Display;

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshedTokens, Self::Error>;
}

/// Result of the once-per-load session check
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// No usable session is stored
    LoggedOut,
    /// Stored access token is still fresh
    LoggedIn(Session),
    /// Access token had expired and was replaced
    Refreshed(Session),
    /// Stored session was unusable and has been removed
    Cleared(SessionError),
}

impl BootstrapOutcome {
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::LoggedIn(session) | Self::Refreshed(session) => Some(session),
            Self::LoggedOut | Self::Cleared(_) => None,
        }
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }
}

/// Owns the persisted session record
#[derive(Clone, Debug)]
pub struct SessionManager<S> {
    store: S,
}

impl<S: KeyValueStore> SessionManager<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Current stored values, without any freshness decision
    pub fn get_session(&self) -> SessionResult<Session> {
        Session::load(&self.store)
    }

    /// The stored session if it identifies the user and its token is fresh.
    /// Does not refresh and does not modify storage.
    pub fn active_session(&self, now: DateTime<Utc>) -> SessionResult<Option<Session>> {
        let session = self.get_session()?;
        let fresh = session
            .access_token
            .as_deref()
            .is_some_and(|token| check_token(token, now).is_fresh());
        Ok((session.has_credentials() && fresh).then_some(session))
    }

    /// Replace whatever is stored with a freshly issued session
    pub fn establish(&self, new_session: &NewSession) -> SessionResult<Session> {
        self.clear_keys()?;
        self.store.set(keys::EMAIL, &new_session.email)?;
        self.store.set(keys::ACCESS_TOKEN, &new_session.access_token)?;
        if let Some(refresh_token) = &new_session.refresh_token {
            self.store.set(keys::REFRESH_TOKEN, refresh_token)?;
        }
        let display_name = new_session
            .display_name
            .as_deref()
            .unwrap_or(DEFAULT_DISPLAY_NAME);
        self.store.set(keys::DISPLAY_NAME, display_name)?;

        info!("Session established");
        self.get_session()
    }

    /// Remove all four session values
    pub fn clear_session(&self) -> SessionResult<()> {
        self.clear_keys()?;
        info!("Session cleared");
        Ok(())
    }

    fn clear_keys(&self) -> SessionResult<()> {
        for key in keys::ALL {
            self.store.remove(key)?;
        }
        Ok(())
    }

    /// Exchange the stored refresh token for a new access token.
    ///
    /// Any failure, including a missing refresh token, clears the session.
    pub async fn refresh<R>(&self, refresher: &R) -> SessionResult<Session>
    where
        R: TokenRefresher + ?Sized,
    {
        let refresh_token = self
            .store
            .get(keys::REFRESH_TOKEN)?
            .filter(|token| !token.is_empty());
        let Some(refresh_token) = refresh_token else {
            warn!("Access token expired and no refresh token is stored");
            self.clear_session()?;
            return Err(SessionError::MissingRefreshToken);
        };

        debug!("Refreshing access token");
        match refresher.refresh(&refresh_token).await {
            Ok(tokens) => {
                self.store.set(keys::ACCESS_TOKEN, &tokens.access_token)?;
                if let Some(rotated) = &tokens.refresh_token {
                    self.store.set(keys::REFRESH_TOKEN, rotated)?;
                }
                debug!("Access token refreshed");
                self.get_session()
            }
            Err(error) => {
                warn!(%error, "Token refresh failed, logging out");
                self.clear_session()?;
                Err(SessionError::refresh_failed(error.to_string()))
            }
        }
    }

    /// Decide, once per page load, whether the user is signed in.
    ///
    /// Expired tokens are refreshed exactly once. Unusable state (a partial
    /// record, a malformed token, a failed refresh) is cleared. Only storage
    /// failures surface as `Err`.
    pub async fn bootstrap<R>(
        &self,
        refresher: &R,
        now: DateTime<Utc>,
    ) -> SessionResult<BootstrapOutcome>
    where
        R: TokenRefresher + ?Sized,
    {
        let session = self.get_session()?;
        if !session.has_credentials() {
            if session.is_partial() {
                warn!("Partial session found in storage, clearing it");
                self.clear_keys()?;
            } else {
                debug!("No stored session");
            }
            return Ok(BootstrapOutcome::LoggedOut);
        }

        let token = session.access_token.as_deref().unwrap_or_default();
        match check_token(token, now) {
            TokenStatus::Fresh { .. } => Ok(BootstrapOutcome::LoggedIn(session)),
            TokenStatus::Invalid(reason) => {
                warn!(%reason, "Stored access token is malformed, clearing session");
                self.clear_session()?;
                Ok(BootstrapOutcome::Cleared(SessionError::InvalidToken(reason)))
            }
            TokenStatus::Expired { .. } => match self.refresh(refresher).await {
                Ok(session) => Ok(BootstrapOutcome::Refreshed(session)),
                Err(err @ (SessionError::MissingRefreshToken | SessionError::RefreshFailed { .. })) => {
                    Ok(BootstrapOutcome::Cleared(err))
                }
                Err(err) => Err(err),
            },
        }
    }

    /// Usable session after refreshing if necessary; `None` when logged out
    pub async fn refresh_if_needed<R>(
        &self,
        refresher: &R,
        now: DateTime<Utc>,
    ) -> SessionResult<Option<Session>>
    where
        R: TokenRefresher + ?Sized,
    {
        match self.bootstrap(refresher, now).await? {
            BootstrapOutcome::LoggedOut => Ok(None),
            BootstrapOutcome::LoggedIn(session) | BootstrapOutcome::Refreshed(session) => {
                Ok(Some(session))
            }
            BootstrapOutcome::Cleared(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemoryStore;
    use crate::token::test_tokens::expiring_at;
    use chrono::TimeZone;
    use std::cell::{Cell, RefCell};

    const NOW: i64 = 1_700_000_000;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(NOW, 0).unwrap()
    }

    /// Refresher that records the tokens it was asked to exchange
    struct FakeRefresher {
        response: Result<RefreshedTokens, String>,
        calls: Cell<usize>,
        seen: RefCell<Vec<String>>,
    }

    impl FakeRefresher {
        fn succeeding(access_token: &str, refresh_token: Option<&str>) -> Self {
            Self {
                response: Ok(RefreshedTokens {
                    access_token: access_token.to_string(),
                    refresh_token: refresh_token.map(str::to_string),
                }),
                calls: Cell::new(0),
                seen: RefCell::new(Vec::new()),
            }
        }

        fn failing(message: &str) -> Self {
            Self {
                response: Err(message.to_string()),
                calls: Cell::new(0),
                seen: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl TokenRefresher for FakeRefresher {
        type Error = String;

        async fn refresh(&self, refresh_token: &str) -> Result<RefreshedTokens, String> {
            self.calls.set(self.calls.get() + 1);
            self.seen.borrow_mut().push(refresh_token.to_string());
            self.response.clone()
        }
    }

    fn stored_session(access_token: &str) -> MemoryStore {
        MemoryStore::with_entries([
            (keys::EMAIL, "reader@example.com"),
            (keys::ACCESS_TOKEN, access_token),
            (keys::REFRESH_TOKEN, "refresh-1"),
            (keys::DISPLAY_NAME, "Me"),
        ])
    }

    fn assert_all_keys_absent(store: &MemoryStore) {
        for key in keys::ALL {
            assert!(!store.contains(key), "{key} should have been removed");
        }
    }

    #[tokio::test]
    async fn test_bootstrap_without_session_is_logged_out() {
        let manager = SessionManager::new(MemoryStore::new());
        let refresher = FakeRefresher::succeeding("unused", None);

        let outcome = manager.bootstrap(&refresher, now()).await.unwrap();
        assert_eq!(outcome, BootstrapOutcome::LoggedOut);
        assert_eq!(refresher.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_bootstrap_with_fresh_token_is_logged_in() {
        let token = expiring_at(NOW + 3600);
        let manager = SessionManager::new(stored_session(&token));
        let refresher = FakeRefresher::succeeding("unused", None);

        let outcome = manager.bootstrap(&refresher, now()).await.unwrap();
        assert!(outcome.is_authenticated());
        assert!(matches!(outcome, BootstrapOutcome::LoggedIn(_)));
        assert_eq!(refresher.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_bootstrap_refreshes_expired_token_once() {
        let expired = expiring_at(NOW - 60);
        let renewed = expiring_at(NOW + 3600);
        let manager = SessionManager::new(stored_session(&expired));
        let refresher = FakeRefresher::succeeding(&renewed, None);

        let outcome = manager.bootstrap(&refresher, now()).await.unwrap();

        assert_eq!(refresher.calls.get(), 1);
        assert_eq!(refresher.seen.borrow().as_slice(), ["refresh-1".to_string()]);
        match outcome {
            BootstrapOutcome::Refreshed(session) => {
                assert_eq!(session.access_token.as_deref(), Some(renewed.as_str()));
                assert_eq!(session.refresh_token.as_deref(), Some("refresh-1"));
            }
            other => panic!("expected refreshed session, got {other:?}"),
        }
        assert_eq!(
            manager.store().value(keys::ACCESS_TOKEN).as_deref(),
            Some(renewed.as_str())
        );
    }

    #[tokio::test]
    async fn test_refresh_persists_rotated_refresh_token() {
        let manager = SessionManager::new(stored_session(&expiring_at(NOW - 60)));
        let refresher = FakeRefresher::succeeding(&expiring_at(NOW + 60), Some("refresh-2"));

        manager.refresh(&refresher).await.unwrap();
        assert_eq!(
            manager.store().value(keys::REFRESH_TOKEN).as_deref(),
            Some("refresh-2")
        );
    }

    #[tokio::test]
    async fn test_failed_refresh_clears_every_key() {
        let manager = SessionManager::new(stored_session(&expiring_at(NOW - 60)));
        let refresher = FakeRefresher::failing("401 Unauthorized");

        let outcome = manager.bootstrap(&refresher, now()).await.unwrap();

        assert_eq!(refresher.calls.get(), 1);
        assert_eq!(
            outcome,
            BootstrapOutcome::Cleared(SessionError::refresh_failed("401 Unauthorized"))
        );
        assert!(!outcome.is_authenticated());
        assert_all_keys_absent(manager.store());
    }

    #[tokio::test]
    async fn test_missing_refresh_token_clears_without_calling_service() {
        let store = MemoryStore::with_entries([
            (keys::EMAIL, "reader@example.com"),
            (keys::DISPLAY_NAME, "Me"),
        ]);
        let expired = expiring_at(NOW - 60);
        store.set(keys::ACCESS_TOKEN, &expired).unwrap();
        let manager = SessionManager::new(store);
        let refresher = FakeRefresher::succeeding("unused", None);

        let result = manager.refresh_if_needed(&refresher, now()).await;

        assert_eq!(result, Err(SessionError::MissingRefreshToken));
        assert_eq!(refresher.calls.get(), 0);
        assert_all_keys_absent(manager.store());
    }

    #[tokio::test]
    async fn test_malformed_token_is_cleared_not_refreshed() {
        let manager = SessionManager::new(stored_session("not-a-jwt"));
        let refresher = FakeRefresher::succeeding("unused", None);

        let outcome = manager.bootstrap(&refresher, now()).await.unwrap();

        assert!(matches!(
            outcome,
            BootstrapOutcome::Cleared(SessionError::InvalidToken(_))
        ));
        assert_eq!(refresher.calls.get(), 0);
        assert_all_keys_absent(manager.store());
    }

    #[tokio::test]
    async fn test_partial_session_is_cleared() {
        let store = MemoryStore::with_entries([
            (keys::ACCESS_TOKEN, "orphaned.token.value"),
            (keys::DISPLAY_NAME, "Me"),
        ]);
        let manager = SessionManager::new(store);
        let refresher = FakeRefresher::succeeding("unused", None);

        let outcome = manager.bootstrap(&refresher, now()).await.unwrap();

        assert_eq!(outcome, BootstrapOutcome::LoggedOut);
        assert_all_keys_absent(manager.store());
    }

    #[tokio::test]
    async fn test_refresh_if_needed_returns_fresh_session_untouched() {
        let token = expiring_at(NOW + 60);
        let manager = SessionManager::new(stored_session(&token));
        let refresher = FakeRefresher::failing("should not be called");

        let session = manager
            .refresh_if_needed(&refresher, now())
            .await
            .unwrap()
            .expect("session should be active");
        assert_eq!(session.access_token.as_deref(), Some(token.as_str()));
        assert_eq!(refresher.calls.get(), 0);
    }

    #[test]
    fn test_establish_replaces_stale_values() {
        let manager = SessionManager::new(stored_session("old.token.value"));
        let session = manager
            .establish(&NewSession {
                email: "new@example.com".into(),
                access_token: "a.b.c".into(),
                refresh_token: None,
                display_name: None,
            })
            .unwrap();

        assert_eq!(session.email.as_deref(), Some("new@example.com"));
        assert_eq!(session.access_token.as_deref(), Some("a.b.c"));
        assert_eq!(session.refresh_token, None);
        assert_eq!(session.display_name.as_deref(), Some(DEFAULT_DISPLAY_NAME));
    }

    #[test]
    fn test_active_session_requires_fresh_token() {
        let manager = SessionManager::new(stored_session(&expiring_at(NOW + 60)));
        assert!(manager.active_session(now()).unwrap().is_some());

        let manager = SessionManager::new(stored_session(&expiring_at(NOW - 60)));
        assert!(manager.active_session(now()).unwrap().is_none());
        // Checking alone never clears anything
        assert!(manager.store().contains(keys::ACCESS_TOKEN));
    }

    #[test]
    fn test_clear_session_removes_all_keys() {
        let manager = SessionManager::new(stored_session("a.b.c"));
        manager.clear_session().unwrap();
        assert_all_keys_absent(manager.store());
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces_as_error() {
        let mut store = crate::session::MockKeyValueStore::new();
        store
            .expect_get()
            .returning(|_| Err(SessionError::storage("localStorage is disabled")));
        let manager = SessionManager::new(store);
        let refresher = FakeRefresher::succeeding("unused", None);

        let result = manager.bootstrap(&refresher, now()).await;
        assert_eq!(result, Err(SessionError::storage("localStorage is disabled")));
        assert_eq!(refresher.calls.get(), 0);
    }
}

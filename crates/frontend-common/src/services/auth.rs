//! Authentication API service

use chrono::Utc;
use headline_core::{BootstrapOutcome, Session, SessionResult};
use headline_http::flows::{self, FlowError};
use headline_http::types::SignupRequest;
use tracing::error;

use crate::client::{public_client, session_manager};

/// Authentication API service
#[derive(Clone, Debug, Default)]
pub struct AuthApiService;

impl AuthApiService {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Decide whether the stored session is usable, refreshing it if needed
    pub async fn restore_session(&self) -> BootstrapOutcome {
        let client = match public_client() {
            Ok(client) => client,
            Err(err) => {
                error!(error = %err, "API client unavailable, starting signed out");
                return BootstrapOutcome::LoggedOut;
            }
        };

        settle_bootstrap(session_manager().bootstrap(&client, Utc::now()).await)
    }

    /// Log in and persist the session
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, FlowError> {
        let client = public_client()?;
        flows::sign_in(&client, &session_manager(), email, password).await
    }

    pub async fn signup(
        &self,
        username: String,
        email: String,
        password: String,
    ) -> Result<(), FlowError> {
        let client = public_client()?;
        let request = SignupRequest {
            username,
            email,
            password,
        };
        flows::sign_up(&client, &request).await
    }

    /// Remove every stored session value
    pub fn logout(&self) -> SessionResult<()> {
        session_manager().clear_session()
    }
}

/// Storage failures leave whatever was stored in place, so they start the
/// page signed out rather than reporting a cleared session
fn settle_bootstrap(result: SessionResult<BootstrapOutcome>) -> BootstrapOutcome {
    match result {
        Ok(outcome) => outcome,
        Err(err) => {
            error!(error = %err, "Session bootstrap failed");
            BootstrapOutcome::LoggedOut
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use headline_core::SessionError;

    #[test]
    fn test_storage_failure_starts_logged_out() {
        let outcome = settle_bootstrap(Err(SessionError::storage("localStorage denied")));
        assert_eq!(outcome, BootstrapOutcome::LoggedOut);
    }

    #[test]
    fn test_bootstrap_outcome_passes_through() {
        let cleared = BootstrapOutcome::Cleared(SessionError::MissingRefreshToken);
        assert_eq!(settle_bootstrap(Ok(cleared.clone())), cleared);
    }
}

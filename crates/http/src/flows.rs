//! Request flows that read or write the persisted session
//!
//! The pages call these instead of the raw client so that what gets stored
//! after login, and what gets cleared when a token is rejected, is decided
//! in one place.

use chrono::{DateTime, Utc};
use headline_core::{KeyValueStore, NewSession, Session, SessionError, SessionManager};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::client::{ClientError, GENERIC_ERROR_MESSAGE, PublicClient};
use crate::types::{LoginForm, SignupRequest};

/// Shown when the session ended underneath a request
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

/// Shown when a protected action is attempted without a session
pub const NOT_SIGNED_IN_MESSAGE: &str = "Please log in to continue.";

#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("Not signed in")]
    NotSignedIn,
}

impl FlowError {
    /// Text to display to the user
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Client(err) => err.user_message(),
            Self::Session(SessionError::Storage { .. }) => GENERIC_ERROR_MESSAGE.to_string(),
            Self::Session(_) => SESSION_EXPIRED_MESSAGE.to_string(),
            Self::NotSignedIn => NOT_SIGNED_IN_MESSAGE.to_string(),
        }
    }

    /// The session is gone and the user has to log in again
    #[must_use]
    pub const fn requires_login(&self) -> bool {
        match self {
            Self::Client(err) => err.is_auth_expired(),
            Self::Session(SessionError::Storage { .. }) => false,
            Self::Session(_) | Self::NotSignedIn => true,
        }
    }
}

/// Log in and persist the issued session
pub async fn sign_in<S: KeyValueStore>(
    client: &PublicClient,
    sessions: &SessionManager<S>,
    email: &str,
    password: &str,
) -> Result<Session, FlowError> {
    let tokens = client
        .login(&LoginForm {
            username: email.to_string(),
            password: password.to_string(),
        })
        .await?;

    let session = sessions.establish(&NewSession {
        email: email.to_string(),
        access_token: tokens.access_token,
        refresh_token: tokens.refresh_token,
        display_name: tokens.username,
    })?;
    info!("Signed in");
    Ok(session)
}

/// Create an account. Nothing is persisted; the user logs in afterwards.
pub async fn sign_up(client: &PublicClient, request: &SignupRequest) -> Result<(), FlowError> {
    client.signup(request).await?;
    info!("Account created");
    Ok(())
}

/// Send a chat query with the stored access token, refreshing it first if it
/// has expired. A rejected token clears the session.
pub async fn ask_agent<S: KeyValueStore>(
    client: &PublicClient,
    sessions: &SessionManager<S>,
    query: &str,
    now: DateTime<Utc>,
) -> Result<String, FlowError> {
    let session = sessions
        .refresh_if_needed(client, now)
        .await?
        .ok_or(FlowError::NotSignedIn)?;
    let access_token = session.access_token.ok_or(FlowError::NotSignedIn)?;

    debug!(query_len = query.len(), "Calling agent");
    match client.authenticate(access_token).ask(query).await {
        Ok(reply) => Ok(reply),
        Err(err) if err.is_auth_expired() => {
            warn!("Agent rejected the access token, clearing session");
            sessions.clear_session()?;
            Err(err.into())
        }
        Err(err) => {
            warn!(error = %err, "Agent call failed");
            Err(err.into())
        }
    }
}

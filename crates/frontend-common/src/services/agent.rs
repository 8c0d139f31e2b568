//! Chat agent service

use chrono::Utc;
use headline_core::Session;
use headline_http::flows::{self, FlowError};
use tracing::warn;

use crate::client::{public_client, session_manager};

#[derive(Clone, Debug, Default)]
pub struct AgentService;

impl AgentService {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Send a query with the stored access token. An expired token is
    /// refreshed first; a rejected one ends the session.
    pub async fn ask(&self, query: &str) -> Result<String, FlowError> {
        let client = public_client()?;
        flows::ask_agent(&client, &session_manager(), query, Utc::now()).await
    }

    /// The next [`Self::ask`] has to refresh the access token first
    #[must_use]
    pub fn needs_refresh(&self) -> bool {
        match session_manager().active_session(Utc::now()) {
            Ok(active) => active.is_none(),
            Err(err) => {
                warn!(error = %err, "Could not read the stored session");
                false
            }
        }
    }

    /// What storage holds after a call, for syncing the session context
    #[must_use]
    pub fn stored_session(&self) -> Option<Session> {
        session_manager()
            .get_session()
            .ok()
            .filter(Session::has_credentials)
    }
}

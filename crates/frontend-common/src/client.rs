//! Client configuration and initialization

use std::cell::RefCell;

use headline_core::SessionManager;
pub use headline_http::ClientError;
use headline_http::{ClientBuilder, PublicClient};

use crate::config::AppConfig;
use crate::storage::{SharedStore, open_session_store};

/// Session manager over the page's session store
pub type AppSessions = SessionManager<SharedStore>;

thread_local! {
    static PUBLIC_CLIENT: RefCell<Option<PublicClient>> = const { RefCell::new(None) };
    static SESSIONS: RefCell<Option<AppSessions>> = const { RefCell::new(None) };
}

/// Get the public client instance, building it on first use
pub fn public_client() -> Result<PublicClient, ClientError> {
    PUBLIC_CLIENT.with(|cell| {
        if let Some(client) = cell.borrow().as_ref() {
            return Ok(client.clone());
        }

        let client = ClientBuilder::new()
            .base_url(AppConfig::api_base_url())
            .user_agent(AppConfig::USER_AGENT)
            .build_public()?;
        *cell.borrow_mut() = Some(client.clone());
        Ok(client)
    })
}

/// Get the session manager, opening the store on first use
pub fn session_manager() -> AppSessions {
    SESSIONS.with(|cell| {
        cell.borrow_mut()
            .get_or_insert_with(|| SessionManager::new(open_session_store()))
            .clone()
    })
}

//! Pieces shared by the HeadlineAI pages: the session provider, browser
//! storage, the API client registry and small components.

pub mod client;
pub mod components;
pub mod config;
pub mod services;
pub mod session;
pub mod storage;

pub use client::{AppSessions, public_client, session_manager};
pub use components::{ButtonSpinner, Notice, NoticeKind, Spinner, UserIcon};
pub use config::AppConfig;
pub use services::{AgentService, AuthApiService};
pub use session::{
    SessionAction, SessionContext, SessionProvider, SessionState, use_is_authenticated,
    use_logout, use_session,
};
pub use storage::{BrowserStore, SharedStore, open_session_store};

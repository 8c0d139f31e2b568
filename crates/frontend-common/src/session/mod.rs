//! Shared session state for every page

pub mod context;

pub use context::{
    SessionAction, SessionContext, SessionProvider, SessionState, use_is_authenticated,
    use_logout, use_session,
};

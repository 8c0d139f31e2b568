//! HeadlineAI client session core
//!
//! Holds the pieces of the web client that carry real decisions: the
//! persisted session record, the bearer-token freshness check and the
//! refresh-or-clear lifecycle. Nothing in here touches the browser directly;
//! storage and the refresh call come in through traits so the logic runs the
//! same under wasm and in native tests.

pub mod error;
pub mod manager;
pub mod session;
pub mod token;

pub use error::{SessionError, SessionResult};
pub use manager::{BootstrapOutcome, SessionManager, TokenRefresher};
pub use session::{KeyValueStore, MemoryStore, NewSession, RefreshedTokens, Session};
pub use token::{Expiry, InvalidToken, TokenStatus, check_token, decode_expiry, is_token_expired};

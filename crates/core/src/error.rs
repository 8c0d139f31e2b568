//! Session error types

use crate::token::InvalidToken;

/// Standard result type for session operations
pub type SessionResult<T> = std::result::Result<T, SessionError>;

/// Errors raised while maintaining the client session
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("No refresh token is stored")]
    MissingRefreshToken,

    #[error("Token refresh failed: {message}")]
    RefreshFailed { message: String },

    #[error("Stored access token is invalid: {0}")]
    InvalidToken(#[from] InvalidToken),

    #[error("Session storage failed: {message}")]
    Storage { message: String },
}

impl SessionError {
    /// Create a refresh failure
    pub fn refresh_failed(message: impl Into<String>) -> Self {
        Self::RefreshFailed {
            message: message.into(),
        }
    }

    /// Create a storage failure
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

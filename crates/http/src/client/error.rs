//! Client error types

use std::fmt;
use thiserror::Error;

use crate::types::ErrorBody;

/// Text shown when the failure has no server-provided explanation
pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred.";

/// Error text returned by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerMessage {
    /// `detail` from the JSON error body, if there was one
    pub detail: Option<String>,
    /// Raw response body
    pub body: String,
}

impl ServerMessage {
    /// Parse an error response body
    #[must_use]
    pub fn from_body(body: String) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|parsed| parsed.message());
        Self { detail, body }
    }
}

impl fmt::Display for ServerMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => f.write_str(detail),
            None => f.write_str(&self.body),
        }
    }
}

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(ServerMessage),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(ServerMessage),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(ServerMessage),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(ServerMessage),

    /// Server returned another error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: ServerMessage },

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Agent answered without any message content
    #[error("Agent response contained no reply")]
    EmptyReply,
}

impl ClientError {
    /// Create error from HTTP status code and response body
    #[must_use]
    pub fn from_status(status: reqwest::StatusCode, body: String) -> Self {
        let message = ServerMessage::from_body(body);
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Server-provided error text, when the server sent one
    #[must_use]
    pub fn server_message(&self) -> Option<&ServerMessage> {
        match self {
            Self::AuthenticationFailed(message)
            | Self::BadRequest(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::ServerError { message, .. } => Some(message),
            _ => None,
        }
    }

    /// `detail` reported by the server
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        self.server_message()
            .and_then(|message| message.detail.as_deref())
    }

    /// Text to display to the user: the server's detail verbatim, or a
    /// generic fallback for transport and decoding failures
    #[must_use]
    pub fn user_message(&self) -> String {
        self.detail()
            .map_or_else(|| GENERIC_ERROR_MESSAGE.to_string(), str::to_string)
    }

    /// The bearer token was rejected
    #[must_use]
    pub const fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }
}

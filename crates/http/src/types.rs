//! Request and response bodies of the HeadlineAI API

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Form body of `POST /auth/login`; `username` carries the email address
#[derive(Debug, Clone, Serialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// JSON body of `POST /auth/signup`
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// JSON body of `POST /auth/refresh`
#[derive(Debug, Clone, Serialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Tokens issued by login and refresh
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

/// JSON body of `POST /ai/call_agent`
#[derive(Debug, Clone, Serialize)]
pub struct AgentRequest {
    pub query: String,
}

/// Agent transcript; the last message is the reply
#[derive(Debug, Clone, Deserialize)]
pub struct AgentResponse {
    #[serde(default)]
    pub messages: Vec<AgentMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentMessage {
    #[serde(default)]
    pub content: Option<Value>,

    // type, name, id, tool_calls, etc.
    #[serde(flatten)]
    pub metadata: HashMap<String, Value>,
}

impl AgentMessage {
    /// Text content of the message
    #[must_use]
    pub fn text(&self) -> Option<String> {
        match self.content.as_ref()? {
            Value::Null => None,
            Value::String(text) => Some(text.clone()),
            // Content blocks: [{"type": "text", "text": "..."}]
            Value::Array(blocks) => {
                let text: Vec<&str> = blocks
                    .iter()
                    .filter_map(|block| block.get("text").and_then(Value::as_str))
                    .collect();
                (!text.is_empty()).then(|| text.join("\n"))
            }
            other => Some(other.to_string()),
        }
    }
}

impl AgentResponse {
    /// Reply text: content of the last message
    #[must_use]
    pub fn reply(&self) -> Option<String> {
        self.messages.last().and_then(AgentMessage::text)
    }
}

/// Error body the auth service returns on failure
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    /// Human readable detail. Validation errors arrive as a list of
    /// `{loc, msg, type}` objects and are joined.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self.detail.as_ref()? {
            Value::String(detail) => Some(detail.clone()),
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

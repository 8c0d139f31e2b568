//! HeadlineAI HTTP client
//!
//! Typed access to the remote auth service (`/auth/*`) and the AI agent
//! (`/ai/call_agent`), plus the flows that tie those calls to the persisted
//! client session.

pub mod client;
pub mod flows;
pub mod types;

pub use client::{AuthenticatedClient, ClientBuilder, ClientError, PublicClient};
pub use flows::FlowError;

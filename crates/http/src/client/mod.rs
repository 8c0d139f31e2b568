//! HeadlineAI HTTP client

pub mod agent;
pub mod auth;
pub mod error;
pub mod typed;

pub use error::{ClientError, GENERIC_ERROR_MESSAGE, ServerMessage};
pub use typed::{AuthenticatedClient, ClientBuilder, PublicClient};

/// User agent sent when the builder is not given one
pub const DEFAULT_USER_AGENT: &str = concat!("headline-client/", env!("CARGO_PKG_VERSION"));

/// Read a response, turning non-success statuses into [`ClientError`]
pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        Err(ClientError::from_status(status, message))
    }
}

/// Like [`read_json`] for endpoints whose success body is not used
pub(crate) async fn read_empty(response: reqwest::Response) -> Result<(), ClientError> {
    let status = response.status();

    if status.is_success() {
        Ok(())
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        Err(ClientError::from_status(status, message))
    }
}

//! Type-safe API clients that enforce authentication requirements at compile time

use super::{ClientError, DEFAULT_USER_AGENT, read_empty, read_json};
use reqwest::{Client, header};
use std::time::Duration;

/// Client for public endpoints that don't require authentication
#[derive(Clone, Debug)]
pub struct PublicClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints that require a bearer access token
#[derive(Clone)]
pub struct AuthenticatedClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl std::fmt::Debug for AuthenticatedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticatedClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

fn build_http_client(
    timeout: Option<Duration>,
    user_agent: Option<String>,
) -> Result<Client, ClientError> {
    let user_agent = user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());

    #[cfg(not(target_arch = "wasm32"))]
    let client = {
        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()?
    };

    #[cfg(target_arch = "wasm32")]
    let client = {
        let _ = timeout; // Timeouts not supported on WASM
        Client::builder().user_agent(user_agent).build()?
    };

    Ok(client)
}

impl PublicClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        ClientBuilder::new().base_url(base_url).build_public()
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Send a request and decode its JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        read_json(request.send().await?).await
    }

    /// Send a request whose success body is ignored
    pub async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        read_empty(request.send().await?).await
    }

    /// Attach an access token to get an authenticated client
    #[must_use]
    pub fn authenticate(&self, access_token: impl Into<String>) -> AuthenticatedClient {
        AuthenticatedClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            access_token: access_token.into(),
        }
    }
}

impl AuthenticatedClient {
    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder with authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.access_token))
    }

    /// Send a request and decode its JSON body
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        read_json(request.send().await?).await
    }
}

/// Builder for the typed clients
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the user agent
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        // Ensure base_url ends without a trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("base_url is empty".into()));
        }

        Ok(PublicClient {
            client: build_http_client(self.timeout, self.user_agent)?,
            base_url,
        })
    }

    /// Build an authenticated client
    pub fn build_authenticated(
        self,
        access_token: impl Into<String>,
    ) -> Result<AuthenticatedClient, ClientError> {
        Ok(self.build_public()?.authenticate(access_token))
    }
}

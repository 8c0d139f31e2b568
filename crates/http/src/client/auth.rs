//! Authentication endpoints

use super::{ClientError, PublicClient};
use crate::types::{LoginForm, RefreshRequest, SignupRequest, TokenResponse};
use async_trait::async_trait;
use headline_core::{RefreshedTokens, TokenRefresher};
use reqwest::Method;

impl PublicClient {
    /// Exchange credentials for tokens (`application/x-www-form-urlencoded`)
    pub async fn login(&self, form: &LoginForm) -> Result<TokenResponse, ClientError> {
        let request = self.request(Method::POST, "/auth/login").form(form);
        self.execute(request).await
    }

    /// Create an account. The success body carries nothing the client uses.
    pub async fn signup(&self, request: &SignupRequest) -> Result<(), ClientError> {
        let request = self.request(Method::POST, "/auth/signup").json(request);
        self.execute_empty(request).await
    }

    /// Exchange a refresh token for a new access token
    pub async fn refresh_tokens(&self, request: &RefreshRequest) -> Result<TokenResponse, ClientError> {
        let request = self.request(Method::POST, "/auth/refresh").json(request);
        self.execute(request).await
    }
}

#[async_trait(?Send)]
impl TokenRefresher for PublicClient {
    type Error = ClientError;

    async fn refresh(&self, refresh_token: &str) -> Result<RefreshedTokens, ClientError> {
        let response = self
            .refresh_tokens(&RefreshRequest {
                refresh_token: refresh_token.to_string(),
            })
            .await?;

        Ok(RefreshedTokens {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
        })
    }
}

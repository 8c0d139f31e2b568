//! AI agent endpoint

use super::{AuthenticatedClient, ClientError};
use crate::types::{AgentRequest, AgentResponse};
use reqwest::Method;

impl AuthenticatedClient {
    /// Send a query to the agent and return its full transcript
    pub async fn call_agent(&self, request: &AgentRequest) -> Result<AgentResponse, ClientError> {
        let request = self.request(Method::POST, "/ai/call_agent").json(request);
        self.execute(request).await
    }

    /// Send a query and return only the reply text
    pub async fn ask(&self, query: &str) -> Result<String, ClientError> {
        let response = self
            .call_agent(&AgentRequest {
                query: query.to_string(),
            })
            .await?;
        response.reply().ok_or(ClientError::EmptyReply)
    }
}

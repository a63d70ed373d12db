//! Authorized HTTP client
//!
//! Wraps reqwest: every request carries the current access token, and a 401
//! triggers one refresh-and-retry. The retry is per-request and one-shot; a
//! second 401 is returned to the caller as-is.

use std::sync::Arc;

use reqwest::{Method, Response};
use serde_json::Value;
use tracing::debug;

use crate::coordinator::RefreshCoordinator;
use crate::error::ClientError;

/// HTTP client that keeps its bearer token fresh through the coordinator
#[derive(Clone)]
pub struct AuthorizedClient {
    http: reqwest::Client,
    coordinator: Arc<RefreshCoordinator>,
}

impl AuthorizedClient {
    /// Creates a client sharing the coordinator's token store
    pub fn new(http: reqwest::Client, coordinator: Arc<RefreshCoordinator>) -> Self {
        Self { http, coordinator }
    }

    /// The refresh coordinator backing this client
    pub fn coordinator(&self) -> &RefreshCoordinator {
        &self.coordinator
    }

    /// GET with automatic token attachment and one-shot 401 recovery
    pub async fn get(&self, url: &str) -> Result<Response, ClientError> {
        self.execute(Method::GET, url, None).await
    }

    /// POST a JSON body with automatic token attachment and one-shot 401
    /// recovery
    pub async fn post_json(&self, url: &str, body: &Value) -> Result<Response, ClientError> {
        self.execute(Method::POST, url, Some(body.clone())).await
    }

    /// DELETE with automatic token attachment and one-shot 401 recovery
    pub async fn delete(&self, url: &str) -> Result<Response, ClientError> {
        self.execute(Method::DELETE, url, None).await
    }

    async fn execute(
        &self,
        method: Method,
        url: &str,
        body: Option<Value>,
    ) -> Result<Response, ClientError> {
        let mut retried = false;

        loop {
            let access = self
                .coordinator
                .tokens()
                .access_token()
                .ok_or(ClientError::SessionExpired)?;

            let mut request = self.http.request(method.clone(), url).bearer_auth(&access);
            if let Some(body) = &body {
                request = request.json(body);
            }

            let response = request.send().await?;

            if response.status() == reqwest::StatusCode::UNAUTHORIZED && !retried {
                debug!(%url, "401 received; refreshing and retrying once");
                retried = true;
                self.coordinator.refresh_access_token().await?;
                continue;
            }

            return Ok(response);
        }
    }
}

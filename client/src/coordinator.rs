//! Single-flight refresh coordinator
//!
//! However many requests discover an expired access token at the same time,
//! exactly one refresh round-trip goes to the verification endpoint. The
//! first caller claims the cycle; everyone else parks on a oneshot channel
//! and is settled, in arrival order, with whatever the cycle produced. The
//! in-flight flag and the waiter queue live under one mutex and are cleared
//! together, so no waiter can be stranded between cycles.

use std::sync::{Arc, Mutex};

use serde::Deserialize;
use tokio::sync::oneshot;
use tracing::{debug, warn};

use crate::error::ClientError;
use crate::tokens::SessionTokens;

/// Header carrying the refresh token on verify calls
const REFRESH_TOKEN_HEADER: &str = "x-refresh-token";

/// Action codes the verify endpoint can return
const ACTION_ALLOW: &str = "ALLOW_ACCESS";
const ACTION_UPDATE: &str = "UPDATE_ACCESS_TOKEN";

/// Verify endpoint response, reduced to what the coordinator needs
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VerifyReply {
    action: String,
    access_token: Option<String>,
}

struct RefreshState {
    /// A refresh cycle is currently in flight
    refreshing: bool,
    /// Callers parked on the in-flight cycle, in arrival order
    waiters: Vec<oneshot::Sender<Result<String, ClientError>>>,
}

/// Coordinates access-token refresh across concurrent requests
pub struct RefreshCoordinator {
    http: reqwest::Client,
    verify_url: String,
    tokens: SessionTokens,
    state: Mutex<RefreshState>,
    on_login_redirect: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl RefreshCoordinator {
    /// Creates a coordinator targeting the given verify endpoint URL
    pub fn new(http: reqwest::Client, verify_url: impl Into<String>, tokens: SessionTokens) -> Self {
        Self {
            http,
            verify_url: verify_url.into(),
            tokens,
            state: Mutex::new(RefreshState {
                refreshing: false,
                waiters: Vec::new(),
            }),
            on_login_redirect: None,
        }
    }

    /// Installs a hook fired once per failed cycle, for routing the user
    /// back to the login screen
    pub fn with_login_redirect(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_login_redirect = Some(Arc::new(hook));
        self
    }

    /// The shared token store
    pub fn tokens(&self) -> &SessionTokens {
        &self.tokens
    }

    /// Obtains a usable access token, refreshing if necessary
    ///
    /// Joins the in-flight cycle when one exists; otherwise runs the cycle
    /// itself. Every caller gets the same result: the rotated token on
    /// success, the cycle's error otherwise.
    pub async fn refresh_access_token(&self) -> Result<String, ClientError> {
        let rx = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            if state.refreshing {
                let (tx, rx) = oneshot::channel();
                state.waiters.push(tx);
                Some(rx)
            } else {
                state.refreshing = true;
                None
            }
        };

        if let Some(rx) = rx {
            debug!("joining in-flight refresh cycle");
            return rx.await.map_err(|_| ClientError::Refresh {
                message: "refresh cycle dropped without settling".to_string(),
            })?;
        }

        let result = self.run_cycle().await;

        // Settle the cycle: flag and queue are cleared in the same critical
        // section, so callers arriving now start a new cycle instead of
        // parking on a finished one
        let waiters = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.refreshing = false;
            std::mem::take(&mut state.waiters)
        };

        debug!(waiters = waiters.len(), ok = result.is_ok(), "refresh cycle settled");
        for waiter in waiters {
            let _ = waiter.send(result.clone());
        }

        if result.is_err() {
            self.tokens.clear();
            if let Some(hook) = &self.on_login_redirect {
                hook();
            }
        }

        result
    }

    /// One verify round-trip: POST the current pair, act on the response
    async fn run_cycle(&self) -> Result<String, ClientError> {
        let access = self.tokens.access_token().ok_or(ClientError::SessionExpired)?;
        let refresh = self
            .tokens
            .refresh_token()
            .ok_or(ClientError::SessionExpired)?;

        let response = self
            .http
            .post(&self.verify_url)
            .bearer_auth(&access)
            .header(REFRESH_TOKEN_HEADER, &refresh)
            .send()
            .await?;

        let status = response.status();
        let reply: VerifyReply = response.json().await.map_err(|e| ClientError::Refresh {
            message: format!("unparseable verify response: {}", e),
        })?;

        match reply.action.as_str() {
            ACTION_UPDATE => {
                let token = reply.access_token.ok_or_else(|| ClientError::Refresh {
                    message: "rotation response carried no token".to_string(),
                })?;
                self.tokens.update_access(&token);
                debug!("access token rotated");
                Ok(token)
            }
            // The server considered the current token still valid; another
            // cycle may have rotated it just before ours landed
            ACTION_ALLOW => Ok(access),
            _ => {
                warn!(%status, action = %reply.action, "session not recoverable");
                Err(ClientError::SessionExpired)
            }
        }
    }
}

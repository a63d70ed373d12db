//! Shared session token store
//!
//! Holds the access/refresh pair behind a lock so the coordinator and any
//! number of in-flight requests see a consistent view. Only the refresh
//! coordinator replaces the access token after a rotation; the refresh token
//! changes only on login.

use std::sync::{Arc, RwLock};

#[derive(Debug, Clone)]
struct TokenSet {
    access_token: String,
    refresh_token: String,
}

/// Thread-safe store for the current session's token pair
#[derive(Clone, Default)]
pub struct SessionTokens {
    inner: Arc<RwLock<Option<TokenSet>>>,
}

impl SessionTokens {
    /// Creates an empty store (no active session)
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a fresh token pair (login / re-authentication)
    pub fn set(&self, access_token: impl Into<String>, refresh_token: impl Into<String>) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *inner = Some(TokenSet {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        });
    }

    /// Replaces only the access token (silent rotation)
    pub fn update_access(&self, access_token: impl Into<String>) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if let Some(tokens) = inner.as_mut() {
            tokens.access_token = access_token.into();
        }
    }

    /// Current access token, if a session is active
    pub fn access_token(&self) -> Option<String> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.as_ref().map(|t| t.access_token.clone())
    }

    /// Current refresh token, if a session is active
    pub fn refresh_token(&self) -> Option<String> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.as_ref().map(|t| t.refresh_token.clone())
    }

    /// Discards the session (logout / terminal refresh failure)
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *inner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_read() {
        let tokens = SessionTokens::new();
        assert!(tokens.access_token().is_none());

        tokens.set("access-1", "refresh-1");
        assert_eq!(tokens.access_token().as_deref(), Some("access-1"));
        assert_eq!(tokens.refresh_token().as_deref(), Some("refresh-1"));
    }

    #[test]
    fn test_update_access_keeps_refresh() {
        let tokens = SessionTokens::new();
        tokens.set("access-1", "refresh-1");
        tokens.update_access("access-2");

        assert_eq!(tokens.access_token().as_deref(), Some("access-2"));
        assert_eq!(tokens.refresh_token().as_deref(), Some("refresh-1"));
    }

    #[test]
    fn test_update_access_without_session_is_noop() {
        let tokens = SessionTokens::new();
        tokens.update_access("access-2");
        assert!(tokens.access_token().is_none());
    }

    #[test]
    fn test_clear() {
        let tokens = SessionTokens::new();
        tokens.set("access-1", "refresh-1");
        tokens.clear();
        assert!(tokens.access_token().is_none());
        assert!(tokens.refresh_token().is_none());
    }
}

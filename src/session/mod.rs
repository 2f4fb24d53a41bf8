//! Credential storage for authenticated requests
//!
//! The backend authenticates requests with an opaque bearer token returned by
//! `POST /api/auth/login`. The token lives in a [`TokenStore`] that is
//! constructed explicitly and injected into the HTTP client, so every request
//! reads the same slot the auth service writes. There is no ambient storage:
//! dropping the store drops the credential.

use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared slot holding the current bearer token, if any
///
/// Cloning a `TokenStore` shares the underlying slot, so a client and the
/// auth service that feeds it always observe the same credential. The slot is
/// read at request time; requests issued while it is empty carry no
/// Authorization header at all.
#[derive(Clone, Default)]
pub struct TokenStore {
    inner: Arc<RwLock<Option<String>>>,
}

impl TokenStore {
    /// Creates an empty store; requests will be unauthenticated until a
    /// token is set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with a token
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Some(token.into()))),
        }
    }

    /// Stores a new token, replacing any previous one
    pub async fn set(&self, token: impl Into<String>) {
        let mut slot = self.inner.write().await;
        *slot = Some(token.into());
    }

    /// Clears the stored token; subsequent requests are unauthenticated
    pub async fn clear(&self) {
        let mut slot = self.inner.write().await;
        *slot = None;
    }

    /// Returns a copy of the current token, if one is stored
    pub async fn get(&self) -> Option<String> {
        self.inner.read().await.clone()
    }

    /// True when a token is currently stored
    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.is_some()
    }
}

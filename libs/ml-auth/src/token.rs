//! Opaque bearer token storage.
//!
//! Tokens are random handles mapped to a principal; nothing is encoded in
//! the token itself. The store is a capability so deployments can swap in a
//! shared backend without touching the auth flow.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

/// Issues and resolves opaque bearer tokens.
#[async_trait]
pub trait TokenStore: Send + Sync {
    /// Mint a fresh token for `principal` and remember the mapping.
    async fn issue(&self, principal: &str) -> String;

    /// Resolve a presented token back to its principal, if known.
    async fn resolve(&self, token: &str) -> Option<String>;

    /// Forget a token. Returns whether it was known.
    async fn revoke(&self, token: &str) -> bool;
}

/// Process-local token store.
#[derive(Default)]
pub struct MemoryTokenStore {
    tokens: DashMap<String, String>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenStore for MemoryTokenStore {
    async fn issue(&self, principal: &str) -> String {
        let token = Uuid::new_v4().simple().to_string();
        self.tokens.insert(token.clone(), principal.to_owned());
        token
    }

    async fn resolve(&self, token: &str) -> Option<String> {
        self.tokens.get(token).map(|entry| entry.value().clone())
    }

    async fn revoke(&self, token: &str) -> bool {
        self.tokens.remove(token).is_some()
    }
}

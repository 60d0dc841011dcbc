//! Persisted access/refresh token pair

use crate::config::AuthConfig;
use crate::types::TokenResponse;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

/// Writing to the backing store failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Failed to persist {key}: {reason}")]
pub struct StoreError {
    pub key: String,
    pub reason: String,
}

/// String key-value storage the tokens live in
pub trait TokenStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str);
}

/// In-memory store; clones share their entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TokenStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.entries().remove(key);
    }
}

/// Access token plus the refresh token that can replace it
#[derive(Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

impl From<TokenResponse> for TokenPair {
    fn from(response: TokenResponse) -> Self {
        Self {
            access_token: response.access_token,
            refresh_token: response.refresh_token,
        }
    }
}

/// Keeps the two tokens in a [`TokenStore`], both present or both absent
#[derive(Debug, Clone)]
pub struct TokenVault<S> {
    store: S,
}

impl<S: TokenStore> TokenVault<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Read the stored pair. A lone token is discarded.
    pub fn load(&self) -> Option<TokenPair> {
        match (self.access_token(), self.refresh_token()) {
            (Some(access_token), Some(refresh_token)) => Some(TokenPair {
                access_token,
                refresh_token,
            }),
            (None, None) => None,
            _ => {
                warn!("Discarding incomplete token pair from storage");
                self.clear();
                None
            }
        }
    }

    /// Persist both tokens; on failure neither is left behind
    pub fn save(&self, pair: &TokenPair) -> Result<(), StoreError> {
        let result = self
            .store
            .set(AuthConfig::ACCESS_TOKEN_KEY, &pair.access_token)
            .and_then(|()| {
                self.store
                    .set(AuthConfig::REFRESH_TOKEN_KEY, &pair.refresh_token)
            });
        if result.is_err() {
            self.clear();
        }
        result
    }

    pub fn clear(&self) {
        self.store.remove(AuthConfig::ACCESS_TOKEN_KEY);
        self.store.remove(AuthConfig::REFRESH_TOKEN_KEY);
    }

    pub fn access_token(&self) -> Option<String> {
        self.store
            .get(AuthConfig::ACCESS_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store
            .get(AuthConfig::REFRESH_TOKEN_KEY)
            .filter(|token| !token.is_empty())
    }
}

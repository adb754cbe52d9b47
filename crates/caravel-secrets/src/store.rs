use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use async_trait::async_trait;
use tracing::debug;

use crate::SecretError;

/// Named parameter storage, used to hold bearer credentials for external
/// APIs. Leaf component: no internal state machine.
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch a named parameter, decrypting it when `decrypt` is set.
    async fn get(&self, name: &str, decrypt: bool) -> Result<String, SecretError>;

    /// Store a parameter as an encrypted value, overwriting any existing one.
    async fn put(&self, name: &str, value: &str) -> Result<(), SecretError>;
}

#[async_trait]
impl<S: SecretStore + ?Sized> SecretStore for Arc<S> {
    async fn get(&self, name: &str, decrypt: bool) -> Result<String, SecretError> {
        (**self).get(name, decrypt).await
    }

    async fn put(&self, name: &str, value: &str) -> Result<(), SecretError> {
        (**self).put(name, value).await
    }
}

/// In-memory store for tests and local runs.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SecretStore for MemoryStore {
    async fn get(&self, name: &str, _decrypt: bool) -> Result<String, SecretError> {
        let inner = self.inner.read().unwrap();
        inner
            .get(name)
            .cloned()
            .ok_or_else(|| SecretError::NotFound(name.to_string()))
    }

    async fn put(&self, name: &str, value: &str) -> Result<(), SecretError> {
        debug!(%name, "storing parameter");
        let mut inner = self.inner.write().unwrap();
        inner.insert(name.to_string(), value.to_string());
        Ok(())
    }
}

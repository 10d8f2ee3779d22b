//! # Storage Module
//!
//! Durable storage of session blobs is an external collaborator, specified
//! only at this boundary. Keys are derived from the chat platform's message
//! identifier; values are opaque bytes (the manager stores JSON).
//!
//! The engine assumes per-key atomicity for a single read or write and
//! performs no cross-key transactions.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Key-value store for persisted session state.
///
/// `get_state` returning `Ok(None)` is the canonical "no prior session"
/// signal; errors are reserved for I/O failures.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn save_state(&self, key: &str, data: Vec<u8>) -> Result<()>;
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>>;
    async fn delete_state(&self, key: &str) -> Result<()>;
}

/// In-process storage backed by a `HashMap`, for tests and single-process
/// bots that do not need sessions to survive a restart.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn save_state(&self, key: &str, data: Vec<u8>) -> Result<()> {
        self.entries.lock().await.insert(key.to_string(), data);
        Ok(())
    }

    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn delete_state(&self, key: &str) -> Result<()> {
        self.entries.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        storage.save_state("k", b"v".to_vec()).await.unwrap();
        assert_eq!(storage.get_state("k").await.unwrap(), Some(b"v".to_vec()));

        storage.delete_state("k").await.unwrap();
        assert_eq!(storage.get_state("k").await.unwrap(), None);
        assert!(storage.is_empty().await);
    }

    #[tokio::test]
    async fn test_missing_key_is_none_not_error() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_state("absent").await.unwrap(), None);
        storage.delete_state("absent").await.unwrap();
    }
}

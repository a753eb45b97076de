//! In-memory key-value store
//!
//! Test double and ephemeral backend. No durability.

use crate::error::KoshResult;
use crate::store::KeyValueStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// Volatile store backed by a `HashMap`
#[derive(Default)]
pub struct MemoryStore {
    map: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> KoshResult<Option<String>> {
        Ok(self.map.read().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> KoshResult<()> {
        self.map
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> KoshResult<()> {
        self.map.write().unwrap().remove(key);
        Ok(())
    }

    async fn clear(&self) -> KoshResult<()> {
        self.map.write().unwrap().clear();
        Ok(())
    }

    async fn keys(&self) -> KoshResult<Vec<String>> {
        Ok(self.map.read().unwrap().keys().cloned().collect())
    }

    async fn contains(&self, key: &str) -> KoshResult<bool> {
        Ok(self.map.read().unwrap().contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn overwrite_wins() {
        let store = MemoryStore::new();
        store.set("k", "v1").await.unwrap();
        store.set("k", "v2").await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("v2"));
    }

    #[tokio::test]
    async fn contains_and_clear() {
        let store = MemoryStore::new();
        store.set("k", "v").await.unwrap();
        assert!(store.contains("k").await.unwrap());

        store.clear().await.unwrap();
        assert!(!store.contains("k").await.unwrap());
        assert!(store.get("k").await.unwrap().is_none());
    }
}

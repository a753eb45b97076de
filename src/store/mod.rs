//! Key-value store backends
//!
//! [`KeyValueStore`] is the contract the storage layer is built on: a
//! string-keyed, string-valued, asynchronous store where each single-key
//! operation is atomic. Nothing above this layer assumes anything about
//! how values are laid out on disk.
//!
//! Two implementations ship with the crate: [`FileStore`] (one file per
//! key under the vault directory) and [`MemoryStore`] (a `HashMap`
//! behind a lock, used by tests and short-lived tooling).

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::KoshResult;
use async_trait::async_trait;

/// Contract for the underlying string-keyed store.
///
/// Multi-key operations carry no atomicity guarantee across keys beyond
/// what the backend provides natively; callers needing ordering must
/// sequence their awaits.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value at `key`, `None` if absent.
    async fn get(&self, key: &str) -> KoshResult<Option<String>>;

    /// Write `value` under `key`, overwriting any prior value.
    async fn set(&self, key: &str, value: &str) -> KoshResult<()>;

    /// Delete the value at `key`; no-op if absent.
    async fn remove(&self, key: &str) -> KoshResult<()>;

    /// Delete every key in the store.
    async fn clear(&self) -> KoshResult<()>;

    /// List all keys currently present.
    async fn keys(&self) -> KoshResult<Vec<String>>;

    /// Whether a value exists at `key`.
    async fn contains(&self, key: &str) -> KoshResult<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// Batched read; backends may override to issue requests concurrently.
    async fn get_many(&self, keys: &[String]) -> KoshResult<Vec<(String, Option<String>)>> {
        let mut out = Vec::with_capacity(keys.len());
        for key in keys {
            out.push((key.clone(), self.get(key).await?));
        }
        Ok(out)
    }

    /// Batched write; backends may override to issue requests concurrently.
    async fn set_many(&self, entries: &[(String, String)]) -> KoshResult<()> {
        for (key, value) in entries {
            self.set(key, value).await?;
        }
        Ok(())
    }
}

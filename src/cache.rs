//! Expiring cache over the vault
//!
//! Adds time-bounded validity on top of [`Storage`], namespaced under
//! the `@cache:` prefix. Expiry is checked lazily on access; there is
//! no background sweep, so entries that expire and are never read again
//! stay on disk until `clear()`. Acceptable for a session-scoped cache,
//! not an eviction engine.

use crate::error::KoshResult;
use crate::storage::{keys, Envelope, Storage};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// Named validity tiers, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheDuration {
    /// 5 minutes
    Short,
    /// 30 minutes
    #[default]
    Medium,
    /// 24 hours
    Long,
}

impl CacheDuration {
    /// Validity window in milliseconds
    pub const fn millis(self) -> i64 {
        match self {
            Self::Short => 5 * 60 * 1000,
            Self::Medium => 30 * 60 * 1000,
            Self::Long => 24 * 60 * 60 * 1000,
        }
    }

    /// Parse a tier name as written in config files
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "short" => Some(Self::Short),
            "medium" => Some(Self::Medium),
            "long" => Some(Self::Long),
            _ => None,
        }
    }

    /// Tier name as written in config files
    pub fn name(self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

/// Cache handle; cheap to clone
#[derive(Clone)]
pub struct Cache {
    storage: Storage,
}

impl Cache {
    /// Build a cache over the given storage handle
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Store `data` under the namespaced key with the tier's validity
    /// window. Fails loud, like any vault write.
    pub async fn set<T: Serialize>(
        &self,
        key: &str,
        data: &T,
        tier: CacheDuration,
    ) -> KoshResult<()> {
        let envelope = Envelope::with_expiry(data, tier.millis());
        self.storage
            .save_envelope(&keys::cache_key(key), &envelope)
            .await
    }

    /// Read `key`, evicting it if the validity window has passed.
    ///
    /// Returns `None` for absent and expired entries; an expired entry
    /// is deleted before returning (lazy eviction).
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let namespaced = keys::cache_key(key);
        let envelope: Envelope<T> = self.storage.get_envelope(&namespaced).await?;

        if envelope.is_expired() {
            debug!("Cache entry {} expired, evicting", key);
            if let Err(e) = self.storage.remove(&namespaced).await {
                warn!("Failed to evict expired cache entry {}: {}", key, e);
            }
            return None;
        }

        Some(envelope.data)
    }

    /// Delete the entry at `key`; no-op if absent
    pub async fn remove(&self, key: &str) -> KoshResult<()> {
        self.storage.remove(&keys::cache_key(key)).await
    }

    /// Delete every entry under the cache namespace, leaving all other
    /// vault keys untouched. Returns the number of entries removed.
    pub async fn clear(&self) -> KoshResult<usize> {
        let prefix = keys::cache_prefix();
        let mut removed = 0;
        for key in self.storage.keys().await? {
            if key.starts_with(&prefix) {
                self.storage.remove(&key).await?;
                removed += 1;
            }
        }
        debug!("Cleared {} cache entries", removed);
        Ok(removed)
    }

    /// Read-only expiry probe: same check as `get`, no eviction.
    /// A missing entry counts as expired.
    pub async fn is_expired(&self, key: &str) -> bool {
        match self
            .storage
            .get_envelope::<serde_json::Value>(&keys::cache_key(key))
            .await
        {
            Some(envelope) => envelope.is_expired(),
            None => true,
        }
    }

    /// Keys currently present under the cache namespace, with the
    /// prefix stripped
    pub async fn entries(&self) -> KoshResult<Vec<String>> {
        let prefix = keys::cache_prefix();
        Ok(self
            .storage
            .keys()
            .await?
            .into_iter()
            .filter_map(|k| k.strip_prefix(&prefix).map(str::to_string))
            .collect())
    }
}

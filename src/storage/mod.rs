//! Envelope-typed persistence over a [`KeyValueStore`]
//!
//! Every value written through [`Storage`] is wrapped in an
//! [`Envelope`]: `{"data": <value>, "timestamp": <epoch millis>}`, with
//! an `"expiry"` field added for cache entries. Raw values are never
//! written directly. The wrapper shape is a compatibility surface:
//! vaults written by earlier builds must keep parsing.
//!
//! # Error policy
//!
//! Writes fail loud: `save`, `remove`, `clear` and the batch writers
//! log and return errors so callers can surface them. Reads fail soft:
//! `get`, `has` and the batch reader normalize missing keys, malformed
//! content and backend failures to an empty result, logging the cause.
//! A read must never take down a caller that can render "no data"; a
//! write that silently vanishes is corruption. Callers wanting retries
//! implement them above this layer.

pub mod keys;

use crate::error::KoshResult;
use crate::store::KeyValueStore;
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{error, warn};

/// Wrapper persisted for every stored value.
///
/// `expiry` is `None` for plain records and `Some(duration-millis)` for
/// cache entries; the field is omitted from the JSON when absent so
/// plain envelopes stay exactly `{"data", "timestamp"}` on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    /// Write time, milliseconds since the Unix epoch
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<i64>,
}

impl<T> Envelope<T> {
    /// Wrap `data` with the current write timestamp
    pub fn new(data: T) -> Self {
        Self {
            data,
            timestamp: Utc::now().timestamp_millis(),
            expiry: None,
        }
    }

    /// Wrap `data` with a validity window of `expiry_millis`
    pub fn with_expiry(data: T, expiry_millis: i64) -> Self {
        Self {
            expiry: Some(expiry_millis),
            ..Self::new(data)
        }
    }

    /// Milliseconds elapsed since this envelope was written
    pub fn age_millis(&self) -> i64 {
        Utc::now().timestamp_millis() - self.timestamp
    }

    /// Whether the validity window has passed. Envelopes without an
    /// `expiry` never expire.
    pub fn is_expired(&self) -> bool {
        match self.expiry {
            Some(expiry) => self.age_millis() > expiry,
            None => false,
        }
    }
}

/// Cloneable handle to the vault's envelope-typed persistence API
#[derive(Clone)]
pub struct Storage {
    store: Arc<dyn KeyValueStore>,
}

impl Storage {
    /// Wrap a store backend
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Serialize `value` into a fresh envelope and write it under `key`.
    ///
    /// Overwrites any prior value. Fails loud.
    pub async fn save<T: Serialize>(&self, key: &str, value: &T) -> KoshResult<()> {
        self.save_envelope(key, &Envelope::new(value)).await
    }

    /// Write a caller-built envelope under `key`. Fails loud.
    pub async fn save_envelope<T: Serialize>(
        &self,
        key: &str,
        envelope: &Envelope<T>,
    ) -> KoshResult<()> {
        let raw = serde_json::to_string(envelope)?;
        if let Err(e) = self.store.set(key, &raw).await {
            error!("Failed to save {}: {}", key, e);
            return Err(e);
        }
        Ok(())
    }

    /// Read and unwrap the value at `key`, discarding the envelope.
    ///
    /// Fails soft: absent key, malformed content and backend errors all
    /// yield `None`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get_envelope(key).await.map(|env: Envelope<T>| env.data)
    }

    /// Read the full envelope at `key`. Fails soft.
    pub async fn get_envelope<T: DeserializeOwned>(&self, key: &str) -> Option<Envelope<T>> {
        let raw = match self.store.get(key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Read of {} failed: {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(envelope) => Some(envelope),
            Err(e) => {
                warn!("Stored value at {} is malformed: {}", key, e);
                None
            }
        }
    }

    /// Delete the value at `key`; no-op if absent. Fails loud.
    pub async fn remove(&self, key: &str) -> KoshResult<()> {
        if let Err(e) = self.store.remove(key).await {
            error!("Failed to remove {}: {}", key, e);
            return Err(e);
        }
        Ok(())
    }

    /// Delete every key in the vault. Irreversible; full logout/reset.
    pub async fn clear(&self) -> KoshResult<()> {
        if let Err(e) = self.store.clear().await {
            error!("Failed to clear vault: {}", e);
            return Err(e);
        }
        Ok(())
    }

    /// Whether a value exists at `key`, without deserializing it.
    /// Fails soft (`false`).
    pub async fn has(&self, key: &str) -> bool {
        match self.store.contains(key).await {
            Ok(present) => present,
            Err(e) => {
                warn!("Existence check for {} failed: {}", key, e);
                false
            }
        }
    }

    /// Batched read. Keys that are absent or hold malformed content are
    /// silently omitted from the result. Fails soft (empty map on
    /// backend failure).
    pub async fn get_multiple<T: DeserializeOwned>(&self, keys: &[&str]) -> HashMap<String, T> {
        let keys: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        let pairs = match self.store.get_many(&keys).await {
            Ok(pairs) => pairs,
            Err(e) => {
                warn!("Batched read failed: {}", e);
                return HashMap::new();
            }
        };

        let mut out = HashMap::new();
        for (key, raw) in pairs {
            let Some(raw) = raw else { continue };
            match serde_json::from_str::<Envelope<T>>(&raw) {
                Ok(envelope) => {
                    out.insert(key, envelope.data);
                }
                Err(e) => warn!("Stored value at {} is malformed: {}", key, e),
            }
        }
        out
    }

    /// Batched write; each value is wrapped in its own timestamped
    /// envelope. Fails loud. Atomicity across keys is whatever the
    /// backend provides.
    pub async fn save_multiple<T: Serialize>(&self, entries: &[(&str, T)]) -> KoshResult<()> {
        let mut wrapped = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            wrapped.push((key.to_string(), serde_json::to_string(&Envelope::new(value))?));
        }
        if let Err(e) = self.store.set_many(&wrapped).await {
            error!("Batched save failed: {}", e);
            return Err(e);
        }
        Ok(())
    }

    /// List every key currently in the vault
    pub async fn keys(&self) -> KoshResult<Vec<String>> {
        self.store.keys().await
    }

    /// Raw write bypassing the envelope; test hook for corrupt-content
    /// scenarios.
    #[cfg(test)]
    pub async fn set_raw(&self, key: &str, raw: &str) -> KoshResult<()> {
        self.store.set(key, raw).await
    }
}

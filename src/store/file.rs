//! File-backed key-value store
//!
//! One file per key under the vault directory. Keys are percent-encoded
//! into filenames so that reserved characters (`@`, `:`) survive the
//! round trip and `keys()` can recover the original key from the
//! filename alone.

use crate::error::{KoshError, KoshResult};
use crate::store::KeyValueStore;
use async_trait::async_trait;
use futures_util::future::try_join_all;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

/// Durable store writing each key to `<vault>/<encoded-key>.json`
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub async fn open(dir: impl Into<PathBuf>) -> KoshResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| KoshError::io(format!("creating vault directory {}", dir.display()), e))?;
        debug!("Opened vault at {}", dir.display());
        Ok(Self { dir })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", encode_key(key)))
    }
}

/// Encode a key into a filename-safe form. Alphanumerics, `-`, `_` and
/// `.` pass through; everything else becomes `%XX`.
fn encode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for byte in key.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Invert [`encode_key`]. Returns `None` for filenames this store did
/// not produce.
fn decode_key(encoded: &str) -> Option<String> {
    let mut out = Vec::with_capacity(encoded.len());
    let bytes = encoded.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = encoded.get(i + 1..i + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).ok()
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> KoshResult<Option<String>> {
        let path = self.entry_path(key);
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KoshError::io(format!("reading {}", path.display()), e)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> KoshResult<()> {
        let path = self.entry_path(key);
        fs::write(&path, value)
            .await
            .map_err(|e| KoshError::io(format!("writing {}", path.display()), e))
    }

    async fn remove(&self, key: &str) -> KoshResult<()> {
        let path = self.entry_path(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(KoshError::io(format!("removing {}", path.display()), e)),
        }
    }

    async fn clear(&self) -> KoshResult<()> {
        for key in self.keys().await? {
            self.remove(&key).await?;
        }
        Ok(())
    }

    async fn contains(&self, key: &str) -> KoshResult<bool> {
        Ok(self.entry_path(key).exists())
    }

    async fn keys(&self) -> KoshResult<Vec<String>> {
        let mut entries = fs::read_dir(&self.dir)
            .await
            .map_err(|e| KoshError::io("reading vault directory", e))?;

        let mut keys = vec![];
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| KoshError::io("reading vault entry", e))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    if let Some(key) = decode_key(stem) {
                        keys.push(key);
                    }
                }
            }
        }
        Ok(keys)
    }

    async fn get_many(&self, keys: &[String]) -> KoshResult<Vec<(String, Option<String>)>> {
        try_join_all(keys.iter().map(|key| async move {
            let value = self.get(key).await?;
            Ok::<_, KoshError>((key.clone(), value))
        }))
        .await
    }

    async fn set_many(&self, entries: &[(String, String)]) -> KoshResult<()> {
        try_join_all(
            entries
                .iter()
                .map(|(key, value)| async move { self.set(key, value).await }),
        )
        .await?;
        Ok(())
    }
}

//! KYC document capture
//!
//! Stores references to the three required document images (PAN, ID
//! front, ID back) and the verification record written once all three
//! are submitted. Image bytes stay where the user keeps them; the vault
//! holds the path plus a SHA-256 of the bytes at attach time so later
//! tampering is detectable.

use crate::error::{KoshError, KoshResult};
use crate::model::{DocumentImage, DocumentKind, VerificationRecord};
use crate::storage::{keys, Storage};
use chrono::Utc;
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Document capture state backed by the vault
pub struct DocumentVault {
    storage: Storage,
}

impl DocumentVault {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    /// Attach an image file as `kind`, replacing any earlier capture
    pub async fn attach(&self, kind: DocumentKind, path: &Path) -> KoshResult<DocumentImage> {
        let bytes = fs::read(path)
            .await
            .map_err(|e| KoshError::io(format!("reading document image {}", path.display()), e))?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);

        let image = DocumentImage {
            uri: path.display().to_string(),
            sha256: hex::encode(hasher.finalize()),
            attached_at: Utc::now(),
        };

        self.storage.save(kind.storage_key(), &image).await?;
        info!("Attached {} ({} bytes)", kind.label(), bytes.len());
        Ok(image)
    }

    /// The stored capture for `kind`, if any
    pub async fn get(&self, kind: DocumentKind) -> Option<DocumentImage> {
        self.storage.get(kind.storage_key()).await
    }

    /// Capture state for all three documents in one batched read
    pub async fn status(&self) -> Vec<(DocumentKind, Option<DocumentImage>)> {
        let doc_keys: Vec<&str> = DocumentKind::ALL.iter().map(|k| k.storage_key()).collect();
        let mut found = self.storage.get_multiple::<DocumentImage>(&doc_keys).await;

        DocumentKind::ALL
            .iter()
            .map(|&kind| (kind, found.remove(kind.storage_key())))
            .collect()
    }

    /// Require all three captures and write the verification record
    pub async fn submit(&self) -> KoshResult<VerificationRecord> {
        for (kind, image) in self.status().await {
            if image.is_none() {
                return Err(KoshError::DocumentMissing(kind.label().to_string()));
            }
        }

        let record = VerificationRecord::completed_now();
        self.storage.save(keys::DOCUMENTS_VERIFIED, &record).await?;
        info!("Documents submitted for verification");
        Ok(record)
    }

    /// The verification record, once submitted
    pub async fn record(&self) -> Option<VerificationRecord> {
        self.storage.get(keys::DOCUMENTS_VERIFIED).await
    }
}

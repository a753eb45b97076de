//! Current-user session state
//!
//! One `SessionManager` is constructed inside [`crate::app::App`] at
//! startup and shared by reference; there is no ambient global state.
//! Every mutation persists first and updates the in-memory copy only
//! after the write succeeds, so memory never runs ahead of disk.
//!
//! The holder's lock serializes access to its own fields only. Writes
//! to the same vault key from concurrent processes are last-write-wins;
//! the storage layer offers no cross-process coordination.

use crate::error::{KoshError, KoshResult};
use crate::model::{UserProfile, VerificationRecord};
use crate::storage::{keys, Storage};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

/// Verification progress across the onboarding flow
#[derive(Debug, Clone, Default)]
pub struct VerificationState {
    pub mobile_verified: bool,
    pub email_verified: bool,
    pub documents: Option<VerificationRecord>,
}

/// Session state holder backed by the vault
pub struct SessionManager {
    storage: Storage,
    user: RwLock<Option<UserProfile>>,
    token: RwLock<Option<String>>,
}

impl SessionManager {
    /// Hydrate from the vault. A missing user record means "no
    /// session", never an error.
    pub async fn load(storage: Storage) -> Self {
        let user: Option<UserProfile> = storage.get(keys::USER_DATA).await;
        let token: Option<String> = storage.get(keys::AUTH_TOKEN).await;
        if user.is_some() {
            debug!("Hydrated session for registered user");
        }
        Self {
            storage,
            user: RwLock::new(user),
            token: RwLock::new(token),
        }
    }

    pub async fn current_user(&self) -> Option<UserProfile> {
        self.user.read().await.clone()
    }

    pub async fn is_registered(&self) -> bool {
        self.user.read().await.is_some()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.token.read().await.is_some()
    }

    /// Create the account: persist the profile and the password digest.
    /// Refuses when an account already exists in this vault.
    pub async fn register(&self, profile: UserProfile, password: &str) -> KoshResult<()> {
        if self.is_registered().await {
            return Err(KoshError::AlreadyRegistered);
        }

        self.storage.save(keys::USER_DATA, &profile).await?;
        self.storage
            .save(keys::PASSWORD_HASH, &hash_password(password))
            .await?;

        *self.user.write().await = Some(profile);
        info!("Registered new account");
        Ok(())
    }

    /// Replace the profile with the wizard's completed record and
    /// rotate the password digest.
    pub async fn complete_details(&self, profile: UserProfile, password: &str) -> KoshResult<()> {
        self.storage.save(keys::USER_DATA, &profile).await?;
        self.storage
            .save(keys::PASSWORD_HASH, &hash_password(password))
            .await?;

        *self.user.write().await = Some(profile);
        info!("Stored completed onboarding details");
        Ok(())
    }

    /// Verify credentials and issue a sign-in token
    pub async fn sign_in(&self, email: &str, password: &str) -> KoshResult<String> {
        let user = self.current_user().await.ok_or(KoshError::NotRegistered)?;

        let stored: Option<String> = self.storage.get(keys::PASSWORD_HASH).await;
        let matches = user.email == email && stored.as_deref() == Some(&hash_password(password));
        if !matches {
            return Err(KoshError::BadCredentials);
        }

        let token = Uuid::new_v4().to_string();
        self.storage.save(keys::AUTH_TOKEN, &token).await?;
        *self.token.write().await = Some(token.clone());
        info!("Signed in");
        Ok(token)
    }

    /// Forget the account: remove the token, the user record and the
    /// password digest. Verification flags and cached data stay; use
    /// `Storage::clear` for a full reset.
    pub async fn sign_out(&self) -> KoshResult<()> {
        self.storage.remove(keys::AUTH_TOKEN).await?;
        self.storage.remove(keys::USER_DATA).await?;
        self.storage.remove(keys::PASSWORD_HASH).await?;

        *self.token.write().await = None;
        *self.user.write().await = None;
        info!("Signed out");
        Ok(())
    }

    /// Record a successful mobile OTP check
    pub async fn mark_mobile_verified(&self) -> KoshResult<()> {
        self.require_registered().await?;
        self.storage.save(keys::MOBILE_VERIFIED, &true).await
    }

    /// Record a successful email OTP check
    pub async fn mark_email_verified(&self) -> KoshResult<()> {
        self.require_registered().await?;
        self.storage.save(keys::EMAIL_VERIFIED, &true).await
    }

    /// Verification progress, read from the vault (flags default to
    /// unset on any read failure)
    pub async fn verification(&self) -> VerificationState {
        VerificationState {
            mobile_verified: self.storage.get(keys::MOBILE_VERIFIED).await.unwrap_or(false),
            email_verified: self.storage.get(keys::EMAIL_VERIFIED).await.unwrap_or(false),
            documents: self.storage.get(keys::DOCUMENTS_VERIFIED).await,
        }
    }

    async fn require_registered(&self) -> KoshResult<()> {
        if self.is_registered().await {
            Ok(())
        } else {
            Err(KoshError::NotRegistered)
        }
    }
}

/// SHA-256 hex digest of a password
fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

//! Application context
//!
//! One `App` is built in `main` after configuration is loaded and
//! passed by reference to every command. All state holders hang off it;
//! nothing in the crate reaches for globals.

use crate::cache::{Cache, CacheDuration};
use crate::config::{Config, ConfigManager};
use crate::documents::DocumentVault;
use crate::error::KoshResult;
use crate::session::SessionManager;
use crate::settings::SettingsManager;
use crate::storage::Storage;
use crate::store::FileStore;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Everything a command needs, constructed once at startup
pub struct App {
    pub storage: Storage,
    pub cache: Cache,
    pub session: SessionManager,
    pub settings: SettingsManager,
    pub documents: DocumentVault,
    vault_dir: PathBuf,
    default_tier: CacheDuration,
}

impl App {
    /// Open the vault and hydrate all state holders
    pub async fn init(config: &Config, vault_override: Option<&Path>) -> KoshResult<Self> {
        let vault_dir = ConfigManager::resolve_vault_dir(vault_override, config);
        let store = FileStore::open(&vault_dir).await?;
        let storage = Storage::new(store);

        let cache = Cache::new(storage.clone());
        let session = SessionManager::load(storage.clone()).await;
        let settings = SettingsManager::load(storage.clone()).await;
        let documents = DocumentVault::new(storage.clone());

        let default_tier = CacheDuration::from_name(&config.cache.default_tier)
            .unwrap_or_default();
        debug!("App context ready (vault: {})", vault_dir.display());

        Ok(Self {
            storage,
            cache,
            session,
            settings,
            documents,
            vault_dir,
            default_tier,
        })
    }

    /// Where this context persists
    pub fn vault_dir(&self) -> &Path {
        &self.vault_dir
    }

    /// Configured default cache tier
    pub fn default_tier(&self) -> CacheDuration {
        self.default_tier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn init_creates_vault_and_holders() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("vault");
        let config = Config::default();

        let app = App::init(&config, Some(&dir)).await.unwrap();
        assert!(dir.is_dir());
        assert_eq!(app.vault_dir(), dir);
        assert!(!app.session.is_registered().await);
        assert_eq!(app.default_tier(), CacheDuration::Medium);
    }

    #[tokio::test]
    async fn configured_tier_is_honored() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.cache.default_tier = "long".to_string();

        let app = App::init(&config, Some(temp.path())).await.unwrap();
        assert_eq!(app.default_tier(), CacheDuration::Long);
    }
}

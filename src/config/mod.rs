//! Configuration management for kosh

pub mod schema;

pub use schema::Config;

use crate::error::{KoshError, KoshResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kosh")
            .join("config.toml")
    }

    /// Get the default vault directory
    pub fn default_vault_dir() -> PathBuf {
        dirs::state_dir()
            .or_else(dirs::data_local_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("kosh")
            .join("vault")
    }

    /// Resolve the vault directory: explicit flag, then config, then
    /// the default location
    pub fn resolve_vault_dir(override_dir: Option<&Path>, config: &Config) -> PathBuf {
        if let Some(dir) = override_dir {
            return dir.to_path_buf();
        }
        config
            .vault
            .dir
            .clone()
            .unwrap_or_else(Self::default_vault_dir)
    }

    /// Load configuration, creating default if not exists
    pub async fn load(&self) -> KoshResult<Config> {
        if !self.config_path.exists() {
            debug!("Config file not found, using defaults");
            return Ok(Config::default());
        }

        self.load_from_file(&self.config_path).await
    }

    /// Load configuration from a specific file
    pub async fn load_from_file(&self, path: &Path) -> KoshResult<Config> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| KoshError::io(format!("reading config from {}", path.display()), e))?;

        toml::from_str(&content).map_err(|e| KoshError::ConfigInvalid {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Save configuration to file
    pub async fn save(&self, config: &Config) -> KoshResult<()> {
        self.ensure_config_dir().await?;

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await.map_err(|e| {
            KoshError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    /// Ensure the config directory exists
    async fn ensure_config_dir(&self) -> KoshResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| KoshError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }
        Ok(())
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_default_when_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nonexistent.toml");
        let manager = ConfigManager::with_path(path);

        let config = manager.load().await.unwrap();
        assert_eq!(config.cache.default_tier, "medium");
    }

    #[tokio::test]
    async fn save_and_load_roundtrip() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        let manager = ConfigManager::with_path(path);

        let mut config = Config::default();
        config.cache.default_tier = "long".to_string();

        manager.save(&config).await.unwrap();
        let loaded = manager.load().await.unwrap();

        assert_eq!(loaded.cache.default_tier, "long");
    }

    #[tokio::test]
    async fn invalid_toml_is_a_config_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        tokio::fs::write(&path, "not [valid toml").await.unwrap();

        let manager = ConfigManager::with_path(path);
        assert!(matches!(
            manager.load().await,
            Err(KoshError::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn vault_dir_resolution_order() {
        let mut config = Config::default();
        assert_eq!(
            ConfigManager::resolve_vault_dir(None, &config),
            ConfigManager::default_vault_dir()
        );

        config.vault.dir = Some(PathBuf::from("/tmp/configured"));
        assert_eq!(
            ConfigManager::resolve_vault_dir(None, &config),
            PathBuf::from("/tmp/configured")
        );

        assert_eq!(
            ConfigManager::resolve_vault_dir(Some(Path::new("/tmp/flag")), &config),
            PathBuf::from("/tmp/flag")
        );
    }
}

//! Configuration schema for kosh
//!
//! Configuration is stored at `~/.config/kosh/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Vault location settings
    pub vault: VaultConfig,

    /// Cache defaults
    pub cache: CacheConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Vault location configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultConfig {
    /// Vault directory (default: ~/.local/share/kosh/vault)
    pub dir: Option<PathBuf>,
}

/// Cache defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Default validity tier for cached reads: "short", "medium" or "long"
    pub default_tier: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_tier: "medium".to_string(),
        }
    }
}

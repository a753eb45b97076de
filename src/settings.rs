//! Application settings state
//!
//! Same holder pattern as [`crate::session::SessionManager`]: built
//! once at startup, hydrated from the vault, persist-first on every
//! mutation. A missing settings record yields the defaults.

use crate::error::KoshResult;
use crate::storage::{keys, Storage};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

/// Settings record persisted under `@settings`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub theme: Theme,
    pub notifications: bool,
    pub language: String,
    pub font_size: FontSize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            notifications: true,
            language: "en".to_string(),
            font_size: FontSize::Medium,
        }
    }
}

/// Partial update merged over the current settings
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub theme: Option<Theme>,
    pub notifications: Option<bool>,
    pub language: Option<String>,
    pub font_size: Option<FontSize>,
}

impl Settings {
    fn merged(&self, update: SettingsUpdate) -> Settings {
        Settings {
            theme: update.theme.unwrap_or(self.theme),
            notifications: update.notifications.unwrap_or(self.notifications),
            language: update.language.unwrap_or_else(|| self.language.clone()),
            font_size: update.font_size.unwrap_or(self.font_size),
        }
    }
}

/// Settings holder backed by the vault
pub struct SettingsManager {
    storage: Storage,
    settings: RwLock<Settings>,
}

impl SettingsManager {
    /// Hydrate from the vault; absence means defaults
    pub async fn load(storage: Storage) -> Self {
        let settings: Settings = storage.get(keys::SETTINGS).await.unwrap_or_default();
        Self {
            storage,
            settings: RwLock::new(settings),
        }
    }

    pub async fn current(&self) -> Settings {
        self.settings.read().await.clone()
    }

    /// Merge `update` over the current record, persist, then swap the
    /// in-memory copy. A failed write leaves memory unchanged.
    pub async fn update(&self, update: SettingsUpdate) -> KoshResult<Settings> {
        let merged = self.settings.read().await.merged(update);
        self.storage.save(keys::SETTINGS, &merged).await?;

        *self.settings.write().await = merged.clone();
        debug!("Settings updated");
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    async fn test_settings() -> (SettingsManager, Storage) {
        let storage = Storage::new(MemoryStore::new());
        (SettingsManager::load(storage.clone()).await, storage)
    }

    #[tokio::test]
    async fn defaults_when_vault_is_empty() {
        let (manager, _) = test_settings().await;
        let settings = manager.current().await;
        assert_eq!(settings.theme, Theme::Light);
        assert!(settings.notifications);
        assert_eq!(settings.language, "en");
        assert_eq!(settings.font_size, FontSize::Medium);
    }

    #[tokio::test]
    async fn update_merges_and_persists() {
        let (manager, storage) = test_settings().await;

        manager
            .update(SettingsUpdate {
                theme: Some(Theme::Dark),
                ..Default::default()
            })
            .await
            .unwrap();

        let current = manager.current().await;
        assert_eq!(current.theme, Theme::Dark);
        // Untouched fields keep their values
        assert_eq!(current.language, "en");

        // Persisted, not only in memory
        let stored: Settings = storage.get(keys::SETTINGS).await.unwrap();
        assert_eq!(stored, current);
    }

    #[tokio::test]
    async fn reload_sees_persisted_settings() {
        let storage = Storage::new(MemoryStore::new());
        {
            let manager = SettingsManager::load(storage.clone()).await;
            manager
                .update(SettingsUpdate {
                    language: Some("hi".into()),
                    font_size: Some(FontSize::Large),
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        let manager = SettingsManager::load(storage).await;
        let settings = manager.current().await;
        assert_eq!(settings.language, "hi");
        assert_eq!(settings.font_size, FontSize::Large);
    }

    #[test]
    fn record_shape_matches_persisted_layout() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["theme"], "light");
        assert_eq!(json["fontSize"], "medium");
        assert_eq!(json["notifications"], true);
    }
}

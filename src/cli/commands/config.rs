//! Config command - show or edit configuration

use crate::cache::CacheDuration;
use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::ConfigManager;
use crate::error::{KoshError, KoshResult};
use crate::ui::{self, UiContext};
use std::path::PathBuf;

/// Execute the config command
pub async fn execute(args: ConfigArgs, manager: &ConfigManager) -> KoshResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(manager).await,
        Some(ConfigAction::Path) => {
            println!("{}", manager.path().display());
            Ok(())
        }
        Some(ConfigAction::Init { force }) => init_config(manager, force).await,
        Some(ConfigAction::Set { key, value }) => set_value(manager, &key, &value).await,
    }
}

async fn show_config(manager: &ConfigManager) -> KoshResult<()> {
    let config = manager.load().await?;
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

async fn init_config(manager: &ConfigManager, force: bool) -> KoshResult<()> {
    let ctx = UiContext::detect();

    if manager.path().exists() && !force {
        ui::step_warn_hint(
            &ctx,
            &format!("Config already exists at {}", manager.path().display()),
            "Use --force to overwrite",
        );
        return Ok(());
    }

    manager.save(&Default::default()).await?;
    ui::step_ok(
        &ctx,
        &format!("Configuration initialized at {}", manager.path().display()),
    );
    Ok(())
}

async fn set_value(manager: &ConfigManager, key: &str, value: &str) -> KoshResult<()> {
    let ctx = UiContext::detect();
    let mut config = manager.load().await?;

    // Parse dot-separated key path
    let parts: Vec<&str> = key.split('.').collect();
    match parts.as_slice() {
        ["general", "log_format"] => {
            if !matches!(value, "text" | "json") {
                return Err(KoshError::User(format!(
                    "Invalid log_format: {} (expected text or json)",
                    value
                )));
            }
            config.general.log_format = value.to_string();
        }
        ["vault", "dir"] => config.vault.dir = Some(PathBuf::from(value)),
        ["cache", "default_tier"] => {
            if CacheDuration::from_name(value).is_none() {
                return Err(KoshError::User(format!(
                    "Invalid tier: {} (expected short, medium or long)",
                    value
                )));
            }
            config.cache.default_tier = value.to_string();
        }
        _ => return Err(KoshError::ConfigKeyUnknown(key.to_string())),
    }

    manager.save(&config).await?;
    ui::step_ok(&ctx, &format!("Set {} = {}", key, value));
    Ok(())
}

//! Settings command - show or update application settings

use crate::app::App;
use crate::cli::args::{SettingsAction, SettingsArgs};
use crate::error::{KoshError, KoshResult};
use crate::settings::{FontSize, SettingsUpdate, Theme};
use crate::ui::{self, UiContext};
use console::style;

/// Execute the settings command
pub async fn execute(args: SettingsArgs, app: &App) -> KoshResult<()> {
    match args.action {
        None | Some(SettingsAction::Show) => show(app).await,
        Some(SettingsAction::Set { key, value }) => set(app, &key, &value).await,
    }
}

async fn show(app: &App) -> KoshResult<()> {
    let settings = app.settings.current().await;
    println!("{}", style("Settings").bold());
    println!("  theme:          {:?}", settings.theme);
    println!("  notifications:  {}", settings.notifications);
    println!("  language:       {}", settings.language);
    println!("  font_size:      {:?}", settings.font_size);
    Ok(())
}

async fn set(app: &App, key: &str, value: &str) -> KoshResult<()> {
    let ctx = UiContext::detect();

    let update = match key {
        "theme" => SettingsUpdate {
            theme: Some(parse_theme(value)?),
            ..Default::default()
        },
        "notifications" => SettingsUpdate {
            notifications: Some(parse_bool(value)?),
            ..Default::default()
        },
        "language" => SettingsUpdate {
            language: Some(value.to_string()),
            ..Default::default()
        },
        "font_size" => SettingsUpdate {
            font_size: Some(parse_font_size(value)?),
            ..Default::default()
        },
        other => {
            return Err(KoshError::User(format!(
                "Unknown setting: {} (expected theme, notifications, language or font_size)",
                other
            )))
        }
    };

    app.settings.update(update).await?;
    ui::step_ok(&ctx, &format!("Set {} = {}", key, value));
    Ok(())
}

fn parse_theme(value: &str) -> KoshResult<Theme> {
    match value {
        "light" => Ok(Theme::Light),
        "dark" => Ok(Theme::Dark),
        _ => Err(KoshError::User(format!(
            "Invalid theme: {} (expected light or dark)",
            value
        ))),
    }
}

fn parse_font_size(value: &str) -> KoshResult<FontSize> {
    match value {
        "small" => Ok(FontSize::Small),
        "medium" => Ok(FontSize::Medium),
        "large" => Ok(FontSize::Large),
        _ => Err(KoshError::User(format!(
            "Invalid font_size: {} (expected small, medium or large)",
            value
        ))),
    }
}

fn parse_bool(value: &str) -> KoshResult<bool> {
    match value {
        "true" | "on" => Ok(true),
        "false" | "off" => Ok(false),
        _ => Err(KoshError::User(format!(
            "Invalid value: {} (expected true or false)",
            value
        ))),
    }
}

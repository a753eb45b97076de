//! Cache command - inspect or clear cached data

use crate::app::App;
use crate::cli::args::{CacheAction, CacheArgs};
use crate::error::KoshResult;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the cache command
pub async fn execute(args: CacheArgs, app: &App) -> KoshResult<()> {
    let ctx = UiContext::detect();

    match args.action {
        CacheAction::Stats => {
            let entries = app.cache.entries().await?;
            if entries.is_empty() {
                println!("Cache is empty.");
                return Ok(());
            }

            println!("{:<32} {:<10}", "ENTRY", "STATE");
            println!("{}", "-".repeat(42));
            for entry in &entries {
                let state = if app.cache.is_expired(entry).await {
                    style("expired").yellow().to_string()
                } else {
                    style("valid").green().to_string()
                };
                println!("{:<32} {:<10}", entry, state);
            }
            println!();
            println!("{} entries", entries.len());
        }
        CacheAction::Clear => {
            let removed = app.cache.clear().await?;
            ui::outro_success(&ctx, &format!("Cleared {} cache entries", removed));
        }
    }
    Ok(())
}

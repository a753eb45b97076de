//! Reset command - wipe the vault completely

use crate::app::App;
use crate::cli::args::ResetArgs;
use crate::error::KoshResult;
use crate::ui::{self, UiContext};

/// Execute the reset command
pub async fn execute(args: ResetArgs, app: &App) -> KoshResult<()> {
    let ctx = UiContext::detect().with_auto_yes(args.yes);

    let confirmed = ui::confirm(
        &ctx,
        "This deletes the account, documents and settings in this vault. Continue?",
        false,
    )
    .await?;

    if !confirmed {
        ui::outro_warn(&ctx, "Reset aborted");
        return Ok(());
    }

    app.storage.clear().await?;
    ui::outro_success(&ctx, "Vault cleared");
    Ok(())
}

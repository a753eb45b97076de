//! Logout command - sign out and forget the account

use crate::app::App;
use crate::error::KoshResult;
use crate::ui::{self, UiContext};

/// Execute the logout command
pub async fn execute(app: &App) -> KoshResult<()> {
    let ctx = UiContext::detect();

    if !app.session.is_registered().await && !app.session.is_authenticated().await {
        ui::outro_warn(&ctx, "Nothing to sign out of");
        return Ok(());
    }

    app.session.sign_out().await?;
    ui::outro_success(&ctx, "Signed out");
    Ok(())
}

//! Verify command - OTP confirmation for mobile and email
//!
//! There is no real gateway behind this product; any well-formed
//! 6-digit code verifies the channel.

use crate::app::App;
use crate::cli::args::{VerifyArgs, VerifyChannel};
use crate::error::{KoshError, KoshResult};
use crate::onboarding::validate;
use crate::ui::{self, UiContext};

/// Execute the verify command
pub async fn execute(args: VerifyArgs, app: &App) -> KoshResult<()> {
    let ctx = UiContext::detect();

    let (label, code, next_hint) = match &args.channel {
        VerifyChannel::Mobile { code } => (
            "mobile number",
            code.clone(),
            "kosh verify email to confirm your email next",
        ),
        VerifyChannel::Email { code } => (
            "email address",
            code.clone(),
            "kosh documents to upload your KYC documents",
        ),
    };

    let code = match code {
        Some(code) => code,
        None => ui::input(&ctx, "6-digit code", "--code").await?,
    };
    if !validate::is_valid_otp(&code) {
        return Err(KoshError::validation("otp", "enter a valid 6-digit OTP"));
    }

    match args.channel {
        VerifyChannel::Mobile { .. } => app.session.mark_mobile_verified().await?,
        VerifyChannel::Email { .. } => app.session.mark_email_verified().await?,
    }

    ui::step_ok(&ctx, &format!("Your {} is verified", label));
    ui::outro_success(&ctx, next_hint);
    Ok(())
}

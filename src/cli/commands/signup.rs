//! Signup command - create the account in this vault

use crate::app::App;
use crate::cli::args::SignupArgs;
use crate::error::{KoshError, KoshResult};
use crate::model::UserProfile;
use crate::onboarding::validate;
use crate::ui::{self, UiContext};
use chrono::Utc;

/// Execute the signup command
pub async fn execute(args: SignupArgs, app: &App) -> KoshResult<()> {
    let ctx = UiContext::detect();

    if app.session.is_registered().await {
        return Err(KoshError::AlreadyRegistered);
    }

    ui::intro(&ctx, "Create Account");

    let name = match args.name {
        Some(name) => name,
        None => ui::input(&ctx, "Full name", "--name").await?,
    };
    if name.trim().is_empty() {
        return Err(KoshError::validation("name", "full name is required"));
    }

    let email = match args.email {
        Some(email) => email,
        None => ui::input(&ctx, "Email address", "--email").await?,
    };
    if !validate::is_valid_email(&email) {
        return Err(KoshError::validation("email", "invalid email format"));
    }

    let mobile = match args.mobile {
        Some(mobile) => mobile,
        None => ui::input(&ctx, "Mobile number", "--mobile").await?,
    };
    if !validate::is_valid_mobile(&mobile) {
        return Err(KoshError::validation("mobile", "enter a valid 10-digit number"));
    }

    let pan = match args.pan {
        Some(pan) => pan,
        None => ui::input(&ctx, "PAN card number", "--pan").await?,
    };
    if !validate::is_valid_pan(&pan) {
        return Err(KoshError::validation(
            "panCard",
            "invalid PAN format (e.g. ABCDE1234F)",
        ));
    }

    let password = match args.password {
        Some(password) => password,
        None => {
            let password = ui::password(&ctx, "Password", "--password").await?;
            let confirm = ui::password(&ctx, "Confirm password", "--password").await?;
            if password != confirm {
                return Err(KoshError::validation("confirmPassword", "passwords don't match"));
            }
            password
        }
    };
    if password.len() < validate::SIGNUP_PASSWORD_MIN {
        return Err(KoshError::validation(
            "password",
            format!("minimum {} characters required", validate::SIGNUP_PASSWORD_MIN),
        ));
    }

    let profile = UserProfile {
        email,
        name,
        mobile,
        pan_number: Some(pan),
        date_of_birth: None,
        gender: None,
        address: None,
        nominee: None,
        bank_details: None,
        created_at: Utc::now(),
    };

    app.session.register(profile, &password).await?;

    ui::note(
        &ctx,
        "Next steps",
        "kosh verify mobile   confirm your mobile number\nkosh documents       upload KYC documents\nkosh details         complete your account details",
    );
    ui::outro_success(&ctx, "Account created");
    Ok(())
}

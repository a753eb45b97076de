//! Login command - verify credentials and issue a session token

use crate::app::App;
use crate::cli::args::LoginArgs;
use crate::error::KoshResult;
use crate::ui::{self, UiContext};

/// Execute the login command
pub async fn execute(args: LoginArgs, app: &App) -> KoshResult<()> {
    let ctx = UiContext::detect();

    let email = match args.email {
        Some(email) => email,
        None => ui::input(&ctx, "Email address", "--email").await?,
    };
    let password = match args.password {
        Some(password) => password,
        None => ui::password(&ctx, "Password", "--password").await?,
    };

    app.session.sign_in(&email, &password).await?;

    let user = app.session.current_user().await;
    let greeting = match user {
        Some(user) => format!("Welcome back, {}", user.name),
        None => "Signed in".to_string(),
    };
    ui::outro_success(&ctx, &greeting);
    Ok(())
}

//! Status command - onboarding progress checklist

use crate::app::App;
use crate::error::KoshResult;
use console::{style, Emoji};

static CHECK: Emoji<'_, '_> = Emoji("✓ ", "[OK] ");
static CROSS: Emoji<'_, '_> = Emoji("✗ ", "[--] ");

/// Execute the status command
pub async fn execute(app: &App) -> KoshResult<()> {
    println!("{}", style("Onboarding Status").bold().cyan());
    println!();

    println!("{}", style("Account:").bold());
    match app.session.current_user().await {
        Some(user) => {
            println!("  {} Registered as {} <{}>", CHECK, user.name, user.email);
            let details_done = user.bank_details.is_some() && user.address.is_some();
            if details_done {
                println!("  {} Account details complete", CHECK);
            } else {
                println!(
                    "  {} Account details pending — run: kosh details",
                    CROSS
                );
            }
        }
        None => println!("  {} Not registered — run: kosh signup", CROSS),
    }
    if app.session.is_authenticated().await {
        println!("  {} Signed in", CHECK);
    } else {
        println!("  {} Not signed in — run: kosh login", CROSS);
    }

    println!();
    println!("{}", style("Verification:").bold());
    let verification = app.session.verification().await;
    print_flag(verification.mobile_verified, "Mobile number", "kosh verify mobile");
    print_flag(verification.email_verified, "Email address", "kosh verify email");

    println!();
    println!("{}", style("Documents:").bold());
    let attached = app
        .documents
        .status()
        .await
        .iter()
        .filter(|(_, image)| image.is_some())
        .count();
    println!("  {} of 3 attached", attached);
    match verification.documents {
        Some(record) => println!("  {} Submitted at {}", CHECK, record.verified_at),
        None => println!("  {} Not submitted — run: kosh documents submit", CROSS),
    }

    println!();
    println!(
        "{}",
        style(format!("Vault: {}", app.vault_dir().display())).dim()
    );
    Ok(())
}

fn print_flag(verified: bool, label: &str, hint: &str) {
    if verified {
        println!("  {} {} verified", CHECK, label);
    } else {
        println!("  {} {} not verified — run: {}", CROSS, label, hint);
    }
}

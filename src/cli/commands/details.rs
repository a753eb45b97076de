//! Details command - the five-step account details wizard

use crate::app::App;
use crate::cli::args::DetailsArgs;
use crate::error::{KoshError, KoshResult};
use crate::model::Gender;
use crate::onboarding::{DetailsWizard, WizardStep};
use crate::ui::{self, UiContext};
use tokio::fs;

/// Execute the details command
pub async fn execute(args: DetailsArgs, app: &App) -> KoshResult<()> {
    let ctx = UiContext::detect();

    let wizard = match args.from_json {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .await
                .map_err(|e| KoshError::io(format!("reading {}", path.display()), e))?;
            serde_json::from_str(&content)?
        }
        None => run_interactive(&ctx).await?,
    };

    let (profile, password) = wizard.submit()?;
    let name = profile.name.clone();
    app.session.complete_details(profile, &password).await?;

    ui::outro_success(&ctx, &format!("Account details saved for {}", name));
    Ok(())
}

/// Walk the wizard step by step, re-prompting a step until it
/// validates
async fn run_interactive(ctx: &UiContext) -> KoshResult<DetailsWizard> {
    ui::intro(ctx, "Account Details");
    let mut wizard = DetailsWizard::new();

    loop {
        let step = wizard.step();
        ui::note(
            ctx,
            &format!("Step {} of {}", step.number(), WizardStep::COUNT),
            step.title(),
        );

        fill_step(ctx, &mut wizard, step).await?;

        match wizard.next() {
            Ok(()) => {
                if step == WizardStep::Bank {
                    return Ok(wizard);
                }
            }
            Err(e) => ui::step_warn_hint(ctx, &e.to_string(), "Let's try that step again"),
        }
    }
}

async fn fill_step(ctx: &UiContext, wizard: &mut DetailsWizard, step: WizardStep) -> KoshResult<()> {
    // Any prompt in a non-interactive environment points at --from-json
    let flag = "--from-json";
    match step {
        WizardStep::Identity => {
            let form = &mut wizard.identity;
            form.pan_number = ui::input(ctx, "PAN number", flag).await?;
            form.name_as_per_pan = ui::input(ctx, "Name as per PAN", flag).await?;
            form.date_of_birth = ui::input(ctx, "Date of birth (YYYY-MM-DD)", flag).await?;
            form.email = ui::input(ctx, "Email address", flag).await?;
            form.mobile = ui::input(ctx, "Mobile number", flag).await?;
            form.gender = Some(
                ui::select(ctx, "Gender", &[(Gender::Male, "Male"), (Gender::Female, "Female")])
                    .await?,
            );
        }
        WizardStep::Address => {
            let form = &mut wizard.address;
            form.line1 = ui::input(ctx, "Address line 1", flag).await?;
            form.line2 = ui::input(ctx, "Address line 2 (optional)", flag).await.unwrap_or_default();
            form.pin_code = ui::input(ctx, "PIN code", flag).await?;
            form.city = ui::input(ctx, "City", flag).await?;
            form.state = ui::input(ctx, "State", flag).await?;
        }
        WizardStep::Nominee => {
            let form = &mut wizard.nominee;
            let declared = ui::confirm(ctx, "Do you want to declare a nominee?", false).await?;
            form.declared = Some(declared);
            if declared {
                form.name = ui::input(ctx, "Nominee name", flag).await?;
                form.date_of_birth = ui::input(ctx, "Nominee date of birth", flag).await?;
                form.relation = ui::input(ctx, "Relation with nominee", flag).await?;
                form.age = ui::input(ctx, "Nominee age", flag).await?;
            }
        }
        WizardStep::Security => {
            let form = &mut wizard.security;
            form.password = ui::password(ctx, "Password", flag).await?;
            form.confirm_password = ui::password(ctx, "Confirm password", flag).await?;
        }
        WizardStep::Bank => {
            let form = &mut wizard.bank;
            form.ifsc_code = ui::input(ctx, "IFSC code", flag).await?;
            form.account_no = ui::input(ctx, "Account number", flag).await?;
            form.account_type = ui::input(ctx, "Account type", flag).await?;
            form.bank_name = ui::input(ctx, "Bank name", flag).await?;
            form.branch_name = ui::input(ctx, "Branch name", flag).await?;
            form.bank_address = ui::input(ctx, "Bank address", flag).await?;
        }
    }
    Ok(())
}

//! Profile command - display the stored user record

use crate::app::App;
use crate::cli::args::ProfileArgs;
use crate::error::{KoshError, KoshResult};
use console::style;

/// Execute the profile command
pub async fn execute(args: ProfileArgs, app: &App) -> KoshResult<()> {
    let user = app.session.current_user().await.ok_or(KoshError::NotRegistered)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&user)?);
        return Ok(());
    }

    println!("{}", style(&user.name).bold());
    println!("  Email:   {}", user.email);
    println!("  Mobile:  {}", user.mobile);
    if let Some(pan) = &user.pan_number {
        println!("  PAN:     {}", pan);
    }
    if let Some(dob) = &user.date_of_birth {
        println!("  DOB:     {}", dob);
    }
    if let Some(gender) = user.gender {
        println!("  Gender:  {:?}", gender);
    }

    if let Some(address) = &user.address {
        println!();
        println!("{}", style("Address").bold());
        println!("  {}", address.line1);
        if let Some(line2) = &address.line2 {
            println!("  {}", line2);
        }
        println!("  {} {}, {}", address.pin_code, address.city, address.state);
    }

    if let Some(nominee) = &user.nominee {
        println!();
        println!("{}", style("Nominee").bold());
        println!("  {} ({}, age {})", nominee.name, nominee.relation, nominee.age);
    }

    if let Some(bank) = &user.bank_details {
        println!();
        println!("{}", style("Bank").bold());
        println!("  {} — {}", bank.bank_name, bank.branch_name);
        println!("  IFSC: {}  Account: {}", bank.ifsc_code, bank.account_no);
    }

    println!();
    println!("{}", style(format!("Member since {}", user.created_at.date_naive())).dim());
    Ok(())
}

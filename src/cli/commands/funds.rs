//! Funds command - browse the fund catalog through the cache

use crate::app::App;
use crate::cli::args::FundsArgs;
use crate::error::KoshResult;
use crate::funds::{FundCategory, FundInfo, FundService};
use console::style;

/// Execute the funds command
pub async fn execute(args: FundsArgs, app: &App) -> KoshResult<()> {
    let service = FundService::new(app.cache.clone(), app.default_tier());

    let categories: Vec<FundCategory> = match args.category {
        Some(category) => vec![category],
        None => FundCategory::ALL.to_vec(),
    };

    for category in categories {
        let funds = service.list(category, args.refresh).await?;
        print_category(category, &funds);
    }
    Ok(())
}

fn print_category(category: FundCategory, funds: &[FundInfo]) {
    println!("{}", style(category.label()).bold().cyan());
    println!(
        "  {:<28} {:>8} {:>12} {:>8}",
        "FUND", "RETURNS", "AUM", "MIN SIP"
    );
    for fund in funds {
        println!(
            "  {:<28} {:>8} {:>12} {:>8}",
            fund.name, fund.returns, fund.aum, fund.min_sip
        );
    }
    println!();
}

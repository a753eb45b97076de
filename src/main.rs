//! kosh - Local-first KYC onboarding vault
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use kosh::app::App;
use kosh::cli::{commands, Cli, Commands};
use kosh::config::ConfigManager;
use kosh::error::KoshResult;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> KoshResult<()> {
    let cli = Cli::parse();

    // Completions don't need config or a vault
    if let Commands::Completions(args) = cli.command {
        return commands::completions(args);
    }

    let config_manager = if let Some(ref path) = cli.config {
        ConfigManager::with_path(path.clone())
    } else {
        ConfigManager::new()
    };
    let config = config_manager.load().await?;

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("kosh=warn"),
        1 => EnvFilter::new("kosh=info"),
        _ => EnvFilter::new("kosh=debug"),
    };
    if config.general.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .init();
    }

    // Config editing works without opening the vault
    if let Commands::Config(args) = cli.command {
        return commands::config(args, &config_manager).await;
    }

    let app = App::init(&config, cli.vault.as_deref()).await?;

    match cli.command {
        Commands::Completions(_) | Commands::Config(_) => unreachable!("handled above"),
        Commands::Signup(args) => commands::signup(args, &app).await,
        Commands::Login(args) => commands::login(args, &app).await,
        Commands::Logout => commands::logout(&app).await,
        Commands::Verify(args) => commands::verify(args, &app).await,
        Commands::Documents(args) => commands::documents(args, &app).await,
        Commands::Details(args) => commands::details(args, &app).await,
        Commands::Profile(args) => commands::profile(args, &app).await,
        Commands::Status => commands::status(&app).await,
        Commands::Funds(args) => commands::funds(args, &app).await,
        Commands::Settings(args) => commands::settings(args, &app).await,
        Commands::Cache(args) => commands::cache(args, &app).await,
        Commands::Reset(args) => commands::reset(args, &app).await,
    }
}

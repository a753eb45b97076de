//! CLI argument definitions using clap derive

use crate::funds::FundCategory;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// kosh - Local-first KYC onboarding vault
///
/// Walks a signup through identity capture, OTP verification, document
/// upload and account details, keeping everything in an on-device
/// vault.
#[derive(Parser, Debug)]
#[command(name = "kosh")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "KOSH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Vault directory (overrides configuration)
    #[arg(long, global = true, env = "KOSH_VAULT")]
    pub vault: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account in this vault
    Signup(SignupArgs),

    /// Sign in and receive a session token
    Login(LoginArgs),

    /// Sign out and forget the account
    Logout,

    /// Verify a one-time passcode
    Verify(VerifyArgs),

    /// Attach and submit KYC documents
    Documents(DocumentsArgs),

    /// Complete the five-step account details wizard
    Details(DetailsArgs),

    /// Show the stored profile
    Profile(ProfileArgs),

    /// Show onboarding progress
    Status,

    /// Browse the fund catalog
    Funds(FundsArgs),

    /// Show or update application settings
    Settings(SettingsArgs),

    /// Inspect or clear cached data
    Cache(CacheArgs),

    /// Show or edit configuration
    Config(ConfigArgs),

    /// Wipe the vault completely
    Reset(ResetArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the signup command
#[derive(Parser, Debug)]
pub struct SignupArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// 10-digit mobile number
    #[arg(long)]
    pub mobile: Option<String>,

    /// PAN card number (e.g. ABCDE1234F)
    #[arg(long)]
    pub pan: Option<String>,

    /// Account password (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

/// Arguments for the login command
#[derive(Parser, Debug)]
pub struct LoginArgs {
    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Account password (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,
}

/// Arguments for the verify command
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Which channel to verify
    #[command(subcommand)]
    pub channel: VerifyChannel,
}

#[derive(Subcommand, Debug)]
pub enum VerifyChannel {
    /// Verify the mobile number
    Mobile {
        /// 6-digit code (prompted when omitted)
        #[arg(long)]
        code: Option<String>,
    },
    /// Verify the email address
    Email {
        /// 6-digit code (prompted when omitted)
        #[arg(long)]
        code: Option<String>,
    },
}

/// Arguments for the documents command
#[derive(Parser, Debug)]
pub struct DocumentsArgs {
    #[command(subcommand)]
    pub action: DocumentsAction,
}

#[derive(Subcommand, Debug)]
pub enum DocumentsAction {
    /// Attach a document image
    Attach {
        /// Which document this is
        #[arg(value_enum)]
        kind: DocumentKindArg,

        /// Path to the image file
        file: PathBuf,
    },
    /// Show which documents are attached
    Status,
    /// Submit all three documents for verification
    Submit,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DocumentKindArg {
    Pan,
    IdFront,
    IdBack,
}

impl From<DocumentKindArg> for crate::model::DocumentKind {
    fn from(arg: DocumentKindArg) -> Self {
        match arg {
            DocumentKindArg::Pan => Self::Pan,
            DocumentKindArg::IdFront => Self::IdFront,
            DocumentKindArg::IdBack => Self::IdBack,
        }
    }
}

/// Arguments for the details command
#[derive(Parser, Debug)]
pub struct DetailsArgs {
    /// Read wizard answers from a JSON file instead of prompting
    #[arg(long)]
    pub from_json: Option<PathBuf>,
}

/// Arguments for the profile command
#[derive(Parser, Debug)]
pub struct ProfileArgs {
    /// Print the raw profile record as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the funds command
#[derive(Parser, Debug)]
pub struct FundsArgs {
    /// Fund category to list (all categories when omitted)
    #[arg(long, value_enum)]
    pub category: Option<FundCategory>,

    /// Bypass the cached listing
    #[arg(long)]
    pub refresh: bool,
}

/// Arguments for the settings command
#[derive(Parser, Debug)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub action: Option<SettingsAction>,
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Show current settings
    Show,
    /// Update one setting (theme, notifications, language, font_size)
    Set {
        /// Setting name
        key: String,
        /// New value
        value: String,
    },
}

/// Arguments for the cache command
#[derive(Parser, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub action: CacheAction,
}

#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// Show cache entry counts
    Stats,
    /// Remove every cached entry
    Clear,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show resolved configuration
    Show,
    /// Show the config file path
    Path,
    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Set a configuration value (dot-separated key)
    Set {
        /// Key such as general.log_format or cache.default_tier
        key: String,
        /// New value
        value: String,
    },
}

/// Arguments for the reset command
#[derive(Parser, Debug)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_signup_flags() {
        let cli = Cli::parse_from([
            "kosh", "signup", "--name", "Asha", "--email", "a@b.co", "--mobile", "9876543210",
            "--pan", "ABCDE1234F", "--password", "hunter2!",
        ]);
        match cli.command {
            Commands::Signup(args) => {
                assert_eq!(args.name.as_deref(), Some("Asha"));
                assert_eq!(args.pan.as_deref(), Some("ABCDE1234F"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_global_vault_flag() {
        let cli = Cli::parse_from(["kosh", "--vault", "/tmp/v", "status"]);
        assert_eq!(cli.vault.as_deref(), Some(std::path::Path::new("/tmp/v")));
    }
}

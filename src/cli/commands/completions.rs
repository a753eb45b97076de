//! Completions command - generate shell completion scripts

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::KoshResult;
use clap::CommandFactory;
use clap_complete::generate;
use std::io;

/// Execute the completions command
pub fn execute(args: CompletionsArgs) -> KoshResult<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "kosh", &mut io::stdout());
    Ok(())
}

//! UI module for consistent CLI experience
//!
//! Uses `cliclack` for interactive prompts with automatic fallback to
//! plain output in CI/non-interactive environments. Every prompt has a
//! flag equivalent, so the binary stays fully scriptable.

mod context;
mod output;
mod prompts;

pub use context::UiContext;
pub use output::{intro, note, outro_success, outro_warn, step_ok, step_warn_hint};
pub use prompts::{confirm, input, password, select};

//! Interactive prompts with CI/non-interactive fallback
//!
//! Every prompt has a flag equivalent on its command; in a
//! non-interactive environment a missing value is an error naming the
//! flag, never a hang.

use super::context::UiContext;
use crate::error::{KoshError, KoshResult};

fn non_interactive_error(label: &str, flag: &str) -> KoshError {
    KoshError::User(format!(
        "{} required: pass {} (not an interactive terminal)",
        label, flag
    ))
}

/// Prompt for a line of text; errors with the flag name when
/// non-interactive
pub async fn input(ctx: &UiContext, label: &str, flag: &str) -> KoshResult<String> {
    if !ctx.is_interactive() {
        return Err(non_interactive_error(label, flag));
    }

    let label = label.to_string();
    let result = tokio::task::spawn_blocking(move || {
        cliclack::input(&label).interact::<String>()
    })
    .await
    .map_err(|e| KoshError::User(format!("Prompt task failed: {}", e)))?;

    result.map_err(|e| KoshError::User(format!("Prompt failed: {}", e)))
}

/// Prompt for a masked secret
pub async fn password(ctx: &UiContext, label: &str, flag: &str) -> KoshResult<String> {
    if !ctx.is_interactive() {
        return Err(non_interactive_error(label, flag));
    }

    let label = label.to_string();
    let result = tokio::task::spawn_blocking(move || {
        cliclack::password(&label).mask('*').interact()
    })
    .await
    .map_err(|e| KoshError::User(format!("Prompt task failed: {}", e)))?;

    result.map_err(|e| KoshError::User(format!("Prompt failed: {}", e)))
}

/// Prompt for confirmation, returns default if non-interactive or
/// auto-yes
pub async fn confirm(ctx: &UiContext, message: &str, default: bool) -> KoshResult<bool> {
    if ctx.auto_yes() {
        println!("  {} (auto-approved)", message);
        return Ok(true);
    }

    if !ctx.is_interactive() {
        return Ok(default);
    }

    let message = message.to_string();
    let result = tokio::task::spawn_blocking(move || {
        cliclack::confirm(&message).initial_value(default).interact()
    })
    .await
    .map_err(|e| KoshError::User(format!("Prompt task failed: {}", e)))?;

    result.map_err(|e| KoshError::User(format!("Prompt failed: {}", e)))
}

/// Prompt for selection from a list of options; first option when
/// non-interactive
pub async fn select<T: Clone + Send + Eq + 'static>(
    ctx: &UiContext,
    message: &str,
    options: &[(T, &str)],
) -> KoshResult<T> {
    if !ctx.is_interactive() {
        return Ok(options[0].0.clone());
    }

    let message = message.to_string();
    let items: Vec<(T, String)> = options
        .iter()
        .map(|(v, label)| (v.clone(), label.to_string()))
        .collect();

    let result = tokio::task::spawn_blocking(move || {
        let mut select = cliclack::select(&message);
        for (value, label) in items {
            select = select.item(value, label, "");
        }
        select.interact()
    })
    .await
    .map_err(|e| KoshError::User(format!("Prompt task failed: {}", e)))?;

    result.map_err(|e| KoshError::User(format!("Select failed: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn non_interactive_input_names_the_flag() {
        let ctx = UiContext::non_interactive();
        let err = input(&ctx, "Email address", "--email").await.unwrap_err();
        assert!(err.to_string().contains("--email"));
    }

    #[tokio::test]
    async fn non_interactive_confirm_uses_default() {
        let ctx = UiContext::non_interactive();
        assert!(!confirm(&ctx, "Proceed?", false).await.unwrap());
        assert!(confirm(&ctx, "Proceed?", true).await.unwrap());
    }

    #[tokio::test]
    async fn auto_yes_approves() {
        let ctx = UiContext::non_interactive().with_auto_yes(true);
        assert!(confirm(&ctx, "Proceed?", false).await.unwrap());
    }

    #[tokio::test]
    async fn non_interactive_select_takes_first() {
        let ctx = UiContext::non_interactive();
        let picked = select(&ctx, "Pick", &[(1, "one"), (2, "two")]).await.unwrap();
        assert_eq!(picked, 1);
    }
}

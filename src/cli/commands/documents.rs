//! Documents command - attach and submit KYC document images

use crate::app::App;
use crate::cli::args::{DocumentsAction, DocumentsArgs};
use crate::error::{KoshError, KoshResult};
use crate::ui::{self, UiContext};

/// Execute the documents command
pub async fn execute(args: DocumentsArgs, app: &App) -> KoshResult<()> {
    let ctx = UiContext::detect();

    if !app.session.is_registered().await {
        return Err(KoshError::NotRegistered);
    }

    match args.action {
        DocumentsAction::Attach { kind, file } => {
            let kind = kind.into();
            let image = app.documents.attach(kind, &file).await?;
            ui::step_ok(
                &ctx,
                &format!("{} attached (sha256 {})", kind.label(), &image.sha256[..12]),
            );
        }
        DocumentsAction::Status => {
            for (kind, image) in app.documents.status().await {
                match image {
                    Some(image) => ui::step_ok(
                        &ctx,
                        &format!("{}: {}", kind.label(), image.uri),
                    ),
                    None => ui::step_warn_hint(
                        &ctx,
                        &format!("{}: not attached", kind.label()),
                        &format!("Run: kosh documents attach {} <file>", kind_flag(kind)),
                    ),
                }
            }
            if let Some(record) = app.documents.record().await {
                ui::step_ok(
                    &ctx,
                    &format!("Submitted for verification at {}", record.verified_at),
                );
            }
        }
        DocumentsAction::Submit => {
            let record = app.documents.submit().await?;
            ui::outro_success(
                &ctx,
                &format!("Documents submitted ({})", record.verified_at),
            );
        }
    }
    Ok(())
}

fn kind_flag(kind: crate::model::DocumentKind) -> &'static str {
    use crate::model::DocumentKind;
    match kind {
        DocumentKind::Pan => "pan",
        DocumentKind::IdFront => "id-front",
        DocumentKind::IdBack => "id-back",
    }
}

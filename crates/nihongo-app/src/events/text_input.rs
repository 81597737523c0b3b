use kanal::AsyncSender;
use nihongo_core::{LanguageProcessor, Preprocessor};

use crate::events::AppEvent;
use crate::state::AppState;

pub async fn handle_text_input(
    state: &AppState,
    text: String,
    output_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let text = if state.config.output.normalize_input {
        state.preprocessor.process(&text)
    } else {
        text
    };

    if text.trim().is_empty() {
        tracing::debug!("Ignoring empty input");
        return Ok(());
    }

    let result = state.processor.analyze(&text);
    tracing::debug!(
        "Resolved '{}' to '{}' ({})",
        result.original_text,
        result.resolved_text,
        result.direction.as_str()
    );

    output_tx
        .send(AppEvent::ShowAnalysis(Box::new(result)))
        .await?;

    Ok(())
}

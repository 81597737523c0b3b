use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use nihongo_lang_japanese::AnalysisResult;

use crate::state::AppState;

pub mod text_input;

use text_input::handle_text_input;

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Raw text from a watcher
    TextInput(String),
    ShowAnalysis(Box<AnalysisResult>),
    /// Input is exhausted; downstream tasks finish after draining
    Shutdown,
}

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    input_rx: AsyncReceiver<AppEvent>,
    output_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    tracing::debug!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = input_rx.recv().await?;

        match event {
            AppEvent::TextInput(text) => {
                tracing::debug!("TextInput received: {} chars", text.chars().count());
                handle_text_input(&state, text, &output_tx).await?;
            }
            AppEvent::ShowAnalysis(_) => {
                // Output-only event
            }
            AppEvent::Shutdown => {
                tracing::debug!("[EVENT_LOOP] Input closed");
                output_tx.send(AppEvent::Shutdown).await?;
                return Ok(());
            }
        }
    }
}

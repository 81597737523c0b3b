use std::io::Write;

use kanal::{AsyncReceiver, AsyncSender};
use nihongo_config::output::OutputFormat;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

use crate::events::AppEvent;
use crate::report;

const PROMPT: &str = "> ";

/// Watch stdin, one event per line
pub async fn watcher_io(
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
    interactive: bool,
) -> anyhow::Result<()> {
    if interactive {
        tracing::info!("Reading from terminal; Ctrl+C to quit");
    }

    let reader = BufReader::new(tokio::io::stdin());
    let prompt = interactive.then(std::io::stdout);
    watch_lines(reader, prompt, cancel, event_tx).await
}

/// Forward lines from `reader` until EOF or cancellation, then send
/// [`AppEvent::Shutdown`].
///
/// With a `prompt` writer the first prompt is written here, and again after a
/// blank line since no report will follow it. After a report the printer
/// writes it.
pub async fn watch_lines<R, W>(
    reader: R,
    mut prompt: Option<W>,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = reader.lines();
    if let Some(out) = prompt.as_mut() {
        write_prompt(out)?;
    }

    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(text) if text.trim().is_empty() => {
                        if let Some(out) = prompt.as_mut() {
                            write_prompt(out)?;
                        }
                    }
                    Some(text) => {
                        if let Err(e) = event_tx.send(AppEvent::TextInput(text)).await {
                            tracing::error!("Failed to send input to app: {}", e);
                            break;
                        }
                    }
                    None => {
                        tracing::debug!("Input reached EOF");
                        break;
                    }
                }
            }
            _ = cancel.cancelled() => {
                tracing::info!("Input watcher stopping");
                break;
            }
        }
    }

    event_tx.send(AppEvent::Shutdown).await?;
    Ok(())
}

fn write_prompt<W: Write>(out: &mut W) -> std::io::Result<()> {
    out.write_all(PROMPT.as_bytes())?;
    out.flush()
}

/// Print analyses to stdout as they arrive
pub async fn output_loop(
    output_rx: AsyncReceiver<AppEvent>,
    format: OutputFormat,
    interactive: bool,
) -> anyhow::Result<()> {
    print_reports(output_rx, format, interactive, std::io::stdout()).await
}

/// Write one report per analysis until [`AppEvent::Shutdown`]. With `prompt`
/// set the prompt follows each report.
pub async fn print_reports<W: Write>(
    output_rx: AsyncReceiver<AppEvent>,
    format: OutputFormat,
    prompt: bool,
    mut out: W,
) -> anyhow::Result<()> {
    loop {
        match output_rx.recv().await? {
            AppEvent::ShowAnalysis(result) => {
                writeln!(out, "{}", report::render(&result, format)?)?;
                if prompt {
                    write_prompt(&mut out)?;
                } else {
                    out.flush()?;
                }
            }
            AppEvent::Shutdown => return Ok(()),
            AppEvent::TextInput(_) => {}
        }
    }
}

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use nihongo_config::Config;
use nihongo_config::output::{LogFormat, OutputFormat};
use nihongo_core::{LanguageProcessor, Preprocessor};
use nihongo_lang_japanese::JlptLevel;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod dataset;
pub mod events;
pub mod io;
pub mod report;
pub mod state;


use self::controller::AppController;
use self::state::AppState;

#[derive(Parser)]
#[command(name = "nihongo")]
#[command(about = "Japanese/Portuguese lookup, grammar and katakana annotation", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Dictionary dataset (overrides NIHONGO_DATASET and the config file)
    #[arg(long, global = true)]
    dataset: Option<String>,

    /// Print analyses as JSON
    #[arg(long, global = true)]
    json: bool,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze text given on the command line
    Analyze {
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Analyze each line read from stdin
    Watch,
    /// List the built-in grammar rules
    Rules {
        /// Only this level (N5..N1)
        #[arg(short, long)]
        level: Option<JlptLevel>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    if let Some(dataset) = &cli.dataset {
        config.dictionary.dataset_path = Some(dataset.clone());
    }
    if cli.json {
        config.output.format = OutputFormat::Json;
    }

    init_tracing(&cli, config.output.log_format);
    tracing::debug!("nihongo v{} starting...", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Analyze { text } => analyze(config, &text.join(" ")).await,
        Commands::Watch => watch(config).await,
        Commands::Rules { level } => {
            let matcher = nihongo_lang_japanese::GrammarPatternMatcher::with_defaults();
            println!("{}", report::render_rules(matcher.rules(), level));
            Ok(())
        }
    }
}

fn init_tracing(cli: &Cli, log_format: LogFormat) {
    let level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, _) => "debug",
    };

    // RUST_LOG wins over the flags
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "nihongo={level},nihongo_lang_japanese={level},nihongo_core={level}"
        ))
    });

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    match log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn analyze(config: Config, text: &str) -> anyhow::Result<()> {
    let format = config.output.format;
    let normalize_input = config.output.normalize_input;
    let state = AppState::load(config).await?;

    let text = if normalize_input {
        state.preprocessor.process(text)
    } else {
        text.to_string()
    };

    let result = state.processor.analyze(&text);
    println!("{}", report::render(&result, format)?);
    Ok(())
}

async fn watch(config: Config) -> anyhow::Result<()> {
    let state = Arc::new(AppState::load(config).await?);
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    let drain = async {
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => tracing::error!("task exited: {e}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    };

    tokio::select! {
        _ = drain => {
            tracing::debug!("All tasks finished");
        }
        result = signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("failed to listen for ctrl+c: {e}");
            }
            tracing::info!("Shutdown requested");
            controller.shutdown();
        }
    }

    tasks.shutdown().await;
    Ok(())
}

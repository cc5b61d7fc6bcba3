//! Server entrypoint for quandary
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod routes;
mod server;

use anyhow::Result;
use clap::Parser;
use quandary_application::GenerateQuestionUseCase;
use quandary_domain::GenerationMode;
use quandary_infrastructure::{ConfigLoader, GeminiGateway, JsonlGenerationLogger};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quandaryd", version, about = "Would-you-rather question generation server")]
struct Cli {
    /// Path to a config file (highest priority)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip config file discovery and use built-in defaults
    #[arg(long)]
    no_config: bool,

    /// Bind address, e.g. 127.0.0.1:8787
    #[arg(long)]
    bind: Option<String>,

    /// Generation mode: "structured" or "free_text"
    #[arg(long)]
    mode: Option<String>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting quandaryd");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("failed to load configuration: {}", e))?
    };

    let mode: GenerationMode = match &cli.mode {
        Some(mode) => mode.parse()?,
        None => config.generation.parse_mode()?,
    };

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::new(config.gemini.to_gemini_config()));
    let mut use_case =
        GenerateQuestionUseCase::new(gateway).with_policy(config.normalize.to_policy());

    if let Some(path) = &config.logging.generation_log_path
        && let Some(logger) = JsonlGenerationLogger::new(path)
    {
        info!("Writing generation log to {}", logger.path().display());
        use_case = use_case.with_logger(Arc::new(logger));
    }

    let bind = cli.bind.unwrap_or(config.server.bind);
    let state = server::AppState::new(use_case, mode);
    server::run(state, &bind).await
}

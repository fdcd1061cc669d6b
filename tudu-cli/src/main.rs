//! tudu - a terminal todo list

mod error;
mod tui;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tudu_config::Config;

#[derive(Parser, Debug)]
#[command(name = "tudu", version, about = "A terminal todo list")]
struct Args {
    /// Path to an alternate config file (default: ~/.tudu/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write logs to this file; without it logging is disabled
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter (tracing env-filter syntax); overridden by TUDU_LOG
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(&args)?;

    let config = match &args.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load_or_default().context("failed to load config")?,
    };

    let app = tui::App::new(config)?;
    tui::run(app)?;

    Ok(())
}

/// Set up file logging when requested.
///
/// The terminal itself belongs to the TUI, so logs never go to stdout.
fn init_logging(args: &Args) -> anyhow::Result<()> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create log directory {}", parent.display()))?;
    }
    let file = std::fs::File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let filter = tracing_subscriber::EnvFilter::try_from_env("TUDU_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

//! CLI entry point for taskboard.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt::format::FmtSpan};

mod config;
mod tui;

/// Terminal task list with a single-slot edit mode.
#[derive(Parser, Debug)]
#[command(name = "taskboard", version, about = "taskboard: a terminal task list")]
struct Cli {
    /// Configuration file (defaults to the platform config directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Append logs to this file; the TUI discards them otherwise.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug, Default, PartialEq, Eq)]
enum Command {
    /// Launch the interactive task board (default).
    #[default]
    Tui,

    /// Write a commented default configuration file.
    InitConfig {
        /// Destination (defaults to the platform config directory).
        #[arg(long)]
        output: Option<PathBuf>,
        /// Overwrite without asking.
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let Cli {
        config: config_path,
        log_file,
        cmd,
    } = Cli::parse();

    install_tracing(log_file.as_deref())?;

    match cmd.unwrap_or_default() {
        Command::Tui => {
            let config = config::load_config(config_path.as_deref())?;
            tui::run(&config.tui, log_file.is_none())
        }
        Command::InitConfig { output, force } => config::init_config(output.as_deref(), force),
    }
}

fn env_filter() -> EnvFilter {
    filter_from(&std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default())
}

/// `RUST_LOG`-style directives, falling back to `info` when none are given.
fn filter_from(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

fn install_tracing(log_file: Option<&Path>) -> Result<()> {
    if let Some(path) = log_file {
        let file = open_log_file(path)?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(env_filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_span_events(FmtSpan::NONE)
            .try_init();
        return Ok(());
    }

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_span_events(FmtSpan::NONE)
        .compact()
        .try_init();
    Ok(())
}

fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))
}

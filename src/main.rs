//! Strictly Triples - Unified CLI
//!
//! Interactive play in the terminal, or scripted replays for checking games.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{BoardArgs, Cli, Command, OutputFormat};
use serde::Serialize;
use std::path::{Path, PathBuf};
use strictly_triples::{
    GameConfig, GameState, GameStatus, ScriptReport, parse_script, run_script, tui,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

/// Log file used by `play` when none is configured.
const DEFAULT_LOG_FILE: &str = "strictly_triples.log";

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Play { board, log_file } => run_play(with_board(config, board), log_file),
        Command::Replay {
            script,
            board,
            format,
        } => run_replay(with_board(config, board), &script, format),
    }
}

/// Reads the config file if one was given, otherwise uses defaults.
fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    match path {
        Some(path) => Ok(GameConfig::from_file(path)?),
        None => Ok(GameConfig::default()),
    }
}

/// Applies command-line board size overrides.
fn with_board(config: GameConfig, board: BoardArgs) -> GameConfig {
    let config = match board.height {
        Some(height) => config.with_height(height),
        None => config,
    };
    match board.width {
        Some(width) => config.with_width(width),
        None => config,
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Run the interactive terminal game
fn run_play(config: GameConfig, log_file: Option<PathBuf>) -> Result<()> {
    // Log to file to avoid interfering with the TUI
    let log_path = log_file
        .or_else(|| config.log_file().clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    let log_file = std::fs::File::create(&log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log = %log_path.display(), "Starting Strictly Triples");
    tui::run(&config)
}

/// Everything `replay --format json` prints.
#[derive(Serialize)]
struct ReplayOutput<'a> {
    status: GameStatus,
    state: &'a GameState,
    report: &'a ScriptReport,
}

/// Run a move script and print the final position
#[instrument(skip(config))]
fn run_replay(config: GameConfig, script: &str, format: OutputFormat) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    let mut engine = config.engine().context("Invalid game settings")?;
    let steps = parse_script(script)?;
    debug!(steps = steps.len(), "Script parsed");

    let report = run_script(&mut engine, &steps);
    let status = engine.status();

    match format {
        OutputFormat::Text => {
            println!("{}", engine.current_board().display());
            println!("{}", status);
            println!(
                "History: {} boards, at move {}",
                engine.history_len(),
                engine.current_move()
            );
            for rejection in &report.rejected {
                println!("Rejected {}: {}", rejection.step, rejection.reason);
            }
        }
        OutputFormat::Json => {
            let output = ReplayOutput {
                status,
                state: engine.state(),
                report: &report,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    info!(
        applied = report.applied.len(),
        rejected = report.rejected.len(),
        "Replay finished"
    );
    Ok(())
}

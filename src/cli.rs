//! Command-line interface for strictly_triples.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Strictly Triples - three in a row on any board, for any number of players
#[derive(Parser, Debug)]
#[command(name = "strictly_triples")]
#[command(about = "Three-in-a-row on boards of any size", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game configuration
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Board size overrides shared by all commands.
#[derive(clap::Args, Debug, Clone, Copy, Default)]
pub struct BoardArgs {
    /// Number of rows (overrides the config file)
    #[arg(long)]
    pub height: Option<usize>,

    /// Number of squares per row (overrides the config file)
    #[arg(long)]
    pub width: Option<usize>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Board size
        #[command(flatten)]
        board: BoardArgs,

        /// Log file (the terminal is taken by the game)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Run a move script and print the result
    Replay {
        /// Steps separated by commas: a square index places a mark, @k jumps to move k
        #[arg(short, long)]
        script: String,

        /// Board size
        #[command(flatten)]
        board: BoardArgs,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How `replay` prints its result.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Board grid and status line
    Text,
    /// Full game state as JSON
    Json,
}

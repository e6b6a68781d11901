//! Command-line interface for tictaco.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tictaco::AgentKind;

/// TicTaco - terminal tic-tac-toe against a friend, Randy or TicTaco
#[derive(Parser, Debug)]
#[command(name = "tictaco")]
#[command(about = "Terminal tic-tac-toe with a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "tictaco.toml")]
    pub config: PathBuf,

    /// Write logs here instead of the configured file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Pit two CPU agents against each other without a UI
    Duel {
        /// Agent that moves first
        #[arg(long, value_enum, default_value_t = AgentKind::Minimax)]
        first: AgentKind,

        /// Agent that moves second
        #[arg(long, value_enum, default_value_t = AgentKind::Random)]
        second: AgentKind,

        /// Number of matches to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// RNG seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

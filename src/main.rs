//! TicTaco - unified CLI
//!
//! Runs the terminal UI, or headless CPU-vs-CPU duels.

#![warn(missing_docs)]

mod cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictaco::{AgentKind, GameConfig, Match, MatchOutcome, duel_seats};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }
    init_logging(&config)?;

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => tictaco::tui::run(config),
        Command::Duel {
            first,
            second,
            games,
            seed,
        } => run_duel(config.with_seed(seed), first, second, games),
    }
}

/// Sends logs to the configured file so the terminal stays with the UI.
fn init_logging(config: &GameConfig) -> Result<()> {
    let path = config.logging().file();
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging().filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't fail if already initialized

    info!(log_file = %path.display(), "Logging initialized");
    Ok(())
}

/// Plays `games` matches between two agents and prints the tally.
#[instrument(skip(config))]
fn run_duel(config: GameConfig, first: AgentKind, second: AgentKind, games: u32) -> Result<()> {
    let mut game = Match::new(duel_seats(first, second, *config.cpu().seed()))?;

    let mut wins = [0u32; 2];
    let mut draws = 0u32;
    for round in 0..games {
        if round > 0 {
            game.restart();
        }
        match game.run_to_end()? {
            MatchOutcome::Winner { seat, .. } => wins[seat] += 1,
            MatchOutcome::Draw => draws += 1,
        }
    }

    let [a, b] = game.seats();
    info!(games, ?wins, draws, "Duel finished");
    println!("{games} games");
    println!(
        "  {} {} ({first}): {} wins",
        a.player().name(),
        a.player().figure(),
        wins[0]
    );
    println!(
        "  {} {} ({second}): {} wins",
        b.player().name(),
        b.player().figure(),
        wins[1]
    );
    println!("  draws: {draws}");
    Ok(())
}

//! TicTaco - terminal tic-tac-toe with a minimax opponent.
//!
//! # Architecture
//!
//! - **Games**: the 3x3 board, win/draw rules, figures and players
//! - **Agents**: CPU policies behind one [`Agent`] trait (random, minimax)
//! - **Controller**: the turn controller ([`Match`]) and the program's phase
//!   machine ([`GamePhase`])
//! - **Tui**: ratatui screens driven by the phase machine
//!
//! # Example
//!
//! ```
//! use tictaco::{AgentKind, Figure, Match, MatchOutcome, Player, Seat};
//!
//! let mut game = Match::new([
//!     Seat::cpu(
//!         Player::cpu("TicTaco", Figure::new("🌮"), true),
//!         AgentKind::Minimax.build(Some(1)),
//!     ),
//!     Seat::cpu(
//!         Player::cpu("Mirror", Figure::new("X"), false),
//!         AgentKind::Minimax.build(Some(2)),
//!     ),
//! ])?;
//! assert_eq!(game.run_to_end()?, MatchOutcome::Draw);
//! # Ok::<(), tictaco::MatchError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod agents;
mod config;
mod controller;
mod games;
pub mod tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, BoardError, CELL_COUNT, Cell, Direction, FIGURE_CATALOG, Figure, Grid,
    Player, RANDY_FIGURE, TICTACO_FIGURE, cell_to_position, position_to_cell, rules,
};

// Crate-level exports - CPU agents
pub use agents::{Agent, AgentError, AgentKind, MinimaxAgent, RandomAgent};

// Crate-level exports - Match flow
pub use controller::invariants;
pub use controller::{
    GameMode, GamePhase, Match, MatchError, MatchOutcome, PhaseEvent, Seat, TurnOutcome,
    cpu_player, duel_seats,
};

// Crate-level exports - Configuration
pub use config::{ConfigError, CpuConfig, GameConfig, LoggingConfig, PlayerConfig};

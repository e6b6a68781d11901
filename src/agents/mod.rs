//! CPU opponents.
//!
//! Both policies share one capability: given a board and the two figures in
//! play, return a legal position. The policy for a seat is picked once, at
//! match start, from an [`AgentKind`] tag.

mod minimax;
mod random;

pub use minimax::MinimaxAgent;
pub use random::RandomAgent;

use derive_more::Display;
use strum::EnumIter;
use tracing::instrument;

use crate::games::tictactoe::{Board, Figure};

/// Errors raised by an agent asked to move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum AgentError {
    /// The board has no empty cell; the caller should never have asked.
    #[display("Agent asked to move on a board with no legal moves")]
    NoMovesAvailable,
}

impl std::error::Error for AgentError {}

/// A policy that picks moves for a CPU seat.
pub trait Agent: std::fmt::Debug {
    /// Picks a legal position (1-9) for `figure` to play against `opponent`.
    ///
    /// # Errors
    ///
    /// [`AgentError::NoMovesAvailable`] when the board is full.
    fn choose_move(
        &mut self,
        board: &Board,
        figure: &Figure,
        opponent: &Figure,
    ) -> Result<usize, AgentError>;

    /// Which policy this is.
    fn kind(&self) -> AgentKind;
}

/// Tag selecting an agent policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, clap::ValueEnum)]
pub enum AgentKind {
    /// Uniformly random legal moves.
    #[display("easy")]
    #[value(name = "easy")]
    Random,
    /// Full-depth minimax; never loses.
    #[display("hard")]
    #[value(name = "hard")]
    Minimax,
}

impl AgentKind {
    /// Builds the agent this tag names.
    ///
    /// A seed makes the random choices (including the minimax fallback)
    /// reproducible.
    #[instrument]
    pub fn build(self, seed: Option<u64>) -> Box<dyn Agent> {
        let random = match seed {
            Some(seed) => RandomAgent::seeded(seed),
            None => RandomAgent::new(),
        };
        match self {
            AgentKind::Random => Box::new(random),
            AgentKind::Minimax => Box::new(MinimaxAgent::with_fallback(random)),
        }
    }
}

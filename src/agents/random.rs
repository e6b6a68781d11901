//! Easy opponent: any legal move, uniformly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use super::{Agent, AgentError, AgentKind};
use crate::games::tictactoe::{Board, Figure};

/// Chooses any available move at random.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    /// Creates an agent seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an agent with a fixed seed, for reproducible play.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks a uniformly random empty position for `figure`.
    ///
    /// # Errors
    ///
    /// [`AgentError::NoMovesAvailable`] when the board is full.
    #[instrument(skip(self, board, figure), fields(figure = %figure))]
    pub fn choose_move(&mut self, board: &Board, figure: &Figure) -> Result<usize, AgentError> {
        let moves = board.available_moves();
        if moves.is_empty() {
            return Err(AgentError::NoMovesAvailable);
        }
        let pos = moves[self.rng.random_range(0..moves.len())];
        debug!(position = pos, "Random agent chose position");
        Ok(pos)
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn choose_move(
        &mut self,
        board: &Board,
        figure: &Figure,
        _opponent: &Figure,
    ) -> Result<usize, AgentError> {
        RandomAgent::choose_move(self, board, figure)
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Random
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_agents_agree() {
        let board = Board::new();
        let x = Figure::new("X");
        let mut a = RandomAgent::seeded(42);
        let mut b = RandomAgent::seeded(42);
        for _ in 0..20 {
            assert_eq!(a.choose_move(&board, &x), b.choose_move(&board, &x));
        }
    }

    #[test]
    fn test_full_board_is_an_error() {
        let mut board = Board::new();
        let x = Figure::new("X");
        for pos in 1..=9 {
            assert!(board.make_move(pos, &x));
        }
        assert_eq!(
            RandomAgent::seeded(0).choose_move(&board, &x),
            Err(AgentError::NoMovesAvailable)
        );
    }
}

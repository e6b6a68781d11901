//! Hard opponent: exhaustive minimax over the 3x3 game tree.
//!
//! The tree is at most nine plies deep, so there is no depth limit and no
//! evaluation heuristic. Terminal positions score +1 (own win), -1 (opponent
//! win) or 0 (draw). The search runs on a scratch clone of the live board,
//! placing a figure and undoing it for each branch.

use tracing::{debug, instrument, warn};

use super::{Agent, AgentError, AgentKind, RandomAgent};
use crate::games::tictactoe::{Board, Figure, rules};

/// Tic-tac-toe agent using full-depth minimax.
#[derive(Debug, Clone, Default)]
pub struct MinimaxAgent {
    fallback: RandomAgent,
}

impl MinimaxAgent {
    /// Creates an agent whose fallback draws from OS entropy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an agent with the given random fallback.
    pub fn with_fallback(fallback: RandomAgent) -> Self {
        Self { fallback }
    }

    /// Returns the position with the best worst-case outcome for `figure`.
    ///
    /// Moves are explored in ascending position order and only a strictly
    /// better score replaces the incumbent, so equal boards always get the
    /// same answer.
    ///
    /// # Errors
    ///
    /// [`AgentError::NoMovesAvailable`] when the board is full.
    #[instrument(skip(self, board, figure, opponent), fields(figure = %figure, opponent = %opponent))]
    pub fn choose_move(
        &mut self,
        board: &Board,
        figure: &Figure,
        opponent: &Figure,
    ) -> Result<usize, AgentError> {
        let mut scratch = board.clone();
        let mut search = Search::new(figure, opponent);

        let mut best: Option<(usize, i32)> = None;
        for pos in scratch.available_moves() {
            if scratch.try_move(pos, figure).is_err() {
                continue;
            }
            let score = search.minimax(&mut scratch, false);
            scratch.undo(pos);

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        match best {
            Some((pos, score)) => {
                debug!(position = pos, score, nodes = search.nodes, "Minimax chose position");
                Ok(pos)
            }
            None => {
                warn!("Minimax found no move, falling back to random choice");
                self.fallback.choose_move(board, figure)
            }
        }
    }
}

impl Agent for MinimaxAgent {
    fn choose_move(
        &mut self,
        board: &Board,
        figure: &Figure,
        opponent: &Figure,
    ) -> Result<usize, AgentError> {
        MinimaxAgent::choose_move(self, board, figure, opponent)
    }

    fn kind(&self) -> AgentKind {
        AgentKind::Minimax
    }
}

/// One search from the agent's point of view.
struct Search<'a> {
    figure: &'a Figure,
    opponent: &'a Figure,
    nodes: u64,
}

impl<'a> Search<'a> {
    fn new(figure: &'a Figure, opponent: &'a Figure) -> Self {
        Self {
            figure,
            opponent,
            nodes: 0,
        }
    }

    /// Scores `board` with `maximizing` telling whose figure moves next.
    fn minimax(&mut self, board: &mut Board, maximizing: bool) -> i32 {
        self.nodes += 1;

        if let Some(winner) = rules::check_winner(board.grid()) {
            if winner == self.figure {
                return 1;
            }
            if winner == self.opponent {
                return -1;
            }
        }
        if board.is_full() {
            return 0;
        }

        let mover = if maximizing { self.figure } else { self.opponent };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in board.available_moves() {
            if board.try_move(pos, mover).is_err() {
                continue;
            }
            let score = self.minimax(board, !maximizing);
            board.undo(pos);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}

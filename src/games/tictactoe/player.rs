//! Player identity and move history.

use derive_getters::Getters;
use tracing::instrument;

use super::types::Figure;

/// A tic-tac-toe player, human or CPU.
///
/// The move history is append-only until [`Player::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Player {
    /// Display name.
    name: String,
    /// Figure this player places.
    figure: Figure,
    /// Whether this player opens the match.
    goes_first: bool,
    /// Whether an agent moves for this player.
    is_cpu: bool,
    /// Positions played, in order.
    moves: Vec<usize>,
}

impl Player {
    /// Creates a human player.
    pub fn human(name: impl Into<String>, figure: Figure, goes_first: bool) -> Self {
        Self::new(name, figure, goes_first, false)
    }

    /// Creates a CPU-controlled player.
    pub fn cpu(name: impl Into<String>, figure: Figure, goes_first: bool) -> Self {
        Self::new(name, figure, goes_first, true)
    }

    fn new(name: impl Into<String>, figure: Figure, goes_first: bool, is_cpu: bool) -> Self {
        Self {
            name: name.into(),
            figure,
            goes_first,
            is_cpu,
            moves: Vec::new(),
        }
    }

    /// Appends an accepted position to the history.
    #[instrument(skip(self), fields(player = %self.name))]
    pub fn record_move(&mut self, pos: usize) {
        self.moves.push(pos);
    }

    /// Last position played, if any.
    pub fn last_move(&self) -> Option<usize> {
        self.moves.last().copied()
    }

    /// Moves this player can still make on an empty-started board.
    pub fn moves_left(&self) -> usize {
        let total: usize = if self.goes_first { 5 } else { 4 };
        total.saturating_sub(self.moves.len())
    }

    /// Clears the move history.
    pub fn reset(&mut self) {
        self.moves.clear();
    }
}

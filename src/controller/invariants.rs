//! Invariants that must hold for a match after every accepted move.
//!
//! They are checked in debug builds by [`Match::play`] and can be tested
//! independently.

use super::matchplay::Match;
use crate::games::tictactoe::{CELL_COUNT, Cell};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant in the set, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Seats alternate, starting with the first mover, and the seat to move
/// follows from the number of accepted moves.
pub struct AlternatingTurnInvariant;

impl Invariant<Match> for AlternatingTurnInvariant {
    fn holds(game: &Match) -> bool {
        let history = game.history();
        let first = game.first_mover();

        let alternates = history
            .iter()
            .enumerate()
            .all(|(i, (seat, _))| *seat == (first + i) % 2);
        if !alternates {
            return false;
        }

        // The winning move does not pass the turn.
        let expected = if game.is_over() {
            (first + history.len() + 1) % 2
        } else {
            (first + history.len()) % 2
        };
        game.turn() == expected
    }

    fn description() -> &'static str {
        "Seats alternate after every accepted move"
    }
}

/// Each player's own history is exactly their share of the match history,
/// and every recorded position holds that player's figure.
pub struct HistoryConsistentInvariant;

impl Invariant<Match> for HistoryConsistentInvariant {
    fn holds(game: &Match) -> bool {
        game.seats().iter().enumerate().all(|(index, seat)| {
            let player = seat.player();
            let expected: Vec<usize> = game
                .history()
                .iter()
                .filter(|(s, _)| *s == index)
                .map(|(_, pos)| *pos)
                .collect();
            *player.moves() == expected
                && expected
                    .iter()
                    .all(|&pos| game.board().cell(pos) == Some(&Cell::Taken(player.figure().clone())))
        })
    }

    fn description() -> &'static str {
        "Player histories match the board and the match history"
    }
}

/// Every occupied cell comes from exactly one accepted move.
pub struct OccupancyInvariant;

impl Invariant<Match> for OccupancyInvariant {
    fn holds(game: &Match) -> bool {
        game.board().available_moves().len() + game.history().len() == CELL_COUNT
    }

    fn description() -> &'static str {
        "Occupied cell count equals accepted move count"
    }
}

/// All match invariants as a composable set.
pub type MatchInvariants = (
    AlternatingTurnInvariant,
    HistoryConsistentInvariant,
    OccupancyInvariant,
);

//! Match flow: modes, the turn controller and the program's phase machine.

pub mod invariants;
mod matchplay;
mod mode;
mod phase;

pub use matchplay::{Match, MatchError, MatchOutcome, Seat, TurnOutcome};
pub use mode::{GameMode, cpu_player, duel_seats};
pub use phase::{GamePhase, PhaseEvent};

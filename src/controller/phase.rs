//! Top-level game phases and the events that move between them.

use derive_more::Display;
use tracing::{debug, instrument, warn};

use super::mode::GameMode;

/// Where the program currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum GamePhase {
    /// Main menu.
    #[default]
    #[display("menu")]
    InMenu,
    /// Picking who to play against.
    #[display("mode selection")]
    ModeSelection,
    /// A match is running.
    #[display("in game")]
    InGame,
    /// A match ended; its result is on screen.
    #[display("game over")]
    GameOver,
    /// The program is shutting down. Terminal.
    #[display("exited")]
    Exited,
}

/// Input that may move the program to another phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum PhaseEvent {
    /// "Start" picked from the main menu.
    #[display("start")]
    Start,
    /// A game mode was chosen.
    #[display("mode chosen: {_0}")]
    ModeChosen(GameMode),
    /// The running match produced a winner or a draw.
    #[display("match ended")]
    MatchEnded,
    /// The game-over screen was dismissed.
    #[display("acknowledge")]
    Acknowledge,
    /// Return to the main menu.
    #[display("back")]
    Back,
    /// Leave the program.
    #[display("quit")]
    Quit,
}

impl GamePhase {
    /// Applies `event` and returns the next phase.
    ///
    /// Events that mean nothing in the current phase leave it unchanged.
    #[instrument]
    pub fn on(self, event: PhaseEvent) -> GamePhase {
        use GamePhase::*;
        use PhaseEvent::*;

        let next = match (self, event) {
            (Exited, _) => Exited,
            (_, Quit) => Exited,
            (InMenu, Start) => ModeSelection,
            (ModeSelection, ModeChosen(_)) => InGame,
            (ModeSelection | InGame, Back) => InMenu,
            (InGame, MatchEnded) => GameOver,
            (GameOver, Acknowledge) => InMenu,
            (phase, event) => {
                warn!(%phase, %event, "Event ignored in this phase");
                phase
            }
        };
        if next != self {
            debug!(from = %self, to = %next, "Phase changed");
        }
        next
    }

    /// True once the program should stop.
    pub fn is_terminal(self) -> bool {
        self == GamePhase::Exited
    }
}

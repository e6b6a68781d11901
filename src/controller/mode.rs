//! Game modes and the seats each mode sets up.

use derive_more::Display;
use strum::EnumIter;
use tracing::{info, instrument};

use super::matchplay::Seat;
use crate::agents::AgentKind;
use crate::config::GameConfig;
use crate::games::tictactoe::{Figure, Player, RANDY_FIGURE, TICTACO_FIGURE};

/// Who the configured human plays against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum GameMode {
    /// Two humans sharing the keyboard.
    #[display("Player vs Player")]
    Pvp,
    /// Against the random agent.
    #[display("Player vs CPU (Easy)")]
    CpuEasy,
    /// Against the minimax agent.
    #[display("Player vs CPU (Hard)")]
    CpuHard,
}

impl GameMode {
    /// The agent policy for the opponent seat, if the opponent is a CPU.
    pub fn agent_kind(self) -> Option<AgentKind> {
        match self {
            GameMode::Pvp => None,
            GameMode::CpuEasy => Some(AgentKind::Random),
            GameMode::CpuHard => Some(AgentKind::Minimax),
        }
    }

    /// Builds both seats: the configured human first, then the opponent.
    #[instrument(skip(config))]
    pub fn seats(self, config: &GameConfig) -> [Seat; 2] {
        let human = Player::human(
            config.player().name().clone(),
            config.player().to_figure(),
            true,
        );
        let opponent = match self.agent_kind() {
            None => Seat::human(Player::human(
                config.second_player().name().clone(),
                config.second_player().to_figure(),
                false,
            )),
            Some(kind) => {
                let seed = *config.cpu().seed();
                Seat::cpu(cpu_player(kind, human.figure()), kind.build(seed))
            }
        };
        info!(
            opponent = %opponent.player().name(),
            figure = %opponent.player().figure(),
            "Seats ready"
        );
        [Seat::human(human), opponent]
    }
}

/// The named CPU player for a policy, kept clear of the human's figure.
#[instrument]
pub fn cpu_player(kind: AgentKind, human_figure: &Figure) -> Player {
    let (name, figure) = match kind {
        AgentKind::Random => ("Randy", RANDY_FIGURE),
        AgentKind::Minimax => ("TicTaco", TICTACO_FIGURE),
    };
    Player::cpu(name, Figure::distinct_from(figure, human_figure), false)
}

/// Seats two CPU policies against each other for a headless duel.
///
/// The first seat opens. When both seats run the same policy the second
/// player's name gets a " 2" suffix so results can be told apart.
#[instrument]
pub fn duel_seats(first: AgentKind, second: AgentKind, seed: Option<u64>) -> [Seat; 2] {
    let opener = cpu_player(first, &Figure::new(""));
    let mut responder = cpu_player(second, opener.figure());
    if first == second {
        responder = Player::cpu(
            format!("{} 2", responder.name()),
            responder.figure().clone(),
            false,
        );
    }
    [
        Seat::cpu(opener, first.build(seed)),
        Seat::cpu(responder, second.build(seed.map(|s| s.wrapping_add(1)))),
    ]
}

//! Turn controller for a single match.
//!
//! Two seats alternate strictly. Only accepted moves pass the turn; a
//! refused move leaves the same seat to move again. CPU seats get their move
//! from the seat's agent, synchronously.

use derive_more::Display;
use tracing::{debug, info, instrument, warn};

use super::invariants::{InvariantSet, InvariantViolation, MatchInvariants};
use super::mode::GameMode;
use crate::agents::{Agent, AgentError, AgentKind};
use crate::config::GameConfig;
use crate::games::tictactoe::{Board, BoardError, Direction, Figure, Player, rules};

/// A player plus the agent that moves for it, if it is a CPU.
#[derive(Debug)]
pub struct Seat {
    player: Player,
    agent: Option<Box<dyn Agent>>,
}

impl Seat {
    /// A seat driven by keyboard input.
    pub fn human(player: Player) -> Self {
        Self {
            player,
            agent: None,
        }
    }

    /// A seat driven by `agent`.
    pub fn cpu(player: Player, agent: Box<dyn Agent>) -> Self {
        Self {
            player,
            agent: Some(agent),
        }
    }

    /// The seated player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// The policy moving for this seat, if any.
    pub fn agent_kind(&self) -> Option<AgentKind> {
        self.agent.as_ref().map(|agent| agent.kind())
    }
}

/// How a finished match ended.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MatchOutcome {
    /// A seat completed a line.
    #[display("{name} ({figure}) wins")]
    Winner {
        /// Index of the winning seat.
        seat: usize,
        /// Winner's name.
        name: String,
        /// Winner's figure.
        figure: Figure,
    },
    /// Board filled with no line.
    #[display("Draw")]
    Draw,
}

/// Result of one move attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The board refused the move; the same seat moves again.
    Rejected(BoardError),
    /// Move accepted; the other seat is up.
    Continue,
    /// Move accepted and the match is over.
    Finished(MatchOutcome),
}

/// Errors that stop a match from proceeding.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum MatchError {
    /// A CPU player was seated without an agent.
    #[display("CPU player '{}' has no agent configured", _0)]
    AgentMissing(String),
    /// A human player was seated with an agent.
    #[display("Human player '{}' was given an agent", _0)]
    AgentMismatch(String),
    /// Both seats use the same figure.
    #[display("Both players use the figure '{}'", _0)]
    DuplicateFigure(Figure),
    /// A move was requested after the match ended.
    #[display("Match is already over")]
    MatchOver,
    /// A CPU move was requested for a human seat.
    #[display("It is {}'s turn, who is not a CPU", _0)]
    NotCpuTurn(String),
    /// An agent picked a position the board refused.
    #[display("Agent picked an illegal position: {}", _0)]
    IllegalAgentMove(BoardError),
    /// The agent failed to pick a move.
    #[display("Agent error: {}", _0)]
    Agent(AgentError),
}

impl std::error::Error for MatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MatchError::IllegalAgentMove(e) => Some(e),
            MatchError::Agent(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AgentError> for MatchError {
    fn from(err: AgentError) -> Self {
        MatchError::Agent(err)
    }
}

/// One match between two seats on one board.
#[derive(Debug)]
pub struct Match {
    board: Board,
    seats: [Seat; 2],
    first: usize,
    turn: usize,
    history: Vec<(usize, usize)>,
    outcome: Option<MatchOutcome>,
}

impl Match {
    /// Seats two players for a fresh match.
    ///
    /// The seat whose player goes first opens; if neither does, seat 0 opens.
    ///
    /// # Errors
    ///
    /// [`MatchError::AgentMissing`] / [`MatchError::AgentMismatch`] when a
    /// seat's agent does not fit its CPU flag, [`MatchError::DuplicateFigure`]
    /// when both players share a figure.
    #[instrument(skip(seats), fields(
        first = %seats[0].player.name(),
        second = %seats[1].player.name()
    ))]
    pub fn new(mut seats: [Seat; 2]) -> Result<Self, MatchError> {
        for seat in &seats {
            let name = seat.player.name().clone();
            match (*seat.player.is_cpu(), seat.agent.is_some()) {
                (true, false) => return Err(MatchError::AgentMissing(name)),
                (false, true) => return Err(MatchError::AgentMismatch(name)),
                _ => {}
            }
        }
        if seats[0].player.figure() == seats[1].player.figure() {
            return Err(MatchError::DuplicateFigure(seats[0].player.figure().clone()));
        }

        for seat in &mut seats {
            seat.player.reset();
        }
        let first = seats
            .iter()
            .position(|seat| *seat.player.goes_first())
            .unwrap_or(0);

        info!(first_mover = %seats[first].player.name(), "Match started");
        Ok(Self {
            board: Board::new(),
            seats,
            first,
            turn: first,
            history: Vec::new(),
            outcome: None,
        })
    }

    /// Sets up a match for one of the interactive modes.
    #[instrument(skip(config))]
    pub fn for_mode(mode: GameMode, config: &GameConfig) -> Result<Self, MatchError> {
        Self::new(mode.seats(config))
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both seats, in seating order.
    pub fn seats(&self) -> &[Seat; 2] {
        &self.seats
    }

    /// Index of the seat that opened the match.
    pub fn first_mover(&self) -> usize {
        self.first
    }

    /// Index of the seat to move.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// The player to move.
    pub fn current(&self) -> &Player {
        &self.seats[self.turn].player
    }

    /// The player waiting.
    pub fn opponent(&self) -> &Player {
        &self.seats[1 - self.turn].player
    }

    /// True when the seat to move is driven by an agent.
    pub fn is_cpu_turn(&self) -> bool {
        !self.is_over() && self.seats[self.turn].agent.is_some()
    }

    /// Accepted moves as `(seat, position)`, oldest first.
    pub fn history(&self) -> &[(usize, usize)] {
        &self.history
    }

    /// How the match ended, once it has.
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    /// True once a seat has won or the board is full.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Moves the board cursor.
    pub fn move_cursor(&mut self, direction: Direction) {
        self.board.move_cursor(direction);
    }

    /// Plays `pos` for the seat to move.
    ///
    /// A refused position is not an error: it comes back as
    /// [`TurnOutcome::Rejected`] and the turn does not pass.
    ///
    /// # Errors
    ///
    /// [`MatchError::MatchOver`] once the match has ended.
    #[instrument(skip(self), fields(player = %self.current().name()))]
    pub fn play(&mut self, pos: usize) -> Result<TurnOutcome, MatchError> {
        if self.is_over() {
            return Err(MatchError::MatchOver);
        }

        let figure = self.current().figure().clone();
        if let Err(e) = self.board.try_move(pos, &figure) {
            debug!(error = %e, "Move rejected, turn unchanged");
            return Ok(TurnOutcome::Rejected(e));
        }

        self.seats[self.turn].player.record_move(pos);
        self.history.push((self.turn, pos));

        let outcome = if self.board.check_winner().as_ref() == Some(&figure) {
            Some(MatchOutcome::Winner {
                seat: self.turn,
                name: self.current().name().clone(),
                figure,
            })
        } else if rules::is_draw(self.board.grid()) {
            Some(MatchOutcome::Draw)
        } else {
            None
        };

        let result = match outcome {
            Some(outcome) => {
                info!(outcome = %outcome, moves = self.history.len(), "Match finished");
                self.outcome = Some(outcome.clone());
                TurnOutcome::Finished(outcome)
            }
            None => {
                self.turn = 1 - self.turn;
                TurnOutcome::Continue
            }
        };

        debug_assert!(
            self.check_invariants().is_ok(),
            "match invariants violated: {:?}",
            self.check_invariants()
        );
        Ok(result)
    }

    /// Plays the position under the board cursor.
    pub fn play_cursor(&mut self) -> Result<TurnOutcome, MatchError> {
        let pos = self.board.cursor_position();
        self.play(pos)
    }

    /// Asks the seat's agent for a move and plays it.
    ///
    /// # Errors
    ///
    /// [`MatchError::NotCpuTurn`] for a human seat, [`MatchError::Agent`] if
    /// the agent fails, [`MatchError::IllegalAgentMove`] if the board refuses
    /// the agent's choice, [`MatchError::MatchOver`] after the end.
    #[instrument(skip(self), fields(player = %self.current().name()))]
    pub fn play_cpu_turn(&mut self) -> Result<TurnOutcome, MatchError> {
        if self.is_over() {
            return Err(MatchError::MatchOver);
        }

        let opponent = self.opponent().figure().clone();
        let seat = &mut self.seats[self.turn];
        let agent = seat
            .agent
            .as_mut()
            .ok_or_else(|| MatchError::NotCpuTurn(seat.player.name().clone()))?;
        let pos = agent.choose_move(&self.board, seat.player.figure(), &opponent)?;

        match self.play(pos)? {
            TurnOutcome::Rejected(e) => {
                warn!(error = %e, "Agent chose an illegal move");
                Err(MatchError::IllegalAgentMove(e))
            }
            accepted => Ok(accepted),
        }
    }

    /// Plays CPU turns until the match ends.
    ///
    /// # Errors
    ///
    /// Stops with [`MatchError::NotCpuTurn`] if a human seat comes up.
    #[instrument(skip(self))]
    pub fn run_to_end(&mut self) -> Result<MatchOutcome, MatchError> {
        loop {
            if let Some(outcome) = &self.outcome {
                return Ok(outcome.clone());
            }
            self.play_cpu_turn()?;
        }
    }

    /// Clears the board and histories for a rematch with the same seats.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.board.reset();
        for seat in &mut self.seats {
            seat.player.reset();
        }
        self.turn = self.first;
        self.history.clear();
        self.outcome = None;
    }

    /// Checks turn alternation and history bookkeeping.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        MatchInvariants::check_all(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agents::RandomAgent;
    use crate::controller::invariants::{Invariant, OccupancyInvariant};

    fn pvp() -> Match {
        Match::new([
            Seat::human(Player::human("Ada", Figure::new("X"), true)),
            Seat::human(Player::human("Bob", Figure::new("O"), false)),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut game = pvp();
        assert_eq!(game.play(5), Ok(TurnOutcome::Continue));
        assert_eq!(game.current().name(), "Bob");
        assert_eq!(game.play(5), Ok(TurnOutcome::Rejected(BoardError::Occupied(5))));
        assert_eq!(game.play(0), Ok(TurnOutcome::Rejected(BoardError::InvalidPosition(0))));
        assert_eq!(game.current().name(), "Bob");
        assert!(game.check_invariants().is_ok());
    }

    #[test]
    fn test_invariants_catch_corrupted_board() {
        let mut game = pvp();
        game.play(1).unwrap();
        assert!(game.board.make_move(9, &Figure::new("O")));
        let violations = game.check_invariants().unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            <OccupancyInvariant as Invariant<Match>>::description()
        );
    }

    #[test]
    fn test_last_cell_winning_move_is_a_win() {
        let mut game = pvp();
        for pos in [1, 2, 3, 5, 6, 4, 8, 7] {
            assert_eq!(game.play(pos), Ok(TurnOutcome::Continue));
        }
        let outcome = game.play(9).unwrap();
        assert!(game.board().is_full());
        assert_eq!(
            outcome,
            TurnOutcome::Finished(MatchOutcome::Winner {
                seat: 0,
                name: "Ada".to_string(),
                figure: Figure::new("X"),
            })
        );
    }

    #[test]
    fn test_cpu_turn_requires_cpu_seat() {
        let mut game = pvp();
        assert_eq!(game.play_cpu_turn(), Err(MatchError::NotCpuTurn("Ada".to_string())));
    }

    #[test]
    fn test_restart_clears_everything() {
        let mut game = Match::new([
            Seat::cpu(
                Player::cpu("A", Figure::new("X"), true),
                Box::new(RandomAgent::seeded(5)),
            ),
            Seat::cpu(
                Player::cpu("B", Figure::new("O"), false),
                Box::new(RandomAgent::seeded(6)),
            ),
        ])
        .unwrap();
        game.run_to_end().unwrap();
        assert!(game.is_over());

        game.restart();
        assert!(!game.is_over());
        assert!(game.history().is_empty());
        assert_eq!(game.board().available_moves().len(), 9);
        assert_eq!(game.turn(), game.first_mover());
        assert!(game.seats().iter().all(|s| s.player().moves().is_empty()));
    }
}

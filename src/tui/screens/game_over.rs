//! Result of a finished match.

use crossterm::event::KeyEvent;
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::instrument;

use crate::controller::{MatchOutcome, PhaseEvent};
use crate::games::tictactoe::Board;
use crate::tui::board_view::render_board;
use crate::tui::keymap::KeyAction;
use crate::tui::screen::{Screen, ScreenTransition};

/// Text for a finished match, from the point of view of the seat at
/// `human_seat`.
pub fn outcome_message(outcome: &MatchOutcome, human_seat: usize) -> String {
    match outcome {
        MatchOutcome::Winner { seat, .. } if *seat == human_seat => "You win!".to_string(),
        MatchOutcome::Winner { name, .. } => format!("{name} wins! Game over."),
        MatchOutcome::Draw => "It's a draw!".to_string(),
    }
}

/// State for the game over screen.
#[derive(Debug, Getters)]
pub struct GameOverScreen {
    message: String,
    board: Board,
}

impl GameOverScreen {
    /// Shows `message` above the final board.
    #[instrument(skip(board))]
    pub fn new(message: String, board: Board) -> Self {
        Self { message, board }
    }
}

impl Screen for GameOverScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let message = Paragraph::new(self.message.as_str())
            .style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(message, chunks[0]);

        render_board(frame, chunks[1], &self.board, false);

        let help = Paragraph::new("Press any key to return to the menu... (q to quit)")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match KeyAction::from(key.code) {
            KeyAction::Quit => ScreenTransition::Phase(PhaseEvent::Quit),
            _ => ScreenTransition::Phase(PhaseEvent::Acknowledge),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Figure;
    use crossterm::event::KeyCode;

    #[test]
    fn test_messages() {
        let won = MatchOutcome::Winner {
            seat: 0,
            name: "Player 1".to_string(),
            figure: Figure::new("X"),
        };
        let lost = MatchOutcome::Winner {
            seat: 1,
            name: "TicTaco".to_string(),
            figure: Figure::new("🌮"),
        };
        assert_eq!(outcome_message(&won, 0), "You win!");
        assert_eq!(outcome_message(&lost, 0), "TicTaco wins! Game over.");
        assert_eq!(outcome_message(&MatchOutcome::Draw, 0), "It's a draw!");
    }

    #[test]
    fn test_any_key_acknowledges() {
        let mut screen = GameOverScreen::new("It's a draw!".to_string(), Board::new());
        assert_eq!(
            screen.handle_key(KeyEvent::from(KeyCode::Char('x'))),
            ScreenTransition::Phase(PhaseEvent::Acknowledge)
        );
        assert_eq!(
            screen.handle_key(KeyEvent::from(KeyCode::Char('Q'))),
            ScreenTransition::Phase(PhaseEvent::Quit)
        );
    }
}

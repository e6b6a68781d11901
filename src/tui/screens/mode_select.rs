//! Mode selection: who the player faces.

use crossterm::event::KeyEvent;
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tracing::{info, instrument};

use crate::controller::{GameMode, PhaseEvent};
use crate::games::tictactoe::Direction as CursorDirection;
use crate::tui::keymap::KeyAction;
use crate::tui::screen::{Screen, ScreenTransition};

/// State for the mode selection screen.
#[derive(Debug, Getters)]
pub struct ModeSelectScreen {
    modes: Vec<GameMode>,
    list_state: ListState,
}

impl ModeSelectScreen {
    /// Creates the screen with the first mode highlighted.
    #[instrument]
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            modes: GameMode::iter().collect(),
            list_state,
        }
    }

    fn step(&mut self, forward: bool) {
        let count = self.modes.len();
        let i = self.list_state.selected().unwrap_or(0);
        let next = if forward {
            (i + 1) % count
        } else {
            (i + count - 1) % count
        };
        self.list_state.select(Some(next));
    }

    /// The highlighted mode.
    pub fn selected_mode(&self) -> GameMode {
        self.list_state
            .selected()
            .and_then(|i| self.modes.get(i).copied())
            .unwrap_or(GameMode::Pvp)
    }
}

impl Default for ModeSelectScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for ModeSelectScreen {
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

        let title = Paragraph::new("Select Game Mode")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = self
            .modes
            .iter()
            .map(|mode| ListItem::new(mode.to_string()))
            .collect();
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Modes"))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut list_state = self.list_state;
        frame.render_stateful_widget(list, chunks[1], &mut list_state);

        let help = Paragraph::new("↑↓/ws: Select | Enter: Play | Esc/r: Back | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match KeyAction::from(key.code) {
            KeyAction::Move(CursorDirection::Up) => {
                self.step(false);
                ScreenTransition::Stay
            }
            KeyAction::Move(CursorDirection::Down) => {
                self.step(true);
                ScreenTransition::Stay
            }
            KeyAction::Confirm => {
                let mode = self.selected_mode();
                info!(%mode, "Game mode chosen");
                ScreenTransition::Phase(PhaseEvent::ModeChosen(mode))
            }
            KeyAction::Back => ScreenTransition::Phase(PhaseEvent::Back),
            KeyAction::Quit => ScreenTransition::Phase(PhaseEvent::Quit),
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyCode;

    #[test]
    fn test_navigation_wraps() {
        let mut screen = ModeSelectScreen::new();
        assert_eq!(screen.selected_mode(), GameMode::Pvp);
        screen.handle_key(KeyEvent::from(KeyCode::Char('w')));
        assert_eq!(screen.selected_mode(), GameMode::CpuHard);
        screen.handle_key(KeyEvent::from(KeyCode::Down));
        screen.handle_key(KeyEvent::from(KeyCode::Down));
        assert_eq!(screen.selected_mode(), GameMode::CpuEasy);
        assert_eq!(
            screen.handle_key(KeyEvent::from(KeyCode::Enter)),
            ScreenTransition::Phase(PhaseEvent::ModeChosen(GameMode::CpuEasy))
        );
    }

    #[test]
    fn test_back_and_quit() {
        let mut screen = ModeSelectScreen::new();
        assert_eq!(
            screen.handle_key(KeyEvent::from(KeyCode::Esc)),
            ScreenTransition::Phase(PhaseEvent::Back)
        );
        assert_eq!(
            screen.handle_key(KeyEvent::from(KeyCode::Char('q'))),
            ScreenTransition::Phase(PhaseEvent::Quit)
        );
    }
}

//! Main menu: start a game or leave.

use crossterm::event::KeyEvent;
use derive_getters::Getters;
use derive_more::Display;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::{EnumCount, EnumIter, IntoEnumIterator};
use tracing::{info, instrument};

use crate::controller::PhaseEvent;
use crate::games::tictactoe::{Direction as CursorDirection, Figure};
use crate::tui::keymap::KeyAction;
use crate::tui::screen::{Screen, ScreenTransition};

/// Entries on the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumCount)]
enum MenuOption {
    Start,
    Exit,
}

/// State for the main menu.
#[derive(Debug, Getters)]
pub struct MainMenuScreen {
    figure: Figure,
    list_state: ListState,
}

impl MainMenuScreen {
    /// Creates the menu, showing the configured player's figure.
    #[instrument]
    pub fn new(figure: Figure) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self { figure, list_state }
    }

    fn select_previous(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => MenuOption::COUNT - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % MenuOption::COUNT,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_option(&self) -> MenuOption {
        let idx = self.list_state.selected().unwrap_or(0);
        MenuOption::iter().nth(idx).unwrap_or(MenuOption::Start)
    }
}

impl Screen for MainMenuScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(frame.area());

        let title = Paragraph::new("TicTaco - Tic-Tac-Toe")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        let items: Vec<ListItem> = MenuOption::iter()
            .map(|option| ListItem::new(option.to_string()))
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Menu"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");
        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, chunks[1], &mut list_state);

        let figure = Paragraph::new(format!("Current player figure: {}", self.figure))
            .style(Style::default().fg(Color::Green))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(figure, chunks[2]);

        let help = Paragraph::new("↑↓/ws: Navigate | Enter: Select | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[3]);
    }

    #[instrument(skip(self, key))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match KeyAction::from(key.code) {
            KeyAction::Move(CursorDirection::Up) => {
                self.select_previous();
                ScreenTransition::Stay
            }
            KeyAction::Move(CursorDirection::Down) => {
                self.select_next();
                ScreenTransition::Stay
            }
            KeyAction::Confirm => {
                let option = self.selected_option();
                info!(%option, "Menu option selected");
                match option {
                    MenuOption::Start => ScreenTransition::Phase(PhaseEvent::Start),
                    MenuOption::Exit => ScreenTransition::Phase(PhaseEvent::Quit),
                }
            }
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
    fn test_enter_on_start() {
        let mut screen = MainMenuScreen::new(Figure::new("X"));
        assert_eq!(
            screen.handle_key(KeyEvent::from(KeyCode::Enter)),
            ScreenTransition::Phase(PhaseEvent::Start)
        );
    }

    #[test]
    fn test_selection_wraps_to_exit() {
        let mut screen = MainMenuScreen::new(Figure::new("X"));
        assert_eq!(
            screen.handle_key(KeyEvent::from(KeyCode::Up)),
            ScreenTransition::Stay
        );
        assert_eq!(
            screen.handle_key(KeyEvent::from(KeyCode::Char(' '))),
            ScreenTransition::Phase(PhaseEvent::Quit)
        );
    }
}

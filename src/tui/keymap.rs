//! Key bindings shared by every screen.

use crossterm::event::KeyCode;

use crate::games::tictactoe::Direction;

/// What a key press means, independent of the screen it lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Enter or Space.
    Confirm,
    /// Arrow keys or WASD.
    Move(Direction),
    /// Esc or `r`.
    Back,
    /// `q`.
    Quit,
    /// A typed board position, 1-9.
    Digit(usize),
    /// Anything else.
    Other,
}

impl From<KeyCode> for KeyAction {
    fn from(code: KeyCode) -> Self {
        match code {
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Confirm,
            KeyCode::Up | KeyCode::Char('w' | 'W') => KeyAction::Move(Direction::Up),
            KeyCode::Down | KeyCode::Char('s' | 'S') => KeyAction::Move(Direction::Down),
            KeyCode::Left | KeyCode::Char('a' | 'A') => KeyAction::Move(Direction::Left),
            KeyCode::Right | KeyCode::Char('d' | 'D') => KeyAction::Move(Direction::Right),
            KeyCode::Esc | KeyCode::Char('r' | 'R') => KeyAction::Back,
            KeyCode::Char('q' | 'Q') => KeyAction::Quit,
            KeyCode::Char(c @ '1'..='9') => c
                .to_digit(10)
                .map_or(KeyAction::Other, |d| KeyAction::Digit(d as usize)),
            _ => KeyAction::Other,
        }
    }
}

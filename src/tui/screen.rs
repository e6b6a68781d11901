//! Screen trait and transition type for the phase-driven UI.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::controller::PhaseEvent;

/// The result of handling input (or a tick) on a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Feed an event to the phase machine.
    Phase(PhaseEvent),
}

/// Trait implemented by each screen.
///
/// Each screen owns its own state, renders its UI, and handles key events.
/// The [`App`](super::App) calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;

    /// Advances work that needs no input, such as a CPU move.
    fn tick(&mut self) -> ScreenTransition {
        ScreenTransition::Stay
    }
}

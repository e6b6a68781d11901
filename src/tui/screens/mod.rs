//! Screen implementations, one per interactive phase.

mod game_over;
mod in_game;
mod main_menu;
mod mode_select;

pub use game_over::{GameOverScreen, outcome_message};
pub use in_game::{INVALID_MOVE_NOTICE, InGameScreen, MOVE_PROMPT};
pub use main_menu::MainMenuScreen;
pub use mode_select::ModeSelectScreen;

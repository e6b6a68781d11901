//! Game rules for tic-tac-toe.
//!
//! Pure functions over a grid. Rules are kept apart from board storage so
//! the search and the board share one definition of a finished game.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner};

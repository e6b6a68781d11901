//! Tic-tac-toe game state: board, rules, figures and players.

pub mod board;
pub mod player;
pub mod rules;
pub mod types;

pub use board::{BOARD_SIZE, Board, BoardError, CELL_COUNT, Grid, cell_to_position, position_to_cell};
pub use player::Player;
pub use types::{Cell, Direction, FIGURE_CATALOG, Figure, RANDY_FIGURE, TICTACO_FIGURE};

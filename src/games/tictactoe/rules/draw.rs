//! Draw detection logic for tic-tac-toe.

use super::super::board::Grid;
use super::win::check_winner;

/// Checks if every cell of the grid is occupied.
pub fn is_full(grid: &Grid) -> bool {
    grid.iter().flatten().all(|cell| !cell.is_empty())
}

/// A full grid with no completed line.
pub fn is_draw(grid: &Grid) -> bool {
    is_full(grid) && check_winner(grid).is_none()
}

//! Win detection logic for tic-tac-toe.

use super::super::board::Grid;
use super::super::types::{Cell, Figure};

/// Every winning line as `(row, col)` triplets.
///
/// Order matters: rows, then columns, then the main diagonal, then the
/// anti-diagonal. The first complete line found is reported.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks if there is a winner on the grid.
///
/// Returns the figure that fills a whole line, or `None`.
pub fn check_winner(grid: &Grid) -> Option<&Figure> {
    for [a, b, c] in LINES {
        let first = &grid[a.0][a.1];
        if let Cell::Taken(figure) = first
            && first == &grid[b.0][b.1]
            && first == &grid[c.0][c.1]
        {
            return Some(figure);
        }
    }

    None
}

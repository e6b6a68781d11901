//! The 3x3 board: grid state, move validation and cursor bookkeeping.

use derive_more::Display;
use tracing::{debug, instrument};

use super::rules;
use super::types::{Cell, Direction, Figure};

/// Side length of the board. Only 3 is supported.
pub const BOARD_SIZE: usize = 3;

/// Number of addressable positions (1..=9).
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Raw grid storage, indexed `[row][col]`.
pub type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Reasons a move can be refused by the board.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardError {
    /// The position does not map to any cell.
    #[display("Position {_0} is not on the board (expected 1-9)")]
    InvalidPosition(usize),
    /// The position maps to a cell that is already taken.
    #[display("Position {_0} is already occupied")]
    Occupied(usize),
    /// Boards other than 3x3 are not supported.
    #[display("Only 3x3 boards are supported, got {_0}x{_0}")]
    UnsupportedSize(usize),
}

impl std::error::Error for BoardError {}

/// Maps a position (1-9, row-major) to its `(row, col)` pair.
pub fn position_to_cell(pos: usize) -> Option<(usize, usize)> {
    if (1..=CELL_COUNT).contains(&pos) {
        let index = pos - 1;
        Some((index / BOARD_SIZE, index % BOARD_SIZE))
    } else {
        None
    }
}

/// Maps a `(row, col)` pair back to its position (1-9).
pub fn cell_to_position(row: usize, col: usize) -> usize {
    1 + row * BOARD_SIZE + col
}

/// Tic-tac-toe board model.
///
/// Keeps the grid and a UI cursor. Cloning copies the grid and cursor;
/// the copy is fully independent of the original.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    grid: Grid,
    cursor: (usize, usize),
}

impl Board {
    /// Creates an empty 3x3 board with the cursor at the top-left cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board of the given side length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::UnsupportedSize`] for anything but 3.
    #[instrument]
    pub fn with_size(size: usize) -> Result<Self, BoardError> {
        if size != BOARD_SIZE {
            return Err(BoardError::UnsupportedSize(size));
        }
        Ok(Self::new())
    }

    /// Returns the grid, row by row.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the cell at a position, or `None` if the position is off the board.
    pub fn cell(&self, pos: usize) -> Option<&Cell> {
        position_to_cell(pos).map(|(row, col)| &self.grid[row][col])
    }

    /// Returns true iff `pos` maps to a cell and that cell is empty.
    pub fn is_valid_move(&self, pos: usize) -> bool {
        self.cell(pos).is_some_and(Cell::is_empty)
    }

    /// Places `figure` at `pos`, reporting why a refused move was refused.
    ///
    /// # Errors
    ///
    /// [`BoardError::InvalidPosition`] if `pos` is outside 1-9,
    /// [`BoardError::Occupied`] if the cell is taken. The board is unchanged
    /// in both cases.
    pub fn try_move(&mut self, pos: usize, figure: &Figure) -> Result<(), BoardError> {
        let (row, col) = position_to_cell(pos).ok_or(BoardError::InvalidPosition(pos))?;
        let cell = &mut self.grid[row][col];
        if !cell.is_empty() {
            return Err(BoardError::Occupied(pos));
        }
        *cell = Cell::Taken(figure.clone());
        Ok(())
    }

    /// Attempts to place `figure` at `pos`.
    ///
    /// Returns true on success, false if the position is off the board or
    /// taken. Failure never changes the board.
    #[instrument(skip(self, figure), fields(figure = %figure))]
    pub fn make_move(&mut self, pos: usize, figure: &Figure) -> bool {
        match self.try_move(pos, figure) {
            Ok(()) => true,
            Err(e) => {
                debug!(error = %e, "Move refused");
                false
            }
        }
    }

    /// Clears a cell set during search. Only the search calls this.
    pub(crate) fn undo(&mut self, pos: usize) {
        if let Some((row, col)) = position_to_cell(pos) {
            self.grid[row][col] = Cell::Empty;
        }
    }

    /// All empty positions, ascending.
    pub fn available_moves(&self) -> Vec<usize> {
        (1..=CELL_COUNT)
            .filter(|&pos| self.is_valid_move(pos))
            .collect()
    }

    /// Returns the figure completing a line, if any.
    pub fn check_winner(&self) -> Option<Figure> {
        rules::check_winner(&self.grid).cloned()
    }

    /// True when no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(&self.grid)
    }

    /// Clears every cell and puts the cursor back at the top-left.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.grid = Grid::default();
        self.cursor = (0, 0);
    }

    /// Moves the cursor one cell, wrapping around the edges.
    pub fn move_cursor(&mut self, direction: Direction) {
        let (row, col) = self.cursor;
        self.cursor = match direction {
            Direction::Up => ((row + BOARD_SIZE - 1) % BOARD_SIZE, col),
            Direction::Down => ((row + 1) % BOARD_SIZE, col),
            Direction::Left => (row, (col + BOARD_SIZE - 1) % BOARD_SIZE),
            Direction::Right => (row, (col + 1) % BOARD_SIZE),
        };
    }

    /// Returns the cursor as `(row, col)`.
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Returns the position (1-9) under the cursor.
    pub fn cursor_position(&self) -> usize {
        cell_to_position(self.cursor.0, self.cursor.1)
    }

    /// Places `figure` under the cursor. Same contract as [`Board::make_move`].
    pub fn apply_cursor_move(&mut self, figure: &Figure) -> bool {
        self.make_move(self.cursor_position(), figure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_mapping_is_row_major() {
        assert_eq!(position_to_cell(1), Some((0, 0)));
        assert_eq!(position_to_cell(3), Some((0, 2)));
        assert_eq!(position_to_cell(4), Some((1, 0)));
        assert_eq!(position_to_cell(9), Some((2, 2)));
        assert_eq!(position_to_cell(0), None);
        assert_eq!(position_to_cell(10), None);
        for pos in 1..=CELL_COUNT {
            let (row, col) = position_to_cell(pos).unwrap();
            assert_eq!(cell_to_position(row, col), pos);
        }
    }

    #[test]
    fn test_try_move_distinguishes_errors() {
        let mut board = Board::new();
        let x = Figure::new("X");
        assert_eq!(board.try_move(0, &x), Err(BoardError::InvalidPosition(0)));
        assert_eq!(board.try_move(5, &x), Ok(()));
        assert_eq!(board.try_move(5, &x), Err(BoardError::Occupied(5)));
    }

    #[test]
    fn test_undo_restores_cell() {
        let mut board = Board::new();
        let before = board.clone();
        assert!(board.make_move(7, &Figure::new("O")));
        board.undo(7);
        assert_eq!(board, before);
    }

    #[test]
    fn test_cursor_wraps_in_every_direction() {
        let mut board = Board::new();
        board.move_cursor(Direction::Up);
        assert_eq!(board.cursor(), (2, 0));
        board.move_cursor(Direction::Left);
        assert_eq!(board.cursor(), (2, 2));
        board.move_cursor(Direction::Down);
        assert_eq!(board.cursor(), (0, 2));
        board.move_cursor(Direction::Right);
        assert_eq!(board.cursor(), (0, 0));
    }

    #[test]
    fn test_reset_moves_cursor_home() {
        let mut board = Board::new();
        board.move_cursor(Direction::Down);
        assert!(board.apply_cursor_move(&Figure::new("X")));
        board.reset();
        assert_eq!(board.cursor(), (0, 0));
        assert_eq!(board.available_moves().len(), CELL_COUNT);
    }
}

//! Stateless board rendering.
//!
//! Cells are padded to the display width of the widest figure on the board so
//! that emoji and ASCII figures line up in the same grid.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use unicode_width::UnicodeWidthStr;

use crate::games::tictactoe::{BOARD_SIZE, Board, Cell};

/// Narrowest a cell may be, in terminal columns.
const MIN_CELL_WIDTH: usize = 3;

/// Width of one cell: the widest figure plus a space on each side.
pub fn cell_width(board: &Board) -> usize {
    let widest = board
        .grid()
        .iter()
        .flatten()
        .filter_map(Cell::figure)
        .map(|figure| figure.as_str().width())
        .max()
        .unwrap_or(1);
    MIN_CELL_WIDTH.max(widest + 2)
}

/// Pads `text` with trailing spaces to `width` display columns.
fn pad_to_width(text: &str, width: usize) -> String {
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(text.width())));
    padded
}

/// Builds the board as styled lines: three rows with rules in between.
pub fn board_lines(board: &Board, show_cursor: bool) -> Vec<Line<'static>> {
    let width = cell_width(board);
    let rule = vec!["─".repeat(width); BOARD_SIZE].join("┼");
    let divider = Style::default().fg(Color::DarkGray);

    let mut lines = Vec::with_capacity(BOARD_SIZE * 2 - 1);
    for (row, cells) in board.grid().iter().enumerate() {
        let mut spans = Vec::with_capacity(BOARD_SIZE * 2 - 1);
        for (col, cell) in cells.iter().enumerate() {
            let symbol = cell.figure().map_or(" ", |figure| figure.as_str());
            let text = pad_to_width(&format!(" {symbol} "), width);

            let mut style = Style::default().add_modifier(Modifier::BOLD);
            if show_cursor && board.cursor() == (row, col) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(text, style));
            if col + 1 < BOARD_SIZE {
                spans.push(Span::styled("│", divider));
            }
        }
        lines.push(Line::from(spans));
        if row + 1 < BOARD_SIZE {
            lines.push(Line::styled(rule.clone(), divider));
        }
    }
    lines
}

/// Draws the board centered in `area`.
pub fn render_board(frame: &mut Frame, area: Rect, board: &Board, show_cursor: bool) {
    let board = Paragraph::new(board_lines(board, show_cursor)).alignment(Alignment::Center);
    frame.render_widget(board, area);
}

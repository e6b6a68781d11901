//! Core domain types for tic-tac-toe.

use std::sync::Arc;

use derive_more::Display;
use tracing::instrument;

/// Symbols a player may pick for their figure.
///
/// This table is process-wide and immutable; the CPU figures below are kept
/// separate so a human can still choose any entry here.
pub const FIGURE_CATALOG: &[&str] = &[
    "X", "O", "🔥", "🫥", "🍺", "🧊", "🥀", "👌", "🤡", "🥸", "😡", "🎯", "💎", "🧸", "🎀",
];

/// Figure used by the easy CPU opponent.
pub const RANDY_FIGURE: &str = "🦦";

/// Figure used by the hard CPU opponent.
pub const TICTACO_FIGURE: &str = "🌮";

/// The symbol a player places on the grid.
///
/// Any string works; the engine only ever compares figures for equality.
/// Cloning is a reference-count bump.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{_0}")]
pub struct Figure(Arc<str>);

impl Figure {
    /// Creates a figure from any symbol.
    pub fn new(symbol: impl AsRef<str>) -> Self {
        Self(Arc::from(symbol.as_ref()))
    }

    /// Returns the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the figure catalog in display order.
    pub fn catalog() -> impl Iterator<Item = Figure> {
        FIGURE_CATALOG.iter().map(Figure::new)
    }

    /// Returns `preferred` unless it clashes with `taken`, in which case the
    /// first catalog figure that differs from `taken` is returned.
    #[instrument]
    pub fn distinct_from(preferred: &str, taken: &Figure) -> Figure {
        let preferred = Figure::new(preferred);
        if &preferred != taken {
            return preferred;
        }
        Figure::catalog()
            .find(|f| f != taken)
            .unwrap_or(preferred)
    }
}

impl From<&str> for Figure {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}

impl From<String> for Figure {
    fn from(symbol: String) -> Self {
        Self(Arc::from(symbol))
    }
}

/// A single square of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Occupied by a figure.
    Taken(Figure),
}

impl Cell {
    /// Returns true if the cell holds no figure.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the figure in this cell, if any.
    pub fn figure(&self) -> Option<&Figure> {
        match self {
            Cell::Empty => None,
            Cell::Taken(figure) => Some(figure),
        }
    }
}

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

//! The board module holds the 3x3 grid the game is played on, along with the small value types
//! used to address and fill it.
//!
//! Positions are bounded at construction, so the board itself never has to check that a row or a
//! column is in range. Whether a cell is free is a question for the validator, not for the board.

use std::fmt;

/// The number of rows and columns on the board.
pub const SIZE: usize = 3;

/// The labels rows are known by on the console, top to bottom.
pub const ROW_LABELS: [char; SIZE] = ['a', 'b', 'c'];

/// The mark a player leaves on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// The token of the first player.
    X,
    /// The token of the second player.
    O,
}

impl fmt::Display for Token {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::X => write!(formatter, "X"),
            Self::O => write!(formatter, "O"),
        }
    }
}

/// The contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// A token has been placed here.
    Taken(Token),
}

impl fmt::Display for Cell {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Empty => write!(formatter, " "),
            Self::Taken(token) => write!(formatter, "{token}"),
        }
    }
}

/// A cell address on the board. Both coordinates are always within `0..SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based row index, where 0 is row `a`.
    row: usize,
    /// Zero-based column index.
    column: usize,
}

impl Position {
    /// Builds a position from zero-based indices, or `None` if either is off the board.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Option<Self> {
        if row < SIZE && column < SIZE {
            Some(Self { row, column })
        } else {
            None
        }
    }

    /// Builds a position from the row letter and column number shown on the console.
    #[must_use]
    pub fn from_labels(row: char, column: usize) -> Option<Self> {
        let row = ROW_LABELS.iter().position(|label| *label == row)?;
        Self::new(row, column)
    }

    /// Builds a position the caller knows to be in range. Only used for constant tables.
    pub(crate) const fn at(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Every position on the board, row by row.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |column| Self { row, column }))
    }

    /// The zero-based row index.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// The zero-based column index.
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    /// The letter this position's row is labeled with.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "Positions only hold coordinates below SIZE."
    )]
    pub const fn row_label(&self) -> char {
        ROW_LABELS[self.row]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}{}", self.row_label(), self.column)
    }
}

/// The playing grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Cells indexed by row, then column.
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties every cell.
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; SIZE]; SIZE];
    }

    /// Writes `token` at `position`, overwriting whatever was there. Moves must be validated
    /// before they get here.
    #[expect(
        clippy::indexing_slicing,
        reason = "Positions only hold coordinates below SIZE."
    )]
    pub fn place(&mut self, position: Position, token: Token) {
        self.cells[position.row][position.column] = Cell::Taken(token);
    }

    /// The contents of the cell at `position`.
    #[must_use]
    #[expect(
        clippy::indexing_slicing,
        reason = "Positions only hold coordinates below SIZE."
    )]
    pub const fn cell_at(&self, position: Position) -> Cell {
        self.cells[position.row][position.column]
    }

    /// Whether every cell holds a token.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| *cell != Cell::Empty)
    }

    /// How many cells hold a token.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }

    /// A read-only view of the grid, row by row.
    #[must_use]
    pub const fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }
}

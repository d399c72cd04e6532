//! Win and tie detection.

use crate::board::{Board, Cell, Position, Token};

/// The eight triples of cells that win the game when one token fills them.
pub const LINES: [[Position; 3]; 8] = [
    // rows
    [Position::at(0, 0), Position::at(0, 1), Position::at(0, 2)],
    [Position::at(1, 0), Position::at(1, 1), Position::at(1, 2)],
    [Position::at(2, 0), Position::at(2, 1), Position::at(2, 2)],
    // columns
    [Position::at(0, 0), Position::at(1, 0), Position::at(2, 0)],
    [Position::at(0, 1), Position::at(1, 1), Position::at(2, 1)],
    [Position::at(0, 2), Position::at(1, 2), Position::at(2, 2)],
    // diagonals
    [Position::at(0, 0), Position::at(1, 1), Position::at(2, 2)],
    [Position::at(0, 2), Position::at(1, 1), Position::at(2, 0)],
];

/// Where a game stands after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Play goes on.
    Ongoing,
    /// The given token completed a line.
    Win(Token),
    /// The board filled up without anyone completing a line.
    Tie,
}

impl Outcome {
    /// Whether the game is over.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(*self, Self::Ongoing)
    }
}

/// The first line filled entirely with `token`, if any.
#[must_use]
pub fn winning_line(board: &Board, token: Token) -> Option<[Position; 3]> {
    LINES.into_iter().find(|line| {
        line.iter()
            .all(|pos| board.cell_at(*pos) == Cell::Taken(token))
    })
}

/// Evaluates the board for the player who just moved with `token`.
///
/// A win is looked for first and always wins over a tie, so a move that fills the last cell and
/// completes a line at the same time is reported as a win.
#[must_use]
pub fn evaluate(board: &Board, token: Token) -> Outcome {
    if winning_line(board, token).is_some() {
        Outcome::Win(token)
    } else if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::Ongoing
    }
}

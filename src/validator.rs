//! Move validation. Raw text from the player is turned into a board position here, and rejected if
//! it names a row or column off the board or a cell that is already taken.
//!
//! A rejected move is never fatal; the turn sequencer simply asks again.

use std::sync::LazyLock;

use regex::Regex;

use crate::board::{Board, Cell, Position, ROW_LABELS};

/// A row letter followed by a run of digits, such as `b1`. Range checks happen after the match so
/// that out-of-range input can be reported precisely.
#[expect(
    clippy::unwrap_used,
    reason = "The pattern is a literal and is covered by the tests in this module."
)]
static MOVE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\A([[:alpha:]])(\d+)\z").unwrap());

/// The reasons a move can be turned down.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The input isn't shaped like a row letter and a column number.
    #[error("\"{0}\" is not a position; use a row letter and a column number, such as b1")]
    Malformed(String),
    /// The row letter names a row that doesn't exist.
    #[error("there is no row {0}; rows go from a to c")]
    RowOutOfRange(char),
    /// The column number names a column that doesn't exist.
    #[error("there is no column {0}; columns go from 0 to 2")]
    ColumnOutOfRange(String),
    /// Someone already played there.
    #[error("{0} is already taken")]
    Occupied(Position),
}

/// Parses `raw` into a position on the board, without looking at what the board holds.
///
/// # Errors
///
/// Returns a [`MoveError`] if the input is malformed or points off the board.
pub fn parse(raw: &str) -> Result<Position, MoveError> {
    let raw = raw.trim();
    let caps = MOVE_RE
        .captures(raw)
        .ok_or_else(|| MoveError::Malformed(raw.to_owned()))?;

    let row = caps
        .get(1)
        .and_then(|letter| letter.as_str().chars().next())
        .ok_or_else(|| MoveError::Malformed(raw.to_owned()))?;
    let column = caps
        .get(2)
        .map(|digits| digits.as_str())
        .ok_or_else(|| MoveError::Malformed(raw.to_owned()))?;

    if !ROW_LABELS.contains(&row) {
        return Err(MoveError::RowOutOfRange(row));
    }

    // digit runs too long for usize are just another column that doesn't exist
    column
        .parse::<usize>()
        .ok()
        .and_then(|index| Position::from_labels(row, index))
        .ok_or_else(|| MoveError::ColumnOutOfRange(column.to_owned()))
}

/// Parses `raw` and checks that the cell it names is free on `board`.
///
/// # Errors
///
/// Returns a [`MoveError`] describing the first problem found with the move.
pub fn check(board: &Board, raw: &str) -> Result<Position, MoveError> {
    let position = parse(raw)?;

    match board.cell_at(position) {
        Cell::Empty => Ok(position),
        Cell::Taken(_) => Err(MoveError::Occupied(position)),
    }
}

/// Whether `raw` names a free cell on `board`.
#[must_use]
pub fn is_valid(board: &Board, raw: &str) -> bool {
    check(board, raw).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Token;

    #[test]
    fn test_every_labeled_cell_is_valid_on_empty_board() {
        let board = Board::new();
        for row in ['a', 'b', 'c'] {
            for column in 0..3 {
                let raw = format!("{row}{column}");
                assert!(is_valid(&board, &raw), "{raw} should be valid");
            }
        }
    }

    #[test]
    fn test_out_of_range_is_invalid() {
        let board = Board::new();
        assert_eq!(check(&board, "d0"), Err(MoveError::RowOutOfRange('d')));
        assert_eq!(
            check(&board, "a3"),
            Err(MoveError::ColumnOutOfRange("3".to_owned()))
        );
        assert_eq!(
            check(&board, "c99999999999999999999999"),
            Err(MoveError::ColumnOutOfRange(
                "99999999999999999999999".to_owned()
            ))
        );
    }

    #[test]
    fn test_malformed_is_invalid() {
        let board = Board::new();
        for raw in ["", "b", "1b", "bb", "b 1", "b1x", "-1"] {
            assert!(
                matches!(check(&board, raw), Err(MoveError::Malformed(_))),
                "{raw:?} should be malformed"
            );
        }
    }

    #[test]
    fn test_occupied_is_invalid_for_any_token() {
        let mut board = Board::new();
        let pos = parse("b1").unwrap();
        board.place(pos, Token::O);

        assert_eq!(check(&board, "b1"), Err(MoveError::Occupied(pos)));
        assert!(!is_valid(&board, "b1"));
        assert!(is_valid(&board, "b2"));
    }

    #[test]
    fn test_surrounding_whitespace_is_forgiven() {
        let board = Board::new();
        assert_eq!(check(&board, "  c2\n"), Ok(Position::new(2, 2).unwrap()));
    }

    #[test]
    fn test_uppercase_rows_are_not_rows() {
        let board = Board::new();
        assert_eq!(check(&board, "B1"), Err(MoveError::RowOutOfRange('B')));
        assert_eq!(check(&board, "C2"), Err(MoveError::RowOutOfRange('C')));
        assert!(!is_valid(&board, "A0"));
    }
}

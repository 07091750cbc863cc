//! Moves and the errors the rules engine reports for them.
//!
//! A move is a request, not an event that has already happened. It only
//! becomes part of a game once the rules engine has validated it against a
//! specific board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::rules;
use crate::types::{Board, Mark};

/// A player's request to place `mark` at `(row, col)`.
///
/// Coordinates are zero-based and signed, so values coming from free-text
/// input can be represented even when they are off the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Target row.
    pub row: isize,
    /// Target column.
    pub col: isize,
    /// The mark being placed.
    pub mark: Mark,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: isize, col: isize, mark: Mark) -> Self {
        Self { row, col, mark }
    }

    /// Applies this move to `board`, returning the resulting board.
    #[instrument(skip(board))]
    pub fn apply(&self, board: &Board) -> Result<Board, RulesError> {
        rules::apply_move(board, self.row, self.col, self.mark)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.mark, self.row, self.col)
    }
}

/// Why a move was rejected as illegal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IllegalMoveReason {
    /// Row or column outside `0..=2`.
    #[display("out of bounds")]
    OutOfBounds,
    /// The target cell already holds a mark.
    #[display("already occupied")]
    Occupied,
}

/// Error reported by the rules engine.
///
/// The board passed to the failing call is never modified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RulesError {
    /// The value to place is not one of the two player marks.
    #[display("Invalid mark {:?}: expected X or O", _0)]
    InvalidMark(char),

    /// Text meant to name a mark was not exactly one character long.
    #[display("Expected a single X or O, got {} characters", _0)]
    MarkLength(usize),

    /// The target cell is off the board or already taken.
    #[display("Illegal move at ({}, {}): cell is {}", row, col, reason)]
    IllegalMove {
        /// Requested row.
        row: isize,
        /// Requested column.
        col: isize,
        /// What made the move illegal.
        reason: IllegalMoveReason,
    },
}

impl std::error::Error for RulesError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn test_move_apply_delegates_to_rules() {
        let board = Board::new();
        let after = Move::new(1, 1, Mark::O).apply(&board).unwrap();
        assert_eq!(after.get(1, 1), Some(Cell::Marked(Mark::O)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_error_messages() {
        let err = RulesError::IllegalMove {
            row: 0,
            col: 0,
            reason: IllegalMoveReason::Occupied,
        };
        assert!(err.to_string().contains("occupied"));
        assert!(RulesError::InvalidMark(' ').to_string().contains("expected X or O"));
        assert_eq!(
            RulesError::MarkLength(2).to_string(),
            "Expected a single X or O, got 2 characters"
        );
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(2, 0, Mark::X).to_string(), "X -> (2, 0)");
    }
}

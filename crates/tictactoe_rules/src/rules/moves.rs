//! Board creation and move legality.

use crate::action::{IllegalMoveReason, RulesError};
use crate::types::{Board, Cell};
use tracing::{debug, instrument};

/// Creates an empty board.
#[instrument]
pub fn new_board() -> Board {
    Board::new()
}

/// Checks whether a mark may be placed at `(row, col)`.
///
/// Off-board coordinates are rejected before any cell is looked at; an
/// on-board coordinate is valid iff its cell is empty.
#[instrument(skip(board))]
pub fn is_valid_move(board: &Board, row: isize, col: isize) -> bool {
    matches!(board.get(row, col), Some(Cell::Empty))
}

/// Places `mark` at `(row, col)` and returns the new board.
///
/// The input board is left untouched, including when the move fails.
///
/// # Errors
///
/// - [`RulesError::InvalidMark`] if `mark` is [`Cell::Empty`].
/// - [`RulesError::IllegalMove`] if the cell is off the board or occupied.
#[instrument(skip(board, mark))]
pub fn apply_move(
    board: &Board,
    row: isize,
    col: isize,
    mark: impl Into<Cell>,
) -> Result<Board, RulesError> {
    let cell = mark.into();
    if cell.is_empty() {
        return Err(RulesError::InvalidMark(cell.symbol()));
    }

    let Some((r, c)) = Board::index(row, col) else {
        return Err(RulesError::IllegalMove {
            row,
            col,
            reason: IllegalMoveReason::OutOfBounds,
        });
    };
    if !is_valid_move(board, row, col) {
        return Err(RulesError::IllegalMove {
            row,
            col,
            reason: IllegalMoveReason::Occupied,
        });
    }

    debug!(?cell, row, col, "Placing mark");
    Ok(board.with_cell(r, c, cell))
}

/// Lists every empty cell in row-major order.
#[instrument(skip(board))]
pub fn valid_moves(board: &Board) -> Vec<(usize, usize)> {
    board
        .cells()
        .filter(|(_, _, cell)| cell.is_empty())
        .map(|(r, c, _)| (r, c))
        .collect()
}

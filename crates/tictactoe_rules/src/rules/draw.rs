//! Draw detection logic for tic-tac-toe.

use super::win::winner;
use crate::types::{Board, GameStatus};
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
///
/// This does not look for a win. Check [`check_win`](super::check_win) for
/// both marks first; a full board with no completed line is a draw.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    board.cells().all(|(_, _, cell)| !cell.is_empty())
}

/// Classifies a board. A win takes precedence over a full board.
#[instrument(skip(board))]
pub fn status(board: &Board) -> GameStatus {
    if let Some(mark) = winner(board) {
        GameStatus::Won(mark)
    } else if check_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

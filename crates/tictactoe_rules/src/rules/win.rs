//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Mark};
use strum::IntoEnumIterator;
use tracing::instrument;

/// The eight triples that win the game: three rows, three columns, two diagonals.
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

/// Checks whether `mark` owns every cell of at least one line.
#[instrument(skip(board))]
pub fn check_win(board: &Board, mark: Mark) -> bool {
    let rows = board.rows();
    LINES
        .iter()
        .any(|line| line.iter().all(|&(r, c)| rows[r][c] == Cell::Marked(mark)))
}

/// Returns the mark that has completed a line, if any.
///
/// Both marks are checked independently; X is reported first if a malformed
/// board somehow has two winners.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    Mark::iter().find(|mark| check_win(board, *mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(literal: &str) -> Board {
        literal.parse().unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!check_win(&board, Mark::X));
        assert!(!check_win(&board, Mark::O));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board("XXX/___/___");
        assert!(check_win(&board, Mark::X));
        assert!(!check_win(&board, Mark::O));
        assert_eq!(winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_winner_column() {
        assert!(check_win(&board("X__/X__/X__"), Mark::X));
        assert!(check_win(&board("_O_/_O_/_O_"), Mark::O));
    }

    #[test]
    fn test_winner_diagonals() {
        assert!(check_win(&board("X__/_X_/__X"), Mark::X));
        assert!(check_win(&board("__X/_X_/X__"), Mark::X));
        assert_eq!(winner(&board("O__/_O_/__O")), Some(Mark::O));
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let mut rows = [[Cell::Empty; 3]; 3];
            for (r, c) in line {
                rows[r][c] = Cell::Marked(Mark::O);
            }
            let board = Board::from_rows(rows);
            assert!(check_win(&board, Mark::O), "line {line:?} should win");
            assert!(!check_win(&board, Mark::X));
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert!(!check_win(&board("XX_/___/___"), Mark::X));
        assert!(!check_win(&board("XXO/OOX/XOX"), Mark::X));
        assert!(!check_win(&board("XXO/OOX/XOX"), Mark::O));
    }
}

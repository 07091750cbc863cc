//! Tic-tac-toe board model and rules engine.
//!
//! This crate has no I/O. A driver owns the terminal and the turn order; it
//! asks the rules whether a move is legal, applies it to get a new board, and
//! checks for a win or draw after every move.
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{Mark, apply_move, check_draw, check_win, new_board};
//!
//! let board = new_board();
//! let board = apply_move(&board, 0, 0, Mark::X)?;
//! let board = apply_move(&board, 1, 1, Mark::O)?;
//! assert!(!check_win(&board, Mark::X));
//! assert!(!check_draw(&board));
//! # Ok::<(), tictactoe_rules::RulesError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod rules;
mod types;

pub use action::{IllegalMoveReason, Move, RulesError};
pub use rules::{
    LINES, apply_move, check_draw, check_win, is_valid_move, new_board, status, valid_moves,
    winner,
};
pub use types::{Board, BoardParseError, Cell, GameStatus, Mark, SIZE};

//! Game rules for tic-tac-toe.
//!
//! Every rule is a pure function of the board it is given. Nothing here keeps
//! state between calls, and nothing here mutates a board in place.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{check_draw, status};
pub use moves::{apply_move, is_valid_move, new_board, valid_moves};
pub use win::{LINES, check_win, winner};

//! Terminal driver for tic-tac-toe.
//!
//! Owns everything the rules engine does not: reading moves from a line-based
//! input, drawing the board, alternating turns and offering rematches.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod input;
pub mod render;
pub mod session;

pub use cli::Cli;
pub use config::{Config, ConfigError};
pub use input::{Answer, Command, InputError, parse_answer, parse_command, parse_move};
pub use render::{Renderer, clear_screen};
pub use session::{GameOutcome, Session, SessionError, SessionSummary, describe_rejection};

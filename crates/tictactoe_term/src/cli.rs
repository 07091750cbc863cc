//! Command-line interface for the terminal game.

use crate::config::Config;
use clap::Parser;
use std::path::PathBuf;
use tictactoe_rules::Mark;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file (ignored if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Draw marks without color
    #[arg(long)]
    pub no_color: bool,

    /// Do not emphasize the most recent move
    #[arg(long)]
    pub no_highlight: bool,

    /// Keep previous boards on screen instead of clearing
    #[arg(long)]
    pub no_clear: bool,

    /// Mark that moves first (X or O)
    #[arg(long)]
    pub first: Option<Mark>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Applies command-line overrides on top of file settings.
    pub fn apply(&self, mut config: Config) -> Config {
        if self.no_color {
            config = config.with_color(false);
        }
        if self.no_highlight {
            config = config.with_highlight_last_move(false);
        }
        if self.no_clear {
            config = config.with_clear_screen(false);
        }
        if let Some(mark) = self.first {
            config = config.with_first_mark(mark);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictactoe"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert_eq!(cli.apply(Config::default()), Config::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from(["tictactoe", "--no-color", "--no-clear", "--first", "o"])
            .unwrap();
        let config = cli.apply(Config::default());
        assert!(!*config.color());
        assert!(!*config.clear_screen());
        assert!(*config.highlight_last_move());
        assert_eq!(*config.first_mark(), Mark::O);
    }

    #[test]
    fn test_rejects_unknown_mark() {
        assert!(Cli::try_parse_from(["tictactoe", "--first", "Z"]).is_err());
    }
}

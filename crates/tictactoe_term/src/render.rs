//! Stateless board rendering for the terminal.

use crate::config::Config;
use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Color, Stylize, style},
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};
use tictactoe_rules::{Board, Cell, Mark};
use tracing::instrument;

/// Draws boards as text, optionally with ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    color: bool,
    highlight_last_move: bool,
}

impl Renderer {
    /// Creates a renderer.
    pub fn new(color: bool, highlight_last_move: bool) -> Self {
        Self {
            color,
            highlight_last_move,
        }
    }

    /// Creates a renderer from the player's settings.
    pub fn from_config(config: &Config) -> Self {
        Self::new(*config.color(), *config.highlight_last_move())
    }

    /// Renders the board with 1-based row and column headers.
    ///
    /// `last_move` is the cell placed most recently, owned by the caller.
    #[instrument(skip(self, board))]
    pub fn render(&self, board: &Board, last_move: Option<(usize, usize)>) -> String {
        let mut lines = vec!["    1   2   3".to_string()];
        for (r, row) in board.rows().iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(c, cell)| self.render_cell(*cell, last_move == Some((r, c))))
                .collect();
            lines.push(format!("{}   {}", r + 1, cells.join(" | ")));
            if r < row.len() - 1 {
                lines.push("   ---+---+---".to_string());
            }
        }
        lines.join("\n")
    }

    fn render_cell(&self, cell: Cell, is_last: bool) -> String {
        let Some(mark) = cell.mark() else {
            return cell.symbol().to_string();
        };
        let highlight = self.highlight_last_move && is_last;
        if !self.color && !highlight {
            return mark.symbol().to_string();
        }

        let mut styled = style(mark.symbol());
        if self.color {
            styled = styled.with(mark_color(mark));
        }
        if highlight {
            styled = styled
                .attribute(Attribute::Bold)
                .attribute(Attribute::Underlined);
        }
        styled.to_string()
    }

    /// Renders a mark's symbol in the same colors used on the board.
    pub fn mark(&self, mark: Mark) -> String {
        if self.color {
            style(mark.symbol()).with(mark_color(mark)).to_string()
        } else {
            mark.symbol().to_string()
        }
    }
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Red,
        Mark::O => Color::Blue,
    }
}

/// Clears the terminal and moves the cursor to the top-left corner.
pub fn clear_screen(out: &mut impl Write) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(literal: &str) -> Board {
        literal.parse().unwrap()
    }

    #[test]
    fn test_plain_render() {
        let renderer = Renderer::new(false, false);
        let text = renderer.render(&board("XO_/_X_/__O"), Some((2, 2)));
        let expected = [
            "    1   2   3",
            "1   X | O |  ",
            "   ---+---+---",
            "2     | X |  ",
            "   ---+---+---",
            "3     |   | O",
        ]
        .join("\n");
        assert_eq!(text, expected);
    }

    #[test]
    fn test_color_render_uses_ansi() {
        let renderer = Renderer::new(true, false);
        let text = renderer.render(&board("X__/___/___"), None);
        assert!(text.contains("\x1b["));
        assert!(text.contains('X'));
    }

    #[test]
    fn test_highlight_only_marks_last_move() {
        let renderer = Renderer::new(false, true);
        let text = renderer.render(&board("X__/___/__O"), Some((2, 2)));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "1   X |   |  ");
        assert!(lines[5].contains("\x1b["));
    }

    #[test]
    fn test_no_highlight_without_last_move() {
        let renderer = Renderer::new(false, true);
        let text = renderer.render(&board("X__/___/__O"), None);
        assert!(!text.contains("\x1b["));
    }

    #[test]
    fn test_mark_label() {
        assert_eq!(Renderer::new(false, true).mark(Mark::O), "O");
        assert!(Renderer::new(true, true).mark(Mark::X).contains("\x1b["));
    }

    #[test]
    fn test_clear_screen_writes_escape_codes() {
        let mut out = Vec::new();
        clear_screen(&mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("\x1b["));
    }
}

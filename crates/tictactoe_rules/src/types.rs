//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

use crate::action::RulesError;

/// Side length of the board.
pub const SIZE: usize = 3;

/// Mark placed by a player.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Mark {
    /// Mark X (moves first by default).
    X,
    /// Mark O.
    O,
}

impl Mark {
    /// Both marks, X first.
    pub const ALL: [Mark; 2] = [Mark::X, Mark::O];

    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Character used to draw this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Mark {
    type Error = RulesError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value {
            'X' | 'x' => Ok(Mark::X),
            'O' | 'o' => Ok(Mark::O),
            other => Err(RulesError::InvalidMark(other)),
        }
    }
}

impl FromStr for Mark {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Mark::try_from(c),
            _ => Err(RulesError::MarkLength(trimmed.chars().count())),
        }
    }
}

/// A single position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Occupied by a mark.
    Marked(Mark),
}

impl Cell {
    /// Returns true if no mark has been placed in this cell.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    /// Character used to draw this cell. Empty cells are a blank space.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Marked(mark) => mark.symbol(),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Marked(mark)
    }
}

/// 3x3 tic-tac-toe board.
///
/// A board is a plain value: it is `Copy`, and every rule that "changes" it
/// returns a new board instead of mutating the one it was given. Boards kept
/// around by a caller stay valid snapshots of earlier turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from its rows, top to bottom.
    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Converts signed coordinates into array indices, if they are on the board.
    pub fn index(row: isize, col: isize) -> Option<(usize, usize)> {
        let row = usize::try_from(row).ok().filter(|r| *r < SIZE)?;
        let col = usize::try_from(col).ok().filter(|c| *c < SIZE)?;
        Some((row, col))
    }

    /// Gets the cell at `(row, col)`, or `None` if the coordinates are off the board.
    pub fn get(&self, row: isize, col: isize) -> Option<Cell> {
        Self::index(row, col).map(|(r, c)| self.cells[r][c])
    }

    /// Returns a copy of this board with one cell replaced.
    pub(crate) fn with_cell(mut self, row: usize, col: usize, cell: Cell) -> Self {
        self.cells[row][col] = cell;
        self
    }

    /// Returns the rows of the board, top to bottom.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Iterates over every cell with its coordinates, in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().enumerate().map(move |(c, cell)| (r, c, *cell)))
    }

    /// Number of cells holding a mark.
    pub fn filled_count(&self) -> usize {
        self.cells().filter(|(_, _, cell)| !cell.is_empty()).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            write!(f, "{}", line.join("|"))?;
            if r < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error returned when a board literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The literal did not contain exactly three rows.
    #[display("Expected 3 rows, found {}", _0)]
    RowCount(usize),

    /// A row did not contain exactly three cells.
    #[display("Row {} has {} cells, expected 3", row, len)]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found.
        len: usize,
    },

    /// A cell used a character that is neither a mark nor an empty marker.
    #[display("Unexpected symbol {:?} at ({}, {})", symbol, row, col)]
    InvalidSymbol {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        col: usize,
        /// The offending character.
        symbol: char,
    },
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses a literal such as `"XX_/_O_/___"`.
    ///
    /// Rows are separated by `/` or newlines. `X`/`O` (either case) are marks;
    /// `_`, `.` and space are empty cells.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(|row| row.trim_end_matches('\r'))
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != SIZE {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            let symbols: Vec<char> = row.chars().collect();
            if symbols.len() != SIZE {
                return Err(BoardParseError::RowLength {
                    row: r,
                    len: symbols.len(),
                });
            }
            for (c, symbol) in symbols.into_iter().enumerate() {
                cells[r][c] = match symbol {
                    '_' | '.' | ' ' => Cell::Empty,
                    other => Mark::try_from(other)
                        .map(Cell::Marked)
                        .map_err(|_| BoardParseError::InvalidSymbol {
                            row: r,
                            col: c,
                            symbol: other,
                        })?,
                };
            }
        }
        Ok(Self { cells })
    }
}

/// Where a game stands after the latest move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves can still be made.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// The board is full and nobody won.
    Draw,
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().all(|(_, _, cell)| cell == Cell::Empty));
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.get(-1, 0), None);
        assert_eq!(board.get(0, 3), None);
        assert_eq!(board.get(2, 2), Some(Cell::Empty));
    }

    #[test]
    fn test_parse_literal() {
        let board: Board = "XO_/_x./o  ".parse().unwrap();
        assert_eq!(board.get(0, 0), Some(Cell::Marked(Mark::X)));
        assert_eq!(board.get(0, 1), Some(Cell::Marked(Mark::O)));
        assert_eq!(board.get(1, 1), Some(Cell::Marked(Mark::X)));
        assert_eq!(board.get(2, 0), Some(Cell::Marked(Mark::O)));
        assert_eq!(board.filled_count(), 4);
    }

    #[test]
    fn test_parse_rejects_bad_literals() {
        assert_eq!("XXX/___".parse::<Board>(), Err(BoardParseError::RowCount(2)));
        assert_eq!(
            "XXXX/___/___".parse::<Board>(),
            Err(BoardParseError::RowLength { row: 0, len: 4 })
        );
        assert_eq!(
            "___/_Z_/___".parse::<Board>(),
            Err(BoardParseError::InvalidSymbol {
                row: 1,
                col: 1,
                symbol: 'Z'
            })
        );
    }

    #[test]
    fn test_display() {
        let board: Board = "XO_/___/__X".parse().unwrap();
        assert_eq!(board.to_string(), "X|O| \n-+-+-\n | | \n-+-+-\n | |X");
    }

    #[test]
    fn test_mark_from_char() {
        assert_eq!(Mark::try_from('x'), Ok(Mark::X));
        assert_eq!(Mark::try_from('O'), Ok(Mark::O));
        assert_eq!(Mark::try_from('Z'), Err(RulesError::InvalidMark('Z')));
        assert_eq!("o".parse::<Mark>(), Ok(Mark::O));
        assert_eq!("XO".parse::<Mark>(), Err(RulesError::MarkLength(2)));
        assert_eq!(" ".parse::<Mark>(), Err(RulesError::MarkLength(0)));
        assert_eq!("z".parse::<Mark>(), Err(RulesError::InvalidMark('z')));
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
    }
}

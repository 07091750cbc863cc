//! Parsing of the lines a player types.

use tracing::instrument;

/// What a player asked for on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the active mark at zero-based `(row, col)`.
    ///
    /// The coordinates are not range-checked here; the rules engine decides
    /// whether they are on the board.
    Move {
        /// Zero-based row.
        row: isize,
        /// Zero-based column.
        col: isize,
    },
    /// Leave the session.
    Quit,
}

/// Answer to a yes/no prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    /// Yes.
    Yes,
    /// No.
    No,
}

/// Why a line could not be read as a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Expected exactly two values.
    #[display("Expected 2 numbers, got {}", _0)]
    WrongTokenCount(usize),

    /// A value was not an integer.
    #[display("{:?} is not a number", _0)]
    NotANumber(String),
}

impl std::error::Error for InputError {}

/// Parses a turn: `q`/`quit`, or two whitespace-separated 1-based integers.
#[instrument]
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }
    let (row, col) = parse_move(trimmed)?;
    Ok(Command::Move { row, col })
}

/// Parses two 1-based integers and converts them to zero-based coordinates.
#[instrument]
pub fn parse_move(line: &str) -> Result<(isize, isize), InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::WrongTokenCount(tokens.len()));
    };
    Ok((parse_coordinate(row)?, parse_coordinate(col)?))
}

fn parse_coordinate(token: &str) -> Result<isize, InputError> {
    token
        .parse::<isize>()
        .map(|n| n.saturating_sub(1))
        .map_err(|_| InputError::NotANumber(token.to_string()))
}

/// Reads a yes/no answer. Returns `None` for anything else.
#[instrument]
pub fn parse_answer(line: &str) -> Option<Answer> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(Answer::Yes),
        "n" | "no" => Some(Answer::No),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_converts_to_zero_based() {
        assert_eq!(parse_move("1 1"), Ok((0, 0)));
        assert_eq!(parse_move("  3\t2 \n"), Ok((2, 1)));
    }

    #[test]
    fn test_parse_move_keeps_out_of_range_values() {
        assert_eq!(parse_move("0 4"), Ok((-1, 3)));
        assert_eq!(parse_move("-2 9"), Ok((-3, 8)));
    }

    #[test]
    fn test_parse_move_wrong_token_count() {
        assert_eq!(parse_move(""), Err(InputError::WrongTokenCount(0)));
        assert_eq!(parse_move("2"), Err(InputError::WrongTokenCount(1)));
        assert_eq!(parse_move("1 2 3"), Err(InputError::WrongTokenCount(3)));
    }

    #[test]
    fn test_parse_move_not_a_number() {
        assert_eq!(
            parse_move("a 2"),
            Err(InputError::NotANumber("a".to_string()))
        );
        assert_eq!(
            parse_move("1 2.5"),
            Err(InputError::NotANumber("2.5".to_string()))
        );
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("Q"), Ok(Command::Quit));
        assert_eq!(parse_command(" quit "), Ok(Command::Quit));
        assert_eq!(parse_command("2 3"), Ok(Command::Move { row: 1, col: 2 }));
        assert!(parse_command("quit now").is_err());
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("Y"), Some(Answer::Yes));
        assert_eq!(parse_answer("yes\n"), Some(Answer::Yes));
        assert_eq!(parse_answer("n"), Some(Answer::No));
        assert_eq!(parse_answer("NO"), Some(Answer::No));
        assert_eq!(parse_answer("maybe"), None);
    }
}

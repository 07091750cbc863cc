//! Turn loop between two players sharing one terminal.

use crate::config::Config;
use crate::input::{Answer, Command, parse_answer, parse_command};
use crate::render::{Renderer, clear_screen};
use derive_getters::Getters;
use std::io::{self, BufRead, Write};
use tictactoe_rules::{
    Board, GameStatus, IllegalMoveReason, Mark, RulesError, apply_move, check_draw, check_win,
    new_board,
};
use tracing::{debug, info, instrument};

/// How a single game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The game reached a win or a draw.
    Finished(GameStatus),
    /// A player quit, or input ran out, before the game finished.
    Quit,
}

/// Running totals for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters)]
pub struct SessionSummary {
    /// Games that reached a win or a draw.
    games: u32,
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Games that ended in a draw.
    draws: u32,
}

impl SessionSummary {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::X) => self.x_wins += 1,
            GameStatus::Won(Mark::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => return,
        }
        self.games += 1;
    }
}

impl std::fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Games: {}  X wins: {}  O wins: {}  Draws: {}",
            self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Error that ends a session.
#[derive(Debug, derive_more::Display, derive_more::From, derive_more::Error)]
pub enum SessionError {
    /// Reading input or writing output failed.
    #[display("Terminal I/O failed: {}", _0)]
    Io(io::Error),
}

/// An interactive session: one or more games on a shared input and output.
///
/// Generic over the streams so it can be driven by a script in tests.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: Config,
    renderer: Renderer,
    summary: SessionSummary,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading moves from `input` and drawing to `output`.
    pub fn new(input: R, output: W, config: Config) -> Self {
        let renderer = Renderer::from_config(&config);
        Self {
            input,
            output,
            config,
            renderer,
            summary: SessionSummary::default(),
        }
    }

    /// Plays games until a player quits, declines a rematch, or input ends.
    #[instrument(skip(self))]
    pub fn run(mut self) -> Result<SessionSummary, SessionError> {
        info!("Starting session");
        loop {
            match self.play_game()? {
                GameOutcome::Quit => break,
                GameOutcome::Finished(status) => {
                    self.summary.record(status);
                    if !self.ask_restart()? {
                        break;
                    }
                }
            }
        }

        writeln!(self.output, "Thanks for playing! {}", self.summary)?;
        self.output.flush()?;
        info!(summary = %self.summary, "Session finished");
        Ok(self.summary)
    }

    /// Plays one game from an empty board.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Result<GameOutcome, SessionError> {
        let mut board = new_board();
        let mut mark = *self.config.first_mark();
        let mut last_move: Option<(usize, usize)> = None;
        let mut notice: Option<String> = None;

        loop {
            self.draw(&board, last_move)?;
            if let Some(message) = notice.take() {
                writeln!(self.output, "{}", message)?;
            }
            write!(
                self.output,
                "Player {}, enter row and column (1-3), or q to quit: ",
                self.renderer.mark(mark)
            )?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                debug!("Input closed mid-game");
                writeln!(self.output)?;
                return Ok(GameOutcome::Quit);
            };

            let (row, col) = match parse_command(&line) {
                Ok(Command::Quit) => return Ok(GameOutcome::Quit),
                Ok(Command::Move { row, col }) => (row, col),
                Err(e) => {
                    debug!(error = %e, "Unreadable move");
                    notice = Some(format!("{}. Enter two numbers, for example: 2 3", e));
                    continue;
                }
            };

            board = match apply_move(&board, row, col, mark) {
                Ok(next) => next,
                Err(e) => {
                    debug!(error = %e, %mark, "Move rejected");
                    notice = Some(describe_rejection(&e));
                    continue;
                }
            };
            last_move = Board::index(row, col);

            // Only the mark that just moved can have completed a line.
            if check_win(&board, mark) {
                self.finish(&board, last_move, GameStatus::Won(mark))?;
                return Ok(GameOutcome::Finished(GameStatus::Won(mark)));
            }
            if check_draw(&board) {
                self.finish(&board, last_move, GameStatus::Draw)?;
                return Ok(GameOutcome::Finished(GameStatus::Draw));
            }
            mark = mark.opponent();
        }
    }

    fn draw(&mut self, board: &Board, last_move: Option<(usize, usize)>) -> io::Result<()> {
        if *self.config.clear_screen() {
            clear_screen(&mut self.output)?;
        }
        writeln!(self.output, "{}", self.renderer.render(board, last_move))?;
        writeln!(self.output)
    }

    fn finish(
        &mut self,
        board: &Board,
        last_move: Option<(usize, usize)>,
        status: GameStatus,
    ) -> io::Result<()> {
        info!(?status, "Game over");
        self.draw(board, last_move)?;
        match status {
            GameStatus::Won(mark) => {
                writeln!(self.output, "Player {} wins!", self.renderer.mark(mark))
            }
            GameStatus::Draw => writeln!(self.output, "It's a draw!"),
            GameStatus::InProgress => Ok(()),
        }
    }

    fn ask_restart(&mut self) -> Result<bool, SessionError> {
        loop {
            write!(self.output, "Play again? (y/n): ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                return Ok(false);
            };
            match parse_answer(&line) {
                Some(Answer::Yes) => return Ok(true),
                Some(Answer::No) => return Ok(false),
                None => writeln!(self.output, "Please answer y or n.")?,
            }
        }
    }

    /// Reads one line. Bytes that are not UTF-8 are replaced rather than
    /// treated as a read failure, so a garbled line is just unparseable input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Turns a rules error into a message for the player, in 1-based coordinates.
pub fn describe_rejection(err: &RulesError) -> String {
    match err {
        RulesError::IllegalMove {
            reason: IllegalMoveReason::OutOfBounds,
            ..
        } => "Row and column must each be between 1 and 3.".to_string(),
        RulesError::IllegalMove {
            row,
            col,
            reason: IllegalMoveReason::Occupied,
        } => format!("Cell {} {} is already taken.", row + 1, col + 1),
        RulesError::InvalidMark(_) | RulesError::MarkLength(_) => err.to_string(),
    }
}

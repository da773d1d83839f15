//! Line-oriented terminal front end.
//!
//! Thin presentation layer: parses typed commands, forwards them to a
//! [`GameSession`] and renders the derived view as text.

use crate::config::AppConfig;
use crate::games::tictactoe::{GameSession, Position, Square, is_full};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, instrument};

/// A command typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Mark a square (0-8).
    Move(usize),
    /// View a recorded step.
    Jump(usize),
    /// Flip the move-list order.
    ToggleOrder,
    /// Replace the session with a new game.
    NewGame,
    /// Print the current view again.
    Show,
    /// Print the command summary.
    Help,
    /// Leave the loop.
    Quit,
}

/// Error parsing a console command.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseError {
    /// Nothing was typed.
    #[display("Empty input")]
    Empty,
    /// The command word is not recognised.
    #[display("Unknown command: {}", _0)]
    Unknown(String),
    /// A command that needs a number did not get one.
    #[display("Expected a number after '{}'", _0)]
    MissingNumber(String),
}

impl std::error::Error for ParseError {}

impl FromStr for ConsoleCommand {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let Some(word) = words.next() else {
            return Err(ParseError::Empty);
        };
        let word = word.to_lowercase();

        if let Ok(index) = word.parse::<usize>() {
            return Ok(ConsoleCommand::Move(index));
        }

        let number = |words: &mut std::str::SplitWhitespace<'_>| {
            words
                .next()
                .and_then(|n| n.parse::<usize>().ok())
                .ok_or_else(|| ParseError::MissingNumber(word.clone()))
        };

        match word.as_str() {
            "move" | "m" => number(&mut words).map(ConsoleCommand::Move),
            "jump" | "j" => number(&mut words).map(ConsoleCommand::Jump),
            "order" | "o" => Ok(ConsoleCommand::ToggleOrder),
            "new" | "n" => Ok(ConsoleCommand::NewGame),
            "show" | "s" => Ok(ConsoleCommand::Show),
            "help" | "h" | "?" => Ok(ConsoleCommand::Help),
            "quit" | "q" | "exit" => Ok(ConsoleCommand::Quit),
            _ => Err(ParseError::Unknown(word.clone())),
        }
    }
}

const HELP: &str = "\
Commands:
  <0-8> | move <0-8>   place the next mark
  jump <step>          view an earlier step
  order                toggle ascending/descending move list
  new                  start a new game
  show                 print the board again
  quit                 leave";

/// Terminal renderer and input loop.
#[derive(Debug, Clone)]
pub struct Console {
    config: AppConfig,
}

impl Console {
    /// Creates a console using the given display settings.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Starts a session using the configured move order.
    pub fn new_session(&self) -> GameSession {
        GameSession::with_order(*self.config.ascending())
    }

    /// Renders board, status and move list.
    #[instrument(skip(self, session))]
    pub fn render(&self, session: &GameSession) -> String {
        let board = session.current_board();
        let winning = session.winning_line();
        let mut lines = Vec::new();

        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .filter_map(|col| Position::from_index(row * 3 + col))
                .map(|pos| match board.get(pos) {
                    Square::Empty => format!(" {} ", pos.to_index()),
                    Square::Occupied(p) if winning.is_some_and(|line| line.contains(&pos)) => {
                        format!("[{}]", p)
                    }
                    Square::Occupied(p) => format!(" {} ", p),
                })
                .collect();
            lines.push(cells.join("|"));
            if row < 2 {
                lines.push("---+---+---".to_string());
            }
        }

        lines.push(session.status().to_string());
        if !session.is_finished() && is_full(board) {
            lines.push("Board full: draw".to_string());
        }

        let order = if session.is_ascending() {
            "Ascending"
        } else {
            "Descending"
        };
        lines.push(format!("Moves ({}):", order));
        for entry in session.move_list() {
            let marker = if entry.highlighted { ">" } else { " " };
            if *self.config.show_locations() {
                lines.push(format!("{} {}  {}", marker, entry.label, entry.location));
            } else {
                lines.push(format!("{} {}", marker, entry.label));
            }
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Applies one command. Returns false when the loop should stop.
    #[instrument(skip(self, session, output))]
    pub fn execute<W: Write>(
        &self,
        session: &mut GameSession,
        command: ConsoleCommand,
        output: &mut W,
    ) -> std::io::Result<bool> {
        let outcome = match command {
            ConsoleCommand::Move(index) => session.attempt_move(index).map(|_| ()),
            ConsoleCommand::Jump(step) => session.jump_to(step),
            ConsoleCommand::ToggleOrder => {
                session.toggle_move_order();
                Ok(())
            }
            ConsoleCommand::NewGame => {
                session.reset();
                Ok(())
            }
            ConsoleCommand::Show => Ok(()),
            ConsoleCommand::Help => {
                writeln!(output, "{}", HELP)?;
                return Ok(true);
            }
            ConsoleCommand::Quit => return Ok(false),
        };

        if let Err(e) = outcome {
            writeln!(output, "Rejected: {}", e)?;
        }
        write!(output, "{}", self.render(session))?;
        Ok(true)
    }

    /// Reads commands line by line until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(
        &self,
        session: &mut GameSession,
        input: R,
        mut output: W,
    ) -> std::io::Result<()> {
        write!(output, "{}", self.render(session))?;
        for line in input.lines() {
            let line = line?;
            match line.parse::<ConsoleCommand>() {
                Ok(command) => {
                    debug!(?command, "Command read");
                    if !self.execute(session, command, &mut output)? {
                        break;
                    }
                }
                Err(ParseError::Empty) => continue,
                Err(e) => writeln!(output, "{} (type 'help')", e)?,
            }
            output.flush()?;
        }
        Ok(())
    }
}

//! Line-oriented game protocol.
//!
//! One command per line on the input, responses on the output:
//!
//! - `START <playerId>` - new game, the AI plays color 1 or 2; replies `OK`
//! - `PLACE <row> <col>` - opponent stone at 0-based coordinates; no reply
//! - `TURN` - the engine picks, prints `<row> <col>` and plays its move
//! - `END` - stop reading
//!
//! Lines that do not parse are skipped without a reply. Extra trailing
//! tokens are ignored.
//!
//! ## Example
//!
//! ```
//! use gobang_ai::config::EngineConfig;
//! use gobang_ai::engine::Engine;
//! use gobang_ai::protocol::Protocol;
//!
//! let config = EngineConfig { search_depth: 1, tt_capacity: 1024, ..Default::default() };
//! let mut protocol = Protocol::new(Engine::new(config).unwrap());
//! let mut out = Vec::new();
//! protocol.run("START 1\nEND\n".as_bytes(), &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "OK\n");
//! ```

use std::io::{self, BufRead, Write};

use log::debug;

use crate::board::{Point, Stone};
use crate::constants::N;
use crate::engine::Engine;

/// A parsed protocol command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start(Stone),
    Place(Point),
    Turn,
    End,
}

/// Why a line was rejected.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty line")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{0}: missing argument")]
    MissingArgument(&'static str),

    #[error("{command}: invalid argument {value:?}")]
    InvalidArgument { command: &'static str, value: String },

    #[error("player id must be 1 or 2 (got {0})")]
    InvalidPlayer(u8),

    #[error("coordinate ({0}, {1}) is off the board")]
    OutOfRange(usize, usize),
}

fn parse_arg<T: std::str::FromStr>(
    command: &'static str,
    arg: Option<&str>,
) -> Result<T, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument(command))?;
    arg.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        value: arg.to_string(),
    })
}

/// Parse one input line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let mut parts = line.split_whitespace();
    let command = parts.next().ok_or(CommandError::Empty)?;

    match command {
        "START" => {
            let id: u8 = parse_arg("START", parts.next())?;
            Stone::from_player_id(id)
                .map(Command::Start)
                .ok_or(CommandError::InvalidPlayer(id))
        }
        "PLACE" => {
            let row: usize = parse_arg("PLACE", parts.next())?;
            let col: usize = parse_arg("PLACE", parts.next())?;
            if row >= N || col >= N {
                return Err(CommandError::OutOfRange(row, col));
            }
            Ok(Command::Place((row, col)))
        }
        "TURN" => Ok(Command::Turn),
        "END" => Ok(Command::End),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Protocol session around one engine.
pub struct Protocol {
    engine: Engine,
    /// Set by the first `START`; `PLACE` and `TURN` are ignored before it.
    started: bool,
}

impl Protocol {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            started: false,
        }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Apply a command and return the response line, if any.
    pub fn execute(&mut self, command: Command) -> Option<String> {
        match command {
            Command::Start(ai) => {
                self.engine.start(ai);
                self.started = true;
                Some("OK".to_string())
            }
            Command::Place(point) => {
                if !self.started {
                    debug!("PLACE before START ignored");
                    return None;
                }
                if !self.engine.board().is_empty(point) {
                    debug!("PLACE on occupied cell {point:?}");
                }
                self.engine.place(point, self.engine.opponent());
                None
            }
            Command::Turn => {
                if !self.started {
                    debug!("TURN before START ignored");
                    return None;
                }
                match self.engine.play_turn() {
                    Some((row, col)) => Some(format!("{row} {col}")),
                    None => {
                        debug!("board is full, no move to play");
                        None
                    }
                }
            }
            Command::End => None,
        }
    }

    /// Read commands until `END` or end of input, flushing after every reply.
    ///
    /// Lines are read as raw bytes; a line that is not valid UTF-8 is
    /// skipped like any other malformed line. Only I/O errors end the loop.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let Ok(line) = std::str::from_utf8(&buf) else {
                debug!("skipping line that is not valid UTF-8");
                continue;
            };
            let command = match parse_command(line) {
                Ok(command) => command,
                Err(CommandError::Empty) => continue,
                Err(e) => {
                    debug!("skipping {line:?}: {e}");
                    continue;
                }
            };

            if command == Command::End {
                break;
            }
            if let Some(response) = self.execute(command) {
                writeln!(output, "{response}")?;
                output.flush()?;
            }
        }
        Ok(())
    }
}

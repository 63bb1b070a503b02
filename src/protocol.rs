//! Line-oriented text protocol for driving a game.
//!
//! Modeled on the command/response shape of GTP so that scripts and simple
//! front ends can play through stdin/stdout. Each command is one line,
//! optionally prefixed with a numeric id. Responses start with `=` on
//! success or `?` on failure, followed by the id (if any), the message and
//! a blank line.
//!
//! ## Supported Commands
//!
//! - `name` - Return engine name
//! - `version` - Return engine version
//! - `protocol_version` - Return protocol version (1)
//! - `list_commands` - List all supported commands
//! - `known_command <cmd>` - Check if a command is supported
//! - `quit` - Exit the command loop
//! - `clear_board` - Start a new game with the same player names
//! - `play <color> <coord>` - Submit a move, e.g. `play black 4,3`
//! - `pass <color>` - Give up the turn (only without a legal move)
//! - `legal <color>` - List legal moves
//! - `score` - Current disc counts
//! - `showboard` - Render the board
//! - `winner` - Final result, once the game is over

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::board::{Color, Coord};
use crate::error::format_coords;
use crate::render::render;
use crate::session::{GameSession, MoveResult};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "clear_board",
    "known_command",
    "legal",
    "list_commands",
    "name",
    "pass",
    "play",
    "protocol_version",
    "quit",
    "score",
    "showboard",
    "version",
    "winner",
];

/// Protocol engine state.
pub struct ProtocolEngine {
    session: GameSession,
    black: String,
    white: String,
}

impl ProtocolEngine {
    pub fn new(black: impl Into<String>, white: impl Into<String>) -> Self {
        let black = black.into();
        let white = white.into();
        Self {
            session: GameSession::new(black.clone(), white.clone()),
            black,
            white,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Run the command loop on stdin/stdout.
    pub fn run_stdio(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        self.run(stdin.lock(), io::stdout())
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            debug!(%command, success, "command handled");

            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            writeln!(output, "{prefix}{id_str} {message}\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Parse an optional numeric command ID from the beginning of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    fn parse_color(args: &[&str]) -> Result<Color, String> {
        let arg = args.first().ok_or_else(|| "missing color".to_string())?;
        arg.parse::<Color>().map_err(|e| e.to_string())
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        match command {
            "name" => (true, "othello-rust".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "1".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(name) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&name.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "clear_board" => {
                self.session = GameSession::new(self.black.clone(), self.white.clone());
                (true, String::new())
            }

            "play" => {
                let color = match Self::parse_color(args) {
                    Ok(color) => color,
                    Err(e) => return (false, e),
                };
                if args.len() < 2 {
                    return (false, "missing coordinate".to_string());
                }
                let coord = match args[1..].join(" ").parse::<Coord>() {
                    Ok(coord) => coord,
                    Err(e) => return (false, e.to_string()),
                };
                match self.session.submit_move(color, coord) {
                    Ok(result) => Self::describe(result),
                    Err(e) => (false, e.to_string()),
                }
            }

            "pass" => match Self::parse_color(args) {
                Ok(color) => Self::describe(self.session.pass(color)),
                Err(e) => (false, e),
            },

            "legal" => match Self::parse_color(args) {
                Ok(color) => (true, format_coords(self.session.legal_moves(color))),
                Err(e) => (false, e),
            },

            "score" => (
                true,
                format!(
                    "black {} white {}",
                    self.session.score(Color::Black),
                    self.session.score(Color::White)
                ),
            ),

            "showboard" => (true, format!("\n{}", render(&self.session))),

            "winner" => match self.session.outcome() {
                Some(outcome) => (true, outcome.to_string()),
                None => (false, "game in progress".to_string()),
            },

            _ => (false, format!("unknown command: {command}")),
        }
    }

    fn describe(result: MoveResult) -> (bool, String) {
        match result {
            MoveResult::Applied { flipped, .. } => (true, format_coords(&flipped)),
            MoveResult::Passed { color } => (true, format!("{color} passes")),
            MoveResult::Invalid { legal_moves } => (
                false,
                format!("illegal move, legal moves: {}", format_coords(&legal_moves)),
            ),
            MoveResult::GameOver(outcome) => (true, format!("game over: {outcome}")),
        }
    }
}

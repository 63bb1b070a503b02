//! Move scripts: plain-text lists of `(color, coordinate)` submissions.
//!
//! One move per line as `<color> <col> <row>` or `<color> <col>,<row>`.
//! Blank lines and lines starting with `#` are skipped.

use crate::board::{Color, Coord};
use crate::error::{ParseError, ScriptError};

/// The 60-move reference game bundled with the crate.
pub const REFERENCE_GAME: &str = include_str!("../demos/reference_game.txt");

/// One scripted submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScriptMove {
    /// 1-based line number in the source text.
    pub line: usize,
    pub color: Color,
    pub coord: Coord,
}

fn parse_line(text: &str) -> Result<(Color, Coord), ParseError> {
    let (color, coord) = text
        .split_once(char::is_whitespace)
        .ok_or_else(|| ParseError::BadMove(text.to_string()))?;
    Ok((color.parse()?, coord.parse()?))
}

/// Parse a whole script.
pub fn parse_script(text: &str) -> Result<Vec<ScriptMove>, ScriptError> {
    let mut moves = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (color, coord) = parse_line(line).map_err(|source| ScriptError {
            line: i + 1,
            source,
        })?;
        moves.push(ScriptMove {
            line: i + 1,
            color,
            coord,
        });
    }
    Ok(moves)
}

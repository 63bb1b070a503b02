//! Error types for board access, move submission and text parsing.

use crate::board::{CellState, Color, Coord};

/// Errors raised by the board and the move engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Coordinate outside the addressable grid (margin included).
    #[error("coordinate {coord} is outside the board")]
    OutOfBounds { coord: Coord },

    /// The coordinate is not a legal move for the color.
    #[error("{color} cannot play at {coord} (legal: {})", format_coords(.legal_moves))]
    InvalidMove {
        color: Color,
        coord: Coord,
        legal_moves: Vec<Coord>,
    },

    /// Direct write onto a margin cell or an occupied cell.
    /// `found` is `None` for margin cells.
    #[error("illegal write at {coord}: {}", describe_target(.found))]
    IllegalWrite { coord: Coord, found: Option<CellState> },
}

/// Errors raised when parsing coordinates and colors from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("invalid coordinate: {0:?}")]
    BadCoord(String),

    #[error("invalid color: {0:?}")]
    BadColor(String),

    #[error("invalid board row: {0}")]
    BadRow(String),

    #[error("expected `<color> <coord>`, got {0:?}")]
    BadMove(String),
}

/// A move script line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {source}")]
pub struct ScriptError {
    pub line: usize,
    #[source]
    pub source: ParseError,
}

pub type Result<T> = std::result::Result<T, GameError>;

/// Format a list of coordinates as `[(c, r), (c, r)]`.
pub fn format_coords(coords: &[Coord]) -> String {
    let items: Vec<String> = coords.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

fn describe_target(found: &Option<CellState>) -> String {
    match found {
        Some(state) => format!("cell holds {state}"),
        None => "margin cell".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_display() {
        let err = GameError::InvalidMove {
            color: Color::Black,
            coord: Coord::new(1, 1),
            legal_moves: vec![Coord::new(3, 4), Coord::new(4, 3)],
        };
        assert_eq!(
            err.to_string(),
            "black cannot play at (1, 1) (legal: [(3, 4), (4, 3)])"
        );
    }

    #[test]
    fn test_out_of_bounds_display() {
        let err = GameError::OutOfBounds {
            coord: Coord::new(10, 2),
        };
        assert_eq!(err.to_string(), "coordinate (10, 2) is outside the board");
    }

    #[test]
    fn test_illegal_write_display() {
        let err = GameError::IllegalWrite {
            coord: Coord::new(0, 3),
            found: None,
        };
        assert_eq!(err.to_string(), "illegal write at (0, 3): margin cell");

        let err = GameError::IllegalWrite {
            coord: Coord::new(4, 4),
            found: Some(CellState::White),
        };
        assert_eq!(err.to_string(), "illegal write at (4, 4): cell holds white");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::BadColor("green".to_string());
        assert_eq!(err.to_string(), "invalid color: \"green\"");
    }
}

//! Text rendering of a session for terminals.
//!
//! The renderer only uses the read-only views a session exposes: the board
//! snapshot, the scores and the cached legal moves.
//!
//! ```text
//! Black:2 | White:2
//! @ c 1 2 3 4 5 6 7 8 @
//! r * * * * * * * * * *
//! 1 * . . . . . . . . *
//! ...
//! 4 * . . . O X . . . *
//! ...
//! @ * * * * * * * * * *
//! Black Moves: [(3, 4), (4, 3), (5, 6), (6, 5)]
//! White Moves: [(3, 5), (4, 6), (5, 3), (6, 4)]
//! ```

use std::fmt;

use crate::board::Color;
use crate::constants::{N, SYMBOL_BORDER};
use crate::error::format_coords;
use crate::session::GameSession;

/// Board with score header and legal-move footer.
pub struct Scoreboard<'a> {
    session: &'a GameSession,
}

impl<'a> Scoreboard<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self { session }
    }
}

fn border_line(f: &mut fmt::Formatter<'_>, label: char) -> fmt::Result {
    write!(f, "{label}")?;
    for _ in 0..N + 2 {
        write!(f, " {SYMBOL_BORDER}")?;
    }
    writeln!(f)
}

impl fmt::Display for Scoreboard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.session;
        writeln!(
            f,
            "Black:{} | White:{}",
            session.score(Color::Black),
            session.score(Color::White)
        )?;

        write!(f, "@ c")?;
        for col in 1..=N {
            write!(f, " {col}")?;
        }
        writeln!(f, " @")?;
        border_line(f, 'r')?;

        let snapshot = session.snapshot();
        for (r, row) in snapshot.rows().iter().enumerate() {
            write!(f, "{} {SYMBOL_BORDER}", r + 1)?;
            for cell in row {
                write!(f, " {}", cell.symbol())?;
            }
            writeln!(f, " {SYMBOL_BORDER}")?;
        }

        border_line(f, '@')?;
        writeln!(
            f,
            "Black Moves: {}",
            format_coords(session.legal_moves(Color::Black))
        )?;
        write!(
            f,
            "White Moves: {}",
            format_coords(session.legal_moves(Color::White))
        )
    }
}

/// Render a session as a multi-line string.
pub fn render(session: &GameSession) -> String {
    Scoreboard::new(session).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Coord;

    #[test]
    fn test_render_initial_board() {
        let session = GameSession::new("Leo", "Helen");
        let text = render(&session);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "Black:2 | White:2");
        assert_eq!(lines[1], "@ c 1 2 3 4 5 6 7 8 @");
        assert_eq!(lines[2], "r * * * * * * * * * *");
        assert_eq!(lines[3], "1 * . . . . . . . . *");
        assert_eq!(lines[6], "4 * . . . O X . . . *");
        assert_eq!(lines[7], "5 * . . . X O . . . *");
        assert_eq!(lines[11], "@ * * * * * * * * * *");
        assert_eq!(lines[12], "Black Moves: [(3, 4), (4, 3), (5, 6), (6, 5)]");
        assert_eq!(lines[13], "White Moves: [(3, 5), (4, 6), (5, 3), (6, 4)]");
    }

    #[test]
    fn test_render_after_move() {
        let mut session = GameSession::new("Leo", "Helen");
        session.submit_move(Color::Black, Coord::new(4, 3)).unwrap();
        let text = render(&session);
        assert!(text.starts_with("Black:4 | White:1\n"));
        assert!(text.contains("3 * . . . X . . . . *"));
        assert!(text.contains("4 * . . . X X . . . *"));
    }
}

//! Directional capture scans.
//!
//! A ray starts next to the origin cell and walks outward one cell at a time.
//! It is capturable when it crosses at least one opponent disc and then hits
//! a disc of the acting color. Reaching an Empty cell or the margin first
//! makes the ray worthless, whatever it crossed on the way.
//!
//! Everything here only reads the board.

use crate::board::{Board, CellState, Color, Coord, Direction};
use crate::constants::DIRECTIONS;

/// Result of walking one ray from an origin cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan {
    pub direction: Direction,
    /// Opponent cells crossed before the walk stopped, nearest first.
    pub traversed: Vec<Coord>,
    /// True when the walk ended on a disc of the acting color after
    /// crossing at least one opponent disc.
    pub capturable: bool,
}

impl Scan {
    /// Cells that would be flipped along this ray: the traversed run when
    /// capturable, nothing otherwise.
    pub fn captures(&self) -> &[Coord] {
        if self.capturable { &self.traversed } else { &[] }
    }
}

/// What the walker found at the next cell of a ray.
enum Step {
    Opponent(Coord),
    Own,
    Blocked,
}

fn next_step(board: &Board, at: Coord, dir: Direction, color: Color) -> Step {
    let Some(next) = at.step(dir).filter(|c| c.is_interior()) else {
        return Step::Blocked;
    };
    match board.cell(next) {
        CellState::Empty => Step::Blocked,
        state if state == color.piece() => Step::Own,
        _ => Step::Opponent(next),
    }
}

/// Walk one ray from `origin` and record the opponent run it crosses.
pub fn scan_direction(board: &Board, origin: Coord, dir: Direction, color: Color) -> Scan {
    let mut traversed = Vec::new();
    let mut at = origin;
    let capturable = loop {
        match next_step(board, at, dir, color) {
            Step::Opponent(coord) => {
                traversed.push(coord);
                at = coord;
            }
            Step::Own => break !traversed.is_empty(),
            Step::Blocked => break false,
        }
    };
    Scan {
        direction: dir,
        traversed,
        capturable,
    }
}

/// Same answer as `scan_direction(..).capturable`, without collecting cells.
pub fn is_capturable(board: &Board, origin: Coord, dir: Direction, color: Color) -> bool {
    let mut count = 0;
    let mut at = origin;
    loop {
        match next_step(board, at, dir, color) {
            Step::Opponent(coord) => {
                count += 1;
                at = coord;
            }
            Step::Own => return count > 0,
            Step::Blocked => return false,
        }
    }
}

/// Scan all eight directions from `origin`.
pub fn scan_all(board: &Board, origin: Coord, color: Color) -> Vec<Scan> {
    DIRECTIONS
        .iter()
        .map(|&dir| scan_direction(board, origin, dir, color))
        .collect()
}

/// True when any of the eight rays from `origin` is capturable.
pub fn any_capturable(board: &Board, origin: Coord, color: Color) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| is_capturable(board, origin, dir, color))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UP: Direction = Direction::new(0, -1);
    const DOWN: Direction = Direction::new(0, 1);
    const RIGHT: Direction = Direction::new(1, 0);
    const LEFT: Direction = Direction::new(-1, 0);

    fn board(rows: [&str; 8]) -> Board {
        Board::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_initial_board_capture_down() {
        let b = Board::new();
        let scan = scan_direction(&b, Coord::new(4, 3), DOWN, Color::Black);
        assert!(scan.capturable);
        assert_eq!(scan.traversed, vec![Coord::new(4, 4)]);
        assert_eq!(scan.captures(), &[Coord::new(4, 4)]);
    }

    #[test]
    fn test_adjacent_own_disc_is_not_capturable() {
        let b = Board::new();
        // (4,6) sits directly below Black's (4,5).
        let scan = scan_direction(&b, Coord::new(4, 6), UP, Color::Black);
        assert!(!scan.capturable);
        assert!(scan.traversed.is_empty());
    }

    #[test]
    fn test_run_ending_on_empty_is_not_capturable() {
        let b = board([
            "........",
            "........",
            "........",
            ".XOO....",
            "........",
            "........",
            "........",
            "........",
        ]);
        let scan = scan_direction(&b, Coord::new(2, 4), RIGHT, Color::Black);
        assert!(!scan.capturable);
        assert_eq!(scan.traversed, vec![Coord::new(3, 4), Coord::new(4, 4)]);
        assert!(scan.captures().is_empty());
    }

    #[test]
    fn test_run_ending_on_margin_is_not_capturable() {
        let b = board([
            "........",
            "........",
            "........",
            "....OOOO",
            "........",
            "........",
            "........",
            "........",
        ]);
        assert!(!is_capturable(&b, Coord::new(4, 4), RIGHT, Color::Black));
        let scan = scan_direction(&b, Coord::new(4, 4), RIGHT, Color::Black);
        assert_eq!(scan.traversed.len(), 4);
        assert!(!scan.capturable);
    }

    #[test]
    fn test_edge_origin_facing_margin() {
        let b = Board::new();
        assert!(!is_capturable(&b, Coord::new(1, 1), LEFT, Color::Black));
        assert!(!is_capturable(&b, Coord::new(1, 1), UP, Color::White));
        assert!(!any_capturable(&b, Coord::new(1, 1), Color::Black));
    }

    #[test]
    fn test_long_run_across_the_board() {
        let b = board([
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            ".OOOOOOX",
        ]);
        let scan = scan_direction(&b, Coord::new(1, 8), RIGHT, Color::Black);
        assert!(scan.capturable);
        assert_eq!(scan.captures().len(), 6);
        assert_eq!(scan.captures()[0], Coord::new(2, 8));
        assert_eq!(scan.captures()[5], Coord::new(7, 8));
    }

    #[test]
    fn test_scan_all_agrees_with_is_capturable() {
        let b = board([
            "X.X.X...",
            ".OOO....",
            "XO.OX...",
            ".OOO....",
            "X.X.X...",
            "........",
            "........",
            "........",
        ]);
        let origin = Coord::new(3, 3);
        let scans = scan_all(&b, origin, Color::Black);
        assert_eq!(scans.len(), 8);
        for scan in &scans {
            assert_eq!(
                scan.capturable,
                is_capturable(&b, origin, scan.direction, Color::Black)
            );
            assert!(scan.capturable, "direction {:?}", scan.direction);
            assert_eq!(scan.captures().len(), 1);
        }
        // For White every neighbor is its own disc.
        assert!(!any_capturable(&b, origin, Color::White));
    }
}

//! Move legality, legal-move enumeration and move execution.
//!
//! A move is legal when the target cell is Empty and at least one of the
//! eight rays from it is capturable. Executing a move places the disc and
//! flips the captured run of every capturable ray. Flip sets are computed
//! in full before the board is touched, so a move either completes or
//! leaves the board as it was.

use tracing::{debug, instrument};

use crate::board::{Board, Color, Coord};
use crate::error::{GameError, Result};
use crate::scan::{any_capturable, scan_all};

/// Check whether `color` may play at `coord`.
pub fn is_legal(board: &Board, color: Color, coord: Coord) -> bool {
    board.is_empty(coord) && any_capturable(board, coord, color)
}

/// All legal moves for `color`, in column-major order:
/// (1,1), (1,2), ..., (1,8), (2,1), ...
pub fn legal_moves(board: &Board, color: Color) -> Vec<Coord> {
    Coord::interior()
        .filter(|&coord| is_legal(board, color, coord))
        .collect()
}

/// True when `color` has at least one legal move.
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    Coord::interior().any(|coord| is_legal(board, color, coord))
}

/// Discs that playing `color` at `coord` would flip, ray by ray in
/// direction order. Empty when the move is not legal.
pub fn flips(board: &Board, color: Color, coord: Coord) -> Vec<Coord> {
    if !board.is_empty(coord) {
        return Vec::new();
    }
    scan_all(board, coord, color)
        .iter()
        .flat_map(|scan| scan.captures().iter().copied())
        .collect()
}

/// Place a disc of `color` at `coord` and flip every captured run.
///
/// Returns the flipped cells. Fails with `InvalidMove` (carrying the legal
/// moves for `color`) without touching the board when the move is not legal.
#[instrument(level = "debug", skip(board))]
pub fn apply(board: &mut Board, color: Color, coord: Coord) -> Result<Vec<Coord>> {
    let flipped = flips(board, color, coord);
    if flipped.is_empty() {
        return Err(GameError::InvalidMove {
            color,
            coord,
            legal_moves: legal_moves(board, color),
        });
    }

    board.set(coord, color.piece())?;
    for &cell in &flipped {
        board.flip(cell, color);
    }
    debug!(flipped = flipped.len(), "move applied");
    Ok(flipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellState;
    use crate::constants::{CELLS, DIRECTIONS};
    use crate::scan::{is_capturable, scan_direction};

    fn board(rows: [&str; 8]) -> Board {
        Board::from_rows(&rows).unwrap()
    }

    #[test]
    fn test_initial_legal_moves() {
        let b = Board::new();
        assert_eq!(
            legal_moves(&b, Color::Black),
            vec![
                Coord::new(3, 4),
                Coord::new(4, 3),
                Coord::new(5, 6),
                Coord::new(6, 5)
            ]
        );
        assert_eq!(
            legal_moves(&b, Color::White),
            vec![
                Coord::new(3, 5),
                Coord::new(4, 6),
                Coord::new(5, 3),
                Coord::new(6, 4)
            ]
        );
    }

    #[test]
    fn test_occupied_cell_is_never_legal() {
        let b = Board::new();
        assert!(!is_legal(&b, Color::Black, Coord::new(4, 4)));
        assert!(!is_legal(&b, Color::White, Coord::new(4, 5)));
        assert!(flips(&b, Color::Black, Coord::new(4, 4)).is_empty());
    }

    #[test]
    fn test_margin_is_never_legal() {
        let b = Board::new();
        assert!(!is_legal(&b, Color::Black, Coord::new(0, 4)));
        assert!(!is_legal(&b, Color::Black, Coord::new(9, 9)));
    }

    #[test]
    fn test_apply_opening_move() {
        let mut b = Board::new();
        let flipped = apply(&mut b, Color::Black, Coord::new(4, 3)).unwrap();
        assert_eq!(flipped, vec![Coord::new(4, 4)]);
        assert_eq!(b.get(Coord::new(4, 3)), Ok(CellState::Black));
        assert_eq!(b.get(Coord::new(4, 4)), Ok(CellState::Black));
        assert_eq!(b.count_color(Color::Black), 4);
        assert_eq!(b.count_color(Color::White), 1);
    }

    #[test]
    fn test_apply_illegal_leaves_board_untouched() {
        let mut b = Board::new();
        let before = b.clone();
        let err = apply(&mut b, Color::Black, Coord::new(1, 1)).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidMove {
                color: Color::Black,
                coord: Coord::new(1, 1),
                legal_moves: legal_moves(&before, Color::Black),
            }
        );
        assert_eq!(b, before);

        let err = apply(&mut b, Color::White, Coord::new(4, 4)).unwrap_err();
        assert!(matches!(err, GameError::InvalidMove { .. }));
        assert_eq!(b, before);
    }

    #[test]
    fn test_apply_flips_several_directions_independently() {
        // Black at (4,4) captures right and down. The down-right run ends
        // on Empty and the upward run ends on the margin.
        let mut b = board([
            "...O....",
            "...O.O..",
            "...O....",
            "....OOX.",
            "...OO...",
            "...X.O..",
            "........",
            "........",
        ]);
        let flipped = apply(&mut b, Color::Black, Coord::new(4, 4)).unwrap();
        assert_eq!(
            flipped,
            vec![Coord::new(5, 4), Coord::new(6, 4), Coord::new(4, 5)]
        );
        assert_eq!(b.get(Coord::new(4, 3)), Ok(CellState::White));
        assert_eq!(b.get(Coord::new(5, 5)), Ok(CellState::White));
        assert_eq!(b.get(Coord::new(6, 6)), Ok(CellState::White));
        assert_eq!(b.get(Coord::new(6, 2)), Ok(CellState::White));
        assert_eq!(b.count_color(Color::Black), 6);
    }

    #[test]
    fn test_legality_matches_direction_enumeration() {
        let b = board([
            "..O.....",
            ".XOX....",
            "..OOO...",
            "..XOX...",
            "...O.O..",
            "..O...X.",
            ".......O",
            "........",
        ]);
        for color in Color::ALL {
            for coord in Coord::interior() {
                let by_rays = b.is_empty(coord)
                    && DIRECTIONS
                        .iter()
                        .any(|&dir| is_capturable(&b, coord, dir, color));
                assert_eq!(is_legal(&b, color, coord), by_rays, "{color} at {coord}");
            }
        }
    }

    #[test]
    fn test_apply_leaves_no_capturable_run_behind() {
        let mut b = Board::new();
        for (color, coord) in [
            (Color::Black, Coord::new(4, 3)),
            (Color::White, Coord::new(5, 3)),
            (Color::Black, Coord::new(6, 6)),
            (Color::White, Coord::new(3, 2)),
        ] {
            apply(&mut b, color, coord).unwrap();
            for &dir in &DIRECTIONS {
                let scan = scan_direction(&b, coord, dir, color);
                assert!(
                    !scan.capturable,
                    "run left unflipped from {coord} towards {dir:?}"
                );
            }
            let total = b.count(CellState::Empty)
                + b.count_color(Color::Black)
                + b.count_color(Color::White);
            assert_eq!(total, CELLS);
        }
    }
}

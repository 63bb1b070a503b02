//! Constants for board geometry, the starting layout and piece symbols.
//!
//! The board is stored as a (N + 2) x (N + 2) grid: the playable N x N area
//! is surrounded by a one-cell margin that never holds a disc. Directional
//! scans can step onto the margin without any index arithmetic going
//! negative, and stop there.

use crate::board::{Color, Coord, Direction};

// =============================================================================
// Board Geometry
// =============================================================================

/// Playable board size (NxN).
pub const N: usize = 8;

/// Grid width including the margin on both sides.
pub const W: usize = N + 2;

/// Number of playable cells.
pub const CELLS: usize = N * N;

/// First playable row/column index (1-based coordinates).
pub const MIN_INDEX: u8 = 1;

/// Last playable row/column index.
pub const MAX_INDEX: u8 = N as u8;

/// Last addressable index, margin included.
pub const MARGIN_MAX: u8 = (W - 1) as u8;

// =============================================================================
// Starting Layout
// =============================================================================

/// The four center discs present at the start of every game.
///
/// Same colors sit on a diagonal: White on (4,4) and (5,5), Black on (5,4)
/// and (4,5).
pub const START_LAYOUT: [(Coord, Color); 4] = [
    (Coord::new(4, 4), Color::White),
    (Coord::new(5, 4), Color::Black),
    (Coord::new(4, 5), Color::Black),
    (Coord::new(5, 5), Color::White),
];

/// Color that makes the first move on the standard starting board.
pub const FIRST_MOVER: Color = Color::Black;

// =============================================================================
// Directions
// =============================================================================

/// The eight unit vectors around a cell.
/// Order: NW, N, NE, W, E, SW, S, SE (row grows downward).
pub const DIRECTIONS: [Direction; 8] = [
    Direction::new(-1, -1),
    Direction::new(0, -1),
    Direction::new(1, -1),
    Direction::new(-1, 0),
    Direction::new(1, 0),
    Direction::new(-1, 1),
    Direction::new(0, 1),
    Direction::new(1, 1),
];

// =============================================================================
// Piece Symbols
// =============================================================================

/// Black disc.
pub const SYMBOL_BLACK: char = 'X';

/// White disc.
pub const SYMBOL_WHITE: char = 'O';

/// Empty cell.
pub const SYMBOL_EMPTY: char = '.';

/// Board border in rendered output.
pub const SYMBOL_BORDER: char = '*';

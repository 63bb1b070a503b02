//! Board state: colors, cells, coordinates and the padded 10x10 grid.
//!
//! Coordinates are 1-based `(col, row)` pairs. Rows and columns 0 and 9 form
//! the margin: they can be addressed by reads (a scan that walks off the
//! playable area lands there) but never hold a disc and never accept writes.

use std::fmt;
use std::str::FromStr;

use crate::constants::*;
use crate::error::{GameError, ParseError, Result};

/// One of the two players' disc colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// Both colors, in first-mover order.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn opponent(self) -> Color {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// The cell state a disc of this color occupies.
    pub fn piece(self) -> CellState {
        match self {
            Color::Black => CellState::Black,
            Color::White => CellState::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Color::Black),
            "white" | "w" | "o" => Ok(Color::White),
            _ => Err(ParseError::BadColor(s.to_string())),
        }
    }
}

/// State of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Black,
    White,
}

impl CellState {
    /// Color of the disc in this cell, if any.
    pub fn color(self) -> Option<Color> {
        match self {
            CellState::Empty => None,
            CellState::Black => Some(Color::Black),
            CellState::White => Some(Color::White),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => SYMBOL_EMPTY,
            CellState::Black => SYMBOL_BLACK,
            CellState::White => SYMBOL_WHITE,
        }
    }

    fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            SYMBOL_EMPTY => Some(CellState::Empty),
            SYMBOL_BLACK => Some(CellState::Black),
            SYMBOL_WHITE => Some(CellState::White),
            _ => None,
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color() {
            Some(color) => write!(f, "{color}"),
            None => write!(f, "empty"),
        }
    }
}

/// A unit step between neighboring cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dc: i8,
    pub dr: i8,
}

impl Direction {
    pub const fn new(dc: i8, dr: i8) -> Self {
        Self { dc, dr }
    }
}

/// A 1-based `(col, row)` board coordinate.
///
/// Values 1..=8 are playable; 0 and 9 address the margin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub col: u8,
    pub row: u8,
}

impl Coord {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// True for the 8x8 playable area.
    pub fn is_interior(self) -> bool {
        (MIN_INDEX..=MAX_INDEX).contains(&self.col) && (MIN_INDEX..=MAX_INDEX).contains(&self.row)
    }

    /// True for any cell of the padded grid, margin included.
    pub fn is_addressable(self) -> bool {
        self.col <= MARGIN_MAX && self.row <= MARGIN_MAX
    }

    /// The neighboring coordinate in `dir`, or `None` when the step leaves
    /// the padded grid.
    pub fn step(self, dir: Direction) -> Option<Coord> {
        let col = self.col.checked_add_signed(dir.dc)?;
        let row = self.row.checked_add_signed(dir.dr)?;
        let next = Coord::new(col, row);
        next.is_addressable().then_some(next)
    }

    /// All playable coordinates in column-major order: (1,1), (1,2), ..., (8,8).
    pub fn interior() -> impl Iterator<Item = Coord> {
        (MIN_INDEX..=MAX_INDEX)
            .flat_map(|col| (MIN_INDEX..=MAX_INDEX).map(move |row| Coord::new(col, row)))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl FromStr for Coord {
    type Err = ParseError;

    /// Accepts `"c,r"`, `"c r"` and `"(c, r)"`. Only playable coordinates parse.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let bad = || ParseError::BadCoord(s.to_string());
        let inner = s.trim().trim_start_matches('(').trim_end_matches(')');
        let parts: Vec<&str> = inner
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        let [col, row] = parts.as_slice() else {
            return Err(bad());
        };
        let col: u8 = col.parse().map_err(|_| bad())?;
        let row: u8 = row.parse().map_err(|_| bad())?;
        let coord = Coord::new(col, row);
        if coord.is_interior() { Ok(coord) } else { Err(bad()) }
    }
}

/// The padded board grid, indexed `[row][col]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[CellState; W]; W],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard starting board with the four center discs.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (coord, color) in START_LAYOUT {
            board.cells[coord.row as usize][coord.col as usize] = color.piece();
        }
        board
    }

    /// Board with no discs at all.
    pub fn empty() -> Self {
        Self {
            cells: [[CellState::Empty; W]; W],
        }
    }

    /// Build a board from eight row strings of `X`, `O` and `.` (spaces are
    /// ignored). The first string is row 1.
    pub fn from_rows(rows: &[&str; N]) -> std::result::Result<Self, ParseError> {
        let mut board = Self::empty();
        for (r, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != N {
                return Err(ParseError::BadRow(format!("row {}: {line:?}", r + 1)));
            }
            for (c, ch) in symbols.into_iter().enumerate() {
                let state = CellState::from_symbol(ch)
                    .ok_or_else(|| ParseError::BadRow(format!("row {}: {line:?}", r + 1)))?;
                board.cells[r + 1][c + 1] = state;
            }
        }
        Ok(board)
    }

    /// Read any addressable cell. Margin cells read as `Empty`.
    pub fn get(&self, coord: Coord) -> Result<CellState> {
        if !coord.is_addressable() {
            return Err(GameError::OutOfBounds { coord });
        }
        Ok(self.cell(coord))
    }

    /// Unchecked read for coordinates already known to be addressable.
    pub(crate) fn cell(&self, coord: Coord) -> CellState {
        self.cells[coord.row as usize][coord.col as usize]
    }

    /// Write a cell of the playable area.
    ///
    /// Only Empty interior cells accept a write; margin cells and occupied
    /// cells are rejected with `IllegalWrite`.
    pub fn set(&mut self, coord: Coord, state: CellState) -> Result<()> {
        if !coord.is_addressable() {
            return Err(GameError::OutOfBounds { coord });
        }
        if !coord.is_interior() {
            return Err(GameError::IllegalWrite { coord, found: None });
        }
        let current = self.cell(coord);
        if current != CellState::Empty {
            return Err(GameError::IllegalWrite {
                coord,
                found: Some(current),
            });
        }
        self.cells[coord.row as usize][coord.col as usize] = state;
        Ok(())
    }

    /// Turn an opponent disc over to `color`.
    pub(crate) fn flip(&mut self, coord: Coord, color: Color) {
        debug_assert!(coord.is_interior(), "flip on margin cell {coord}");
        debug_assert_eq!(
            self.cell(coord),
            color.opponent().piece(),
            "flip target {coord} does not hold an opponent disc"
        );
        self.cells[coord.row as usize][coord.col as usize] = color.piece();
    }

    /// True for an Empty playable cell. Margin cells are never empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        coord.is_interior() && self.cell(coord) == CellState::Empty
    }

    /// True when no playable cell is Empty.
    pub fn is_full(&self) -> bool {
        self.count(CellState::Empty) == 0
    }

    /// Number of playable cells holding `state`.
    pub fn count(&self, state: CellState) -> usize {
        Coord::interior().filter(|&c| self.cell(c) == state).count()
    }

    /// Number of discs of `color` on the board.
    pub fn count_color(&self, color: Color) -> usize {
        self.count(color.piece())
    }

    /// Read-only copy of the playable area for renderers.
    pub fn snapshot(&self) -> Snapshot {
        let mut cells = [[CellState::Empty; N]; N];
        for coord in Coord::interior() {
            cells[coord.row as usize - 1][coord.col as usize - 1] = self.cell(coord);
        }
        Snapshot { cells }
    }
}

/// Immutable 8x8 copy of the playable area, indexed `[row - 1][col - 1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    cells: [[CellState; N]; N],
}

impl Snapshot {
    /// Cell at a playable coordinate, `None` outside the playable area.
    pub fn get(&self, coord: Coord) -> Option<CellState> {
        coord
            .is_interior()
            .then(|| self.cells[coord.row as usize - 1][coord.col as usize - 1])
    }

    /// Rows from top (row 1) to bottom (row 8).
    pub fn rows(&self) -> &[[CellState; N]; N] {
        &self.cells
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().flatten().filter(|&&c| c == state).count()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                write!(f, "{} ", cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

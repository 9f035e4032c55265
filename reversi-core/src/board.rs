//! Board geometry for the hex and square topologies
//!
//! Both boards are stored in a square grid addressed by (row, col). The hex
//! board occupies a diamond-shaped region of its grid: cell (row, col) maps to
//! axial coordinates q = col - (side_len - 1), r = row - (side_len - 1), and is
//! playable when |q|, |r| and |q + r| are all at most side_len - 1.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ReversiError};
use crate::tile::Tile;

/// Smallest hex board that can hold the starting pattern
pub const MIN_HEX_SIDE_LEN: usize = 3;

/// Largest hex board accepted; keeps the storage grid allocation bounded
pub const MAX_HEX_SIDE_LEN: usize = 64;

/// Square boards are always 8x8
pub const SQUARE_SIDE_LEN: usize = 8;

/// Step between neighboring cells as (delta row, delta col)
pub type Direction = (isize, isize);

/// Hex directions, starting at upper-left and proceeding clockwise
pub const HEX_DIRECTIONS: [Direction; 6] = [
    (-1, 0), // upper-left
    (-1, 1), // upper-right
    (0, 1),  // right
    (1, 0),  // lower-right
    (1, -1), // lower-left
    (0, -1), // left
];

/// Square directions in row-major order
pub const SQUARE_DIRECTIONS: [Direction; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// ============================================================================
// COORDINATES
// ============================================================================

/// A cell in the 0-based storage grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step once in `direction`; `None` if that leaves the grid's top or left edge
    pub fn offset(self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction;
        Some(Position::new(
            self.row.checked_add_signed(dr)?,
            self.col.checked_add_signed(dc)?,
        ))
    }

    /// Euclidean distance in grid space
    pub fn distance_to(self, other: Position) -> f64 {
        let dr = self.row as f64 - other.row as f64;
        let dc = self.col as f64 - other.col as f64;
        dr.hypot(dc)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Axial hex coordinates, centered on the middle cell of a hex board
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxialCoord {
    pub q: i32,
    pub r: i32,
}

impl AxialCoord {
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub fn from_position(pos: Position, side_len: usize) -> Self {
        let center = side_len as i32 - 1;
        Self::new(pos.col as i32 - center, pos.row as i32 - center)
    }

    /// Inverse of [`AxialCoord::from_position`]; `None` when the cell would
    /// fall before the first row or column
    pub fn to_position(self, side_len: usize) -> Option<Position> {
        let center = side_len as i32 - 1;
        let row = usize::try_from(self.r + center).ok()?;
        let col = usize::try_from(self.q + center).ok()?;
        Some(Position::new(row, col))
    }

    /// Check if this coordinate lies on a hex board of the given side length
    pub fn is_valid(&self, side_len: usize) -> bool {
        let radius = side_len as i32 - 1;
        self.q.abs() <= radius && self.r.abs() <= radius && (self.q + self.r).abs() <= radius
    }
}

impl fmt::Display for AxialCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}

// ============================================================================
// GEOMETRY
// ============================================================================

/// Board shape
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    Hex,
    Square,
}

/// Shape-specific facts the engine and the AI rely on
pub trait Geometry: fmt::Debug {
    fn topology(&self) -> Topology;

    fn side_len(&self) -> usize;

    /// Side of the square storage grid
    fn board_len(&self) -> usize;

    /// Neighbor offsets; this order is the iteration order of every scan
    fn directions(&self) -> &'static [Direction];

    /// Whether an in-grid cell belongs to the playable shape
    fn in_shape(&self, pos: Position) -> bool;

    fn corners(&self) -> Vec<Position>;

    fn starting_tiles(&self) -> Vec<(Position, Tile)>;

    /// Fixed point that AI tie-breaks measure distance from
    fn reference_point(&self) -> Position;

    fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.board_len() && pos.col < self.board_len() && self.in_shape(pos)
    }

    /// Neighbor of `pos` in `direction`, if it is playable
    fn step(&self, pos: Position, direction: Direction) -> Option<Position> {
        pos.offset(direction).filter(|next| self.in_bounds(*next))
    }

    /// Playable neighbors in direction order
    fn neighbors(&self, pos: Position) -> Vec<Position> {
        self.directions()
            .iter()
            .filter_map(|&dir| self.step(pos, dir))
            .collect()
    }

    fn is_corner(&self, pos: Position) -> bool {
        self.corners().contains(&pos)
    }

    /// All playable cells in row-major order
    fn cells(&self) -> Vec<Position> {
        let len = self.board_len();
        (0..len)
            .flat_map(|row| (0..len).map(move |col| Position::new(row, col)))
            .filter(|pos| self.in_shape(*pos))
            .collect()
    }
}

/// Hexagonal board with `side_len` cells along each edge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexGeometry {
    side_len: usize,
}

impl HexGeometry {
    pub fn new(side_len: usize) -> Result<Self> {
        if !(MIN_HEX_SIDE_LEN..=MAX_HEX_SIDE_LEN).contains(&side_len) {
            return Err(ReversiError::InvalidSideLength(side_len));
        }
        Ok(Self { side_len })
    }

    /// Distance from the center cell to an edge
    fn radius(&self) -> usize {
        self.side_len - 1
    }
}

impl Geometry for HexGeometry {
    fn topology(&self) -> Topology {
        Topology::Hex
    }

    fn side_len(&self) -> usize {
        self.side_len
    }

    fn board_len(&self) -> usize {
        2 * self.side_len - 1
    }

    fn directions(&self) -> &'static [Direction] {
        &HEX_DIRECTIONS
    }

    fn in_shape(&self, pos: Position) -> bool {
        AxialCoord::from_position(pos, self.side_len).is_valid(self.side_len)
    }

    fn corners(&self) -> Vec<Position> {
        let s = self.radius();
        let b = self.board_len() - 1;
        vec![
            Position::new(0, s),
            Position::new(0, b),
            Position::new(s, b),
            Position::new(b, s),
            Position::new(b, 0),
            Position::new(s, 0),
        ]
    }

    fn starting_tiles(&self) -> Vec<(Position, Tile)> {
        let s = self.radius();
        vec![
            (Position::new(s - 1, s), Tile::First),
            (Position::new(s, s + 1), Tile::First),
            (Position::new(s + 1, s - 1), Tile::First),
            (Position::new(s - 1, s + 1), Tile::Second),
            (Position::new(s, s - 1), Tile::Second),
            (Position::new(s + 1, s), Tile::Second),
        ]
    }

    fn reference_point(&self) -> Position {
        Position::new(0, self.radius())
    }
}

/// The classic 8x8 board
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SquareGeometry;

impl Geometry for SquareGeometry {
    fn topology(&self) -> Topology {
        Topology::Square
    }

    fn side_len(&self) -> usize {
        SQUARE_SIDE_LEN
    }

    fn board_len(&self) -> usize {
        SQUARE_SIDE_LEN
    }

    fn directions(&self) -> &'static [Direction] {
        &SQUARE_DIRECTIONS
    }

    fn in_shape(&self, _pos: Position) -> bool {
        true
    }

    fn corners(&self) -> Vec<Position> {
        let b = SQUARE_SIDE_LEN - 1;
        vec![
            Position::new(0, 0),
            Position::new(0, b),
            Position::new(b, 0),
            Position::new(b, b),
        ]
    }

    fn starting_tiles(&self) -> Vec<(Position, Tile)> {
        let m = SQUARE_SIDE_LEN / 2;
        vec![
            (Position::new(m - 1, m - 1), Tile::First),
            (Position::new(m, m), Tile::First),
            (Position::new(m - 1, m), Tile::Second),
            (Position::new(m, m - 1), Tile::Second),
        ]
    }

    fn reference_point(&self) -> Position {
        Position::new(0, 0)
    }
}

// ============================================================================
// BOARD STORAGE
// ============================================================================

/// Grid of tiles; `None` marks cells outside the playable shape
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    board_len: usize,
    cells: Vec<Option<Tile>>,
}

impl Board {
    /// Empty board covering the geometry's playable shape
    pub fn new<G: Geometry + ?Sized>(geometry: &G) -> Self {
        let board_len = geometry.board_len();
        let cells = (0..board_len * board_len)
            .map(|i| {
                let pos = Position::new(i / board_len, i % board_len);
                geometry.in_shape(pos).then_some(Tile::Empty)
            })
            .collect();
        Self { board_len, cells }
    }

    pub fn board_len(&self) -> usize {
        self.board_len
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.board_len && pos.col < self.board_len)
            .then(|| pos.row * self.board_len + pos.col)
    }

    /// Tile at `pos`, or `None` if the cell is not playable
    pub fn get(&self, pos: Position) -> Option<Tile> {
        self.index(pos).and_then(|i| self.cells[i])
    }

    /// Overwrite a playable cell; cells outside the shape are left alone
    pub(crate) fn set(&mut self, pos: Position, tile: Tile) {
        if let Some(i) = self.index(pos) {
            if self.cells[i].is_some() {
                self.cells[i] = Some(tile);
            }
        }
    }

    /// Number of playable cells holding `tile`
    pub fn count(&self, tile: Tile) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(tile)).count()
    }

    /// Storage rows, including the non-playable cells
    pub fn rows(&self) -> impl Iterator<Item = &[Option<Tile>]> + '_ {
        self.cells.chunks(self.board_len)
    }

    /// Playable cells with their tiles, row-major
    pub fn cells(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        let len = self.board_len;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|tile| (Position::new(i / len, i % len), tile)))
    }
}

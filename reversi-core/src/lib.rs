//! Reversi Core - Game engine and AI
//!
//! This crate provides the rules of Reversi on two board shapes:
//! - Board geometry (hexagonal board with axial coordinates, 8x8 square board)
//! - Tile colors
//! - Game state, legality, captures and the turn/pass state machine
//! - Rule-based AI (corner seeking, corner-neighbor avoidance, maximum capture)

pub mod tile;
pub mod board;
pub mod error;
pub mod game;
pub mod ai;

// Re-exports for convenient access
pub use tile::Tile;
pub use board::{
    AxialCoord, Board, Direction, Geometry, HexGeometry, Position, SquareGeometry, Topology,
    HEX_DIRECTIONS, MAX_HEX_SIDE_LEN, MIN_HEX_SIDE_LEN, SQUARE_DIRECTIONS, SQUARE_SIDE_LEN,
};
pub use error::{ErrorKind, Result, ReversiError};
pub use game::{HexReversi, ReadonlyReversi, Reversi, SquareReversi, TurnListener};
pub use ai::{
    chained_move, AiPlayer, AvoidCornerNeighbors, CaptureMostPieces, GoForCorners, Strategy,
};

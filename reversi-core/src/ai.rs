//! Rule-based move selection
//!
//! Three fixed heuristics, each a pure query against a [`ReadonlyReversi`].
//! Ties go to the candidate closest to the board's reference point, then to
//! the first candidate in row-major order.

use rustc_hash::FxHashSet;

use crate::board::Position;
use crate::game::ReadonlyReversi;
use crate::tile::Tile;

/// Order in which [`chained_move`] consults the heuristics
const CHAIN: [&dyn Strategy; 3] = [&AvoidCornerNeighbors, &GoForCorners, &CaptureMostPieces];

// ============================================================================
// STRATEGIES
// ============================================================================

/// A heuristic that may decline to pick a move
pub trait Strategy {
    fn name(&self) -> &'static str;

    /// A legal move for `color`, or `None` if the heuristic has no opinion
    fn choose_move(&self, model: &dyn ReadonlyReversi, color: Tile) -> Option<Position>;
}

/// Take a corner whenever one is available
#[derive(Clone, Copy, Debug, Default)]
pub struct GoForCorners;

impl Strategy for GoForCorners {
    fn name(&self) -> &'static str {
        "go-for-corners"
    }

    fn choose_move(&self, model: &dyn ReadonlyReversi, color: Tile) -> Option<Position> {
        let moves = model.legal_moves(color).ok()?;
        closest_to_reference(
            model,
            moves.into_iter().filter(|mv| model.is_corner(mv.row, mv.col)),
        )
    }
}

/// Never play next to a corner, which would open it to the opponent
#[derive(Clone, Copy, Debug, Default)]
pub struct AvoidCornerNeighbors;

impl Strategy for AvoidCornerNeighbors {
    fn name(&self) -> &'static str {
        "avoid-corner-neighbors"
    }

    fn choose_move(&self, model: &dyn ReadonlyReversi, color: Tile) -> Option<Position> {
        let next_to_corners: FxHashSet<Position> = model
            .corners()
            .into_iter()
            .flat_map(|corner| model.neighbors(corner.row, corner.col))
            .collect();
        let moves = model.legal_moves(color).ok()?;
        closest_to_reference(
            model,
            moves.into_iter().filter(|mv| !next_to_corners.contains(mv)),
        )
    }
}

/// Flip as many tiles as possible
#[derive(Clone, Copy, Debug, Default)]
pub struct CaptureMostPieces;

impl Strategy for CaptureMostPieces {
    fn name(&self) -> &'static str {
        "capture-most-pieces"
    }

    fn choose_move(&self, model: &dyn ReadonlyReversi, color: Tile) -> Option<Position> {
        let scored: Vec<(Position, usize)> = model
            .legal_moves(color)
            .ok()?
            .into_iter()
            .filter_map(|mv| {
                let score = model.score_of_move(mv.row, mv.col, color).ok()?;
                Some((mv, score))
            })
            .collect();

        let best = scored.iter().map(|&(_, score)| score).max()?;
        closest_to_reference(
            model,
            scored
                .into_iter()
                .filter(|&(_, score)| score == best)
                .map(|(mv, _)| mv),
        )
    }
}

// ============================================================================
// COORDINATOR
// ============================================================================

/// First move suggested by the heuristic chain, or `None` if `color` must pass
pub fn chained_move(model: &dyn ReadonlyReversi, color: Tile) -> Option<Position> {
    CHAIN.iter().find_map(|strategy| {
        let mv = strategy.choose_move(model, color)?;
        tracing::trace!("{} chose {} for {}", strategy.name(), mv, color);
        Some(mv)
    })
}

/// Automated player for one color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AiPlayer {
    color: Tile,
}

impl AiPlayer {
    pub fn new(color: Tile) -> Self {
        Self { color }
    }

    pub fn color(&self) -> Tile {
        self.color
    }

    /// Get the move for this player in the current position
    pub fn choose_move(&self, model: &dyn ReadonlyReversi) -> Option<Position> {
        chained_move(model, self.color)
    }
}

/// Candidate nearest the reference point; the earliest wins ties
fn closest_to_reference(
    model: &dyn ReadonlyReversi,
    moves: impl IntoIterator<Item = Position>,
) -> Option<Position> {
    let reference = model.reference_point();
    moves.into_iter().min_by(|a, b| {
        a.distance_to(reference)
            .total_cmp(&b.distance_to(reference))
    })
}

// ============================================================================
// TESTS
// ============================================================================

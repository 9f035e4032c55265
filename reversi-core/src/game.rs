//! Game state, move legality and the turn/pass state machine
//!
//! One engine serves both topologies: [`Reversi`] is generic over a
//! [`Geometry`], which supplies the shape, the scan directions and the
//! starting pattern.

use std::fmt;

use crate::board::{
    AxialCoord, Board, Direction, Geometry, HexGeometry, Position, SquareGeometry,
};
use crate::error::{Result, ReversiError};
use crate::tile::Tile;

/// Sink called with the new current color whenever the turn changes
pub type TurnListener = Box<dyn FnMut(Tile)>;

// ============================================================================
// READ-ONLY SURFACE
// ============================================================================

/// Queries that never modify a game.
///
/// This is all the AI sees. Calls that take an explicit color probe that
/// color without touching the current turn.
pub trait ReadonlyReversi {
    /// True once two passes happen in a row, or when neither color can move.
    /// Always false before the game starts.
    fn is_game_over(&self) -> bool;

    /// Color to move. Fails before start and once the game is over.
    fn turn(&self) -> Result<Tile>;

    /// Contents of a playable cell. Fails before start and once the game is over.
    fn tile_at(&self, row: usize, col: usize) -> Result<Tile>;

    /// Higher-scoring color of a finished game; [`ReversiError::Draw`] on a tie
    fn winner(&self) -> Result<Tile>;

    fn side_len(&self) -> usize;

    fn board_len(&self) -> usize;

    /// Whether the current color may play at (row, col)
    fn is_legal_move(&self, row: usize, col: usize) -> Result<bool>;

    /// Whether `color` may play at (row, col), regardless of whose turn it is
    fn is_legal_move_for(&self, row: usize, col: usize, color: Tile) -> Result<bool>;

    /// Like [`ReadonlyReversi::is_legal_move_for`], but an illegal placement
    /// comes back as the error [`Reversi::make_move`] would raise
    fn check_move(&self, row: usize, col: usize, color: Tile) -> Result<()>;

    /// Number of playable cells holding `color`; zero before the game starts
    fn score(&self, color: Tile) -> usize;

    fn current_player_has_legal_move(&self) -> Result<bool>;

    fn has_legal_move(&self, color: Tile) -> Result<bool>;

    /// Every legal placement for `color`, row-major
    fn legal_moves(&self, color: Tile) -> Result<Vec<Position>>;

    /// Tiles `color` would gain by playing at (row, col): the captured tiles
    /// plus the placed one. Zero if the placement captures nothing.
    fn score_of_move(&self, row: usize, col: usize, color: Tile) -> Result<usize>;

    /// Playable neighbors of a playable cell, in scan order
    fn neighbors(&self, row: usize, col: usize) -> Vec<Position>;

    fn corners(&self) -> Vec<Position>;

    fn is_corner(&self, row: usize, col: usize) -> bool;

    /// Point that AI tie-breaks measure distance from
    fn reference_point(&self) -> Position;

    /// Independent snapshot of the board. Fails before start and once the game is over.
    fn copy_board(&self) -> Result<Board>;
}

// ============================================================================
// ENGINE
// ============================================================================

/// A game of Reversi on any supported board shape
pub struct Reversi<G: Geometry> {
    geometry: G,
    board: Board,
    /// Never `Empty`
    turn: Tile,
    started: bool,
    over: bool,
    consecutive_passes: u8,
    listener: Option<TurnListener>,
}

pub type HexReversi = Reversi<HexGeometry>;
pub type SquareReversi = Reversi<SquareGeometry>;

impl Reversi<HexGeometry> {
    /// Hex game with `side_len` cells per edge (3 to 64)
    pub fn hex(side_len: usize) -> Result<Self> {
        Ok(Self::new(HexGeometry::new(side_len)?))
    }

    /// [`Reversi::make_move`] addressed by axial coordinates
    pub fn make_move_axial(&mut self, coord: AxialCoord) -> Result<()> {
        let pos = coord
            .to_position(self.geometry.side_len())
            .filter(|pos| self.geometry.in_bounds(*pos))
            .ok_or(ReversiError::AxialOutOfBounds {
                q: coord.q,
                r: coord.r,
            })?;
        self.make_move(pos.row, pos.col)
    }
}

impl Reversi<SquareGeometry> {
    pub fn square() -> Self {
        Self::new(SquareGeometry)
    }
}

impl<G: Geometry> Reversi<G> {
    // ========================================================================
    // CONSTRUCTION
    // ========================================================================

    /// Unstarted game; call [`Reversi::start`] to place the starting tiles
    pub fn new(geometry: G) -> Self {
        let board = Board::new(&geometry);
        Self {
            geometry,
            board,
            turn: Tile::First,
            started: false,
            over: false,
            consecutive_passes: 0,
            listener: None,
        }
    }

    /// Replace the turn-change sink
    pub fn set_turn_listener<F>(&mut self, listener: F)
    where
        F: FnMut(Tile) + 'static,
    {
        self.listener = Some(Box::new(listener));
    }

    /// Remove and return the turn-change sink
    pub fn take_turn_listener(&mut self) -> Option<TurnListener> {
        self.listener.take()
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Borrowed view of the live board, available in every state
    pub fn board(&self) -> &Board {
        &self.board
    }

    // ========================================================================
    // MUTATION
    // ========================================================================

    /// Place the starting pattern and give the first move to [`Tile::First`]
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Err(ReversiError::AlreadyStarted);
        }

        for (pos, tile) in self.geometry.starting_tiles() {
            self.board.set(pos, tile);
        }
        self.started = true;
        self.turn = Tile::First;

        tracing::debug!(
            "Started {:?} game with side length {}",
            self.geometry.topology(),
            self.geometry.side_len()
        );
        self.notify_turn_changed();
        Ok(())
    }

    /// Give the turn to the opponent. A second pass in a row ends the game.
    pub fn pass(&mut self) -> Result<()> {
        self.ensure_active()?;
        self.pass_turn(false);
        Ok(())
    }

    /// Place the current color at (row, col) and flip every captured run.
    ///
    /// If the opponent then has no legal move anywhere, the engine passes
    /// for them, and if the mover cannot continue either the game ends.
    /// A rejected move leaves the game untouched.
    pub fn make_move(&mut self, row: usize, col: usize) -> Result<()> {
        self.ensure_active()?;

        let pos = Position::new(row, col);
        let color = self.turn;
        let captured = self.validate_move(pos, color)?;

        self.board.set(pos, color);
        for &cell in &captured {
            self.board.set(cell, color);
        }
        self.turn = color.opposite();

        self.consecutive_passes = 0;

        tracing::debug!("{} played {}, flipping {}", color, pos, captured.len());
        self.notify_turn_changed();

        if !self.has_any_legal_move(self.turn) {
            self.pass_turn(true);
            // Mover is stuck as well: the second forced pass ends the game
            if !self.has_any_legal_move(self.turn) {
                self.pass_turn(true);
            }
        }
        Ok(())
    }

    fn pass_turn(&mut self, forced: bool) {
        let passer = self.turn;
        self.turn = passer.opposite();

        if self.consecutive_passes == 0 {
            self.consecutive_passes = 1;
        } else {
            self.over = true;
        }

        if forced {
            tracing::debug!("{} has no legal move, passing", passer);
        } else {
            tracing::debug!("{} passed", passer);
        }
        if self.over {
            tracing::debug!(
                "Game over: {} {} - {} {}",
                Tile::First,
                self.board.count(Tile::First),
                self.board.count(Tile::Second),
                Tile::Second
            );
        }
        self.notify_turn_changed();
    }

    /// Started game holding only `tiles`, with `turn` to move
    #[cfg(test)]
    pub(crate) fn from_tiles(geometry: G, tiles: &[(usize, usize, Tile)], turn: Tile) -> Self {
        let mut game = Self::new(geometry);
        game.started = true;
        game.turn = turn;
        for &(row, col, tile) in tiles {
            game.board.set(Position::new(row, col), tile);
        }
        game
    }

    fn notify_turn_changed(&mut self) {
        let turn = self.turn;
        if let Some(listener) = self.listener.as_mut() {
            listener(turn);
        }
    }

    // ========================================================================
    // RULES
    // ========================================================================

    fn ensure_started(&self) -> Result<()> {
        if !self.started {
            return Err(ReversiError::NotStarted);
        }
        Ok(())
    }

    fn ensure_active(&self) -> Result<()> {
        self.ensure_started()?;
        if self.over {
            return Err(ReversiError::GameOver);
        }
        Ok(())
    }

    fn ensure_in_bounds(&self, pos: Position) -> Result<()> {
        if !self.geometry.in_bounds(pos) {
            return Err(ReversiError::OutOfBounds {
                row: pos.row,
                col: pos.col,
            });
        }
        Ok(())
    }

    /// Check a placement for `color` and return the tiles it would flip
    fn validate_move(&self, pos: Position, color: Tile) -> Result<Vec<Position>> {
        let (row, col) = (pos.row, pos.col);
        match self.board.get(pos) {
            None => return Err(ReversiError::OutOfBounds { row, col }),
            Some(Tile::Empty) => {}
            Some(_) => return Err(ReversiError::Occupied { row, col }),
        }

        let opponent = color.opposite();
        let borders_opponent = self
            .geometry
            .neighbors(pos)
            .into_iter()
            .any(|n| self.board.get(n) == Some(opponent));
        if !borders_opponent {
            return Err(ReversiError::NoAdjacentOpponent { row, col });
        }

        let captured = self.captured_tiles(pos, color);
        if captured.is_empty() {
            return Err(ReversiError::NoCapture { row, col });
        }
        Ok(captured)
    }

    /// Opposing tiles flipped by `color` at `pos`, across every direction
    fn captured_tiles(&self, pos: Position, color: Tile) -> Vec<Position> {
        self.geometry
            .directions()
            .iter()
            .filter_map(|&dir| self.capture_run(pos, dir, color))
            .flatten()
            .collect()
    }

    /// Opposing run starting next to `pos` and closed by a `color` tile.
    /// `None` if the run is empty or ends at an empty cell or the edge.
    fn capture_run(&self, pos: Position, dir: Direction, color: Tile) -> Option<Vec<Position>> {
        let opponent = color.opposite();
        let mut run = Vec::new();
        let mut cursor = self.geometry.step(pos, dir)?;

        loop {
            match self.board.get(cursor)? {
                tile if tile == color => return (!run.is_empty()).then_some(run),
                tile if tile == opponent => run.push(cursor),
                _ => return None,
            }
            cursor = self.geometry.step(cursor, dir)?;
        }
    }

    fn has_any_legal_move(&self, color: Tile) -> bool {
        self.geometry
            .cells()
            .into_iter()
            .any(|pos| self.validate_move(pos, color).is_ok())
    }
}

impl<G: Geometry> ReadonlyReversi for Reversi<G> {
    fn is_game_over(&self) -> bool {
        if !self.started {
            return false;
        }
        self.over
            || (!self.has_any_legal_move(self.turn)
                && !self.has_any_legal_move(self.turn.opposite()))
    }

    fn turn(&self) -> Result<Tile> {
        self.ensure_active()?;
        Ok(self.turn)
    }

    fn tile_at(&self, row: usize, col: usize) -> Result<Tile> {
        self.ensure_active()?;
        self.board
            .get(Position::new(row, col))
            .ok_or(ReversiError::OutOfBounds { row, col })
    }

    fn winner(&self) -> Result<Tile> {
        self.ensure_started()?;
        if !self.is_game_over() {
            return Err(ReversiError::GameNotOver);
        }

        let first = self.board.count(Tile::First);
        let second = self.board.count(Tile::Second);
        match first.cmp(&second) {
            std::cmp::Ordering::Greater => Ok(Tile::First),
            std::cmp::Ordering::Less => Ok(Tile::Second),
            std::cmp::Ordering::Equal => Err(ReversiError::Draw),
        }
    }

    fn side_len(&self) -> usize {
        self.geometry.side_len()
    }

    fn board_len(&self) -> usize {
        self.geometry.board_len()
    }

    fn is_legal_move(&self, row: usize, col: usize) -> Result<bool> {
        self.is_legal_move_for(row, col, self.turn)
    }

    fn is_legal_move_for(&self, row: usize, col: usize, color: Tile) -> Result<bool> {
        self.ensure_active()?;
        Ok(self.validate_move(Position::new(row, col), color).is_ok())
    }

    fn check_move(&self, row: usize, col: usize, color: Tile) -> Result<()> {
        self.ensure_active()?;
        self.validate_move(Position::new(row, col), color).map(|_| ())
    }

    fn score(&self, color: Tile) -> usize {
        if !self.started {
            return 0;
        }
        self.board.count(color)
    }

    fn current_player_has_legal_move(&self) -> Result<bool> {
        self.has_legal_move(self.turn)
    }

    fn has_legal_move(&self, color: Tile) -> Result<bool> {
        self.ensure_active()?;
        Ok(self.has_any_legal_move(color))
    }

    fn legal_moves(&self, color: Tile) -> Result<Vec<Position>> {
        self.ensure_active()?;
        Ok(self
            .geometry
            .cells()
            .into_iter()
            .filter(|pos| self.validate_move(*pos, color).is_ok())
            .collect())
    }

    fn score_of_move(&self, row: usize, col: usize, color: Tile) -> Result<usize> {
        self.ensure_started()?;
        let pos = Position::new(row, col);
        self.ensure_in_bounds(pos)?;

        if self.board.get(pos) != Some(Tile::Empty) {
            return Ok(0);
        }
        let captured = self.captured_tiles(pos, color).len();
        Ok(if captured == 0 { 0 } else { captured + 1 })
    }

    fn neighbors(&self, row: usize, col: usize) -> Vec<Position> {
        let pos = Position::new(row, col);
        if !self.geometry.in_bounds(pos) {
            return Vec::new();
        }
        self.geometry.neighbors(pos)
    }

    fn corners(&self) -> Vec<Position> {
        self.geometry.corners()
    }

    fn is_corner(&self, row: usize, col: usize) -> bool {
        self.geometry.is_corner(Position::new(row, col))
    }

    fn reference_point(&self) -> Position {
        self.geometry.reference_point()
    }

    fn copy_board(&self) -> Result<Board> {
        self.ensure_active()?;
        Ok(self.board.clone())
    }
}

impl<G: Geometry> fmt::Debug for Reversi<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reversi")
            .field("geometry", &self.geometry)
            .field("turn", &self.turn)
            .field("started", &self.started)
            .field("over", &self.over)
            .field("consecutive_passes", &self.consecutive_passes)
            .field("has_listener", &self.listener.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn started_hex(side_len: usize) -> HexReversi {
        let mut game = Reversi::hex(side_len).unwrap();
        game.start().unwrap();
        game
    }

    fn started_square() -> SquareReversi {
        let mut game = Reversi::square();
        game.start().unwrap();
        game
    }

    fn square_with(tiles: &[(usize, usize, Tile)]) -> SquareReversi {
        Reversi::from_tiles(SquareGeometry, tiles, Tile::First)
    }

    fn record_turns<G: Geometry>(game: &mut Reversi<G>) -> Rc<RefCell<Vec<Tile>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        game.set_turn_listener(move |tile| sink.borrow_mut().push(tile));
        seen
    }

    #[test]
    fn test_hex_start() {
        let game = started_hex(4);
        assert_eq!(game.turn(), Ok(Tile::First));
        assert_eq!(game.tile_at(2, 3), Ok(Tile::First));
        assert_eq!(game.tile_at(2, 4), Ok(Tile::Second));
        assert_eq!(game.tile_at(3, 4), Ok(Tile::First));
        assert_eq!(game.tile_at(4, 3), Ok(Tile::Second));
        assert_eq!(game.tile_at(4, 2), Ok(Tile::First));
        assert_eq!(game.tile_at(3, 2), Ok(Tile::Second));
        assert_eq!(game.tile_at(3, 3), Ok(Tile::Empty));
        assert_eq!(game.score(Tile::First), 3);
        assert_eq!(game.score(Tile::Second), 3);
    }

    #[test]
    fn test_hex_first_move() {
        let mut game = started_hex(4);
        assert_eq!(game.is_legal_move(1, 4), Ok(true));
        game.make_move(1, 4).unwrap();
        assert_eq!(game.tile_at(1, 4), Ok(Tile::First));
        assert_eq!(game.tile_at(2, 4), Ok(Tile::First));
        assert_eq!(game.turn(), Ok(Tile::Second));
        assert_eq!(game.score(Tile::First), 5);
        assert_eq!(game.score(Tile::Second), 2);
    }

    #[test]
    fn test_hex_axial_move() {
        let mut game = started_hex(4);
        // (1, 4) in storage coordinates
        game.make_move_axial(AxialCoord::new(1, -2)).unwrap();
        assert_eq!(game.tile_at(1, 4), Ok(Tile::First));
        assert_eq!(
            game.make_move_axial(AxialCoord::new(-3, -3)),
            Err(ReversiError::AxialOutOfBounds { q: -3, r: -3 })
        );
    }

    #[test]
    fn test_square_start_and_move() {
        let mut game = started_square();
        assert_eq!(game.tile_at(3, 3), Ok(Tile::First));
        assert_eq!(game.tile_at(4, 4), Ok(Tile::First));
        assert_eq!(game.tile_at(3, 4), Ok(Tile::Second));
        assert_eq!(game.tile_at(4, 3), Ok(Tile::Second));
        assert_eq!(game.score(Tile::First), 2);
        assert_eq!(game.score(Tile::Second), 2);

        assert_eq!(game.score_of_move(2, 4, Tile::First), Ok(2));
        game.make_move(2, 4).unwrap();
        assert_eq!(game.score(Tile::First), 4);
        assert_eq!(game.score(Tile::Second), 1);
    }

    #[test]
    fn test_start_twice() {
        let mut game = started_square();
        assert_eq!(game.start(), Err(ReversiError::AlreadyStarted));
    }

    #[test]
    fn test_not_started() {
        let mut game = Reversi::hex(5).unwrap();
        assert_eq!(game.turn(), Err(ReversiError::NotStarted));
        assert_eq!(game.tile_at(4, 4), Err(ReversiError::NotStarted));
        assert_eq!(game.make_move(3, 4), Err(ReversiError::NotStarted));
        assert_eq!(game.pass(), Err(ReversiError::NotStarted));
        assert_eq!(game.winner(), Err(ReversiError::NotStarted));
        assert_eq!(game.copy_board(), Err(ReversiError::NotStarted));
        assert_eq!(game.is_legal_move(3, 4), Err(ReversiError::NotStarted));
        assert!(!game.is_game_over());
        assert_eq!(game.score(Tile::First), 0);
        assert_eq!(game.side_len(), 5);
    }

    #[test]
    fn test_rejected_move_is_atomic() {
        let mut game = started_hex(4);
        let before = game.copy_board().unwrap();

        assert_eq!(
            game.make_move(0, 0),
            Err(ReversiError::OutOfBounds { row: 0, col: 0 })
        );
        assert_eq!(
            game.make_move(20, 1),
            Err(ReversiError::OutOfBounds { row: 20, col: 1 })
        );
        assert_eq!(
            game.make_move(2, 3),
            Err(ReversiError::Occupied { row: 2, col: 3 })
        );
        assert_eq!(
            game.make_move(0, 3),
            Err(ReversiError::NoAdjacentOpponent { row: 0, col: 3 })
        );
        // Borders Second at (3, 2) but the line runs into the empty center
        assert_eq!(
            game.make_move(3, 1),
            Err(ReversiError::NoCapture { row: 3, col: 1 })
        );

        assert_eq!(game.copy_board(), Ok(before));
        assert_eq!(game.turn(), Ok(Tile::First));
    }

    #[test]
    fn test_capture_in_several_directions() {
        // First at (2, 2) closes a vertical and a horizontal run
        let mut game = square_with(&[
            (0, 2, Tile::First),
            (1, 2, Tile::Second),
            (2, 0, Tile::First),
            (2, 1, Tile::Second),
            (3, 3, Tile::Second),
        ]);
        assert_eq!(game.score_of_move(2, 2, Tile::First), Ok(3));
        game.make_move(2, 2).unwrap();
        assert_eq!(game.board().get(Position::new(1, 2)), Some(Tile::First));
        assert_eq!(game.board().get(Position::new(2, 1)), Some(Tile::First));
        // Unterminated diagonal run is untouched
        assert_eq!(game.board().get(Position::new(3, 3)), Some(Tile::Second));
    }

    #[test]
    fn test_two_passes_end_game() {
        let mut game = started_square();
        game.pass().unwrap();
        assert!(!game.is_game_over());
        assert_eq!(game.turn(), Ok(Tile::Second));
        game.pass().unwrap();
        assert!(game.is_game_over());
        assert_eq!(game.turn(), Err(ReversiError::GameOver));
        assert_eq!(game.pass(), Err(ReversiError::GameOver));
        assert_eq!(game.copy_board(), Err(ReversiError::GameOver));
        assert_eq!(game.winner(), Err(ReversiError::Draw));
    }

    #[test]
    fn test_move_resets_pass_counter() {
        let mut game = started_square();
        game.pass().unwrap();
        game.make_move(2, 3).unwrap();
        assert_eq!(game.turn(), Ok(Tile::First));
        game.pass().unwrap();
        assert!(!game.is_game_over());
        assert_eq!(game.turn(), Ok(Tile::Second));
    }

    #[test]
    fn test_forced_pass() {
        let mut game = square_with(&[
            (0, 0, Tile::First),
            (0, 1, Tile::Second),
            (2, 0, Tile::First),
            (2, 1, Tile::Second),
        ]);
        let turns = record_turns(&mut game);

        // Second is left without a move and the turn comes straight back
        game.make_move(0, 2).unwrap();
        assert_eq!(game.turn(), Ok(Tile::First));
        assert!(!game.is_game_over());
        assert_eq!(*turns.borrow(), vec![Tile::Second, Tile::First]);

        // Nobody can move after this one, so two forced passes end the game
        game.make_move(2, 2).unwrap();
        assert!(game.is_game_over());
        assert_eq!(game.turn(), Err(ReversiError::GameOver));
        assert_eq!(game.winner(), Ok(Tile::First));
        assert_eq!(game.score(Tile::First), 6);
        assert_eq!(game.score(Tile::Second), 0);
    }

    #[test]
    fn test_forced_pass_after_move_does_not_end_game() {
        let mut game = square_with(&[
            (0, 0, Tile::Second),
            (0, 1, Tile::First),
            (2, 0, Tile::Second),
            (2, 1, Tile::First),
        ]);
        game.pass().unwrap();

        // Second's move leaves First stuck, but the move broke the pass streak
        game.make_move(0, 2).unwrap();
        assert!(!game.is_game_over());
        assert_eq!(game.turn(), Ok(Tile::Second));
        assert_eq!(game.is_legal_move(2, 2), Ok(true));

        game.make_move(2, 2).unwrap();
        assert!(game.is_game_over());
        assert_eq!(game.winner(), Ok(Tile::Second));
    }

    #[test]
    fn test_check_move_reports_reason() {
        let game = started_hex(4);
        assert_eq!(game.check_move(1, 4, Tile::First), Ok(()));
        assert_eq!(
            game.check_move(2, 3, Tile::First),
            Err(ReversiError::Occupied { row: 2, col: 3 })
        );
        assert_eq!(
            game.check_move(0, 0, Tile::Second),
            Err(ReversiError::OutOfBounds { row: 0, col: 0 })
        );
        assert_eq!(game.turn(), Ok(Tile::First));

        let unstarted = Reversi::square();
        assert_eq!(
            unstarted.check_move(2, 3, Tile::First),
            Err(ReversiError::NotStarted)
        );
    }

    #[test]
    fn test_is_corner() {
        let game = started_hex(4);
        assert!(game.is_corner(0, 3));
        assert!(game.is_corner(6, 0));
        assert!(!game.is_corner(0, 4));
        assert!(started_square().is_corner(7, 7));
        assert!(!started_square().is_corner(7, 6));
    }

    #[test]
    fn test_game_over_without_passes() {
        let game = square_with(&[(0, 0, Tile::First), (0, 1, Tile::First), (7, 7, Tile::Second)]);
        assert!(game.is_game_over());
        assert_eq!(game.winner(), Ok(Tile::First));
        // The flag is never set, so the game still answers active queries
        assert_eq!(game.turn(), Ok(Tile::First));
        assert_eq!(game.current_player_has_legal_move(), Ok(false));
    }

    #[test]
    fn test_draw_has_no_winner() {
        let game = square_with(&[(0, 0, Tile::First), (7, 7, Tile::Second)]);
        assert_eq!(game.winner(), Err(ReversiError::Draw));
    }

    #[test]
    fn test_winner_requires_game_over() {
        let game = started_hex(4);
        assert_eq!(game.winner(), Err(ReversiError::GameNotOver));
    }

    #[test]
    fn test_listener_sees_every_turn_change() {
        let mut game = Reversi::hex(4).unwrap();
        let turns = record_turns(&mut game);
        game.start().unwrap();
        game.make_move(1, 4).unwrap();
        game.pass().unwrap();
        assert_eq!(*turns.borrow(), vec![Tile::First, Tile::Second, Tile::First]);

        assert!(game.take_turn_listener().is_some());
        game.pass().unwrap();
        assert_eq!(turns.borrow().len(), 3);
    }

    #[test]
    fn test_color_queries_do_not_change_turn() {
        let mut game = started_hex(4);
        assert_eq!(game.has_legal_move(Tile::Second), Ok(true));
        game.make_move(1, 4).unwrap();

        assert_eq!(game.is_legal_move(0, 5), Ok(true));
        assert_eq!(game.is_legal_move_for(0, 5, Tile::First), Ok(false));
        assert_eq!(game.is_legal_move_for(5, 2, Tile::First), Ok(true));
        assert_eq!(game.turn(), Ok(Tile::Second));
    }

    #[test]
    fn test_legal_moves_match_legality() {
        let game = started_hex(5);
        let moves = game.legal_moves(Tile::First).unwrap();
        assert_eq!(moves.len(), 6);
        for pos in game.geometry().cells() {
            let legal = game.is_legal_move(pos.row, pos.col).unwrap();
            assert_eq!(legal, moves.contains(&pos));
        }
        let mut sorted = moves.clone();
        sorted.sort();
        assert_eq!(moves, sorted);
    }

    #[test]
    fn test_score_of_move_edges() {
        let game = started_square();
        assert_eq!(game.score_of_move(3, 3, Tile::First), Ok(0));
        assert_eq!(game.score_of_move(0, 0, Tile::First), Ok(0));
        assert_eq!(
            game.score_of_move(8, 0, Tile::First),
            Err(ReversiError::OutOfBounds { row: 8, col: 0 })
        );
    }

    #[test]
    fn test_neighbors() {
        let game = started_hex(4);
        assert_eq!(game.neighbors(3, 3).len(), 6);
        assert_eq!(game.neighbors(0, 6).len(), 3);
        assert!(game.neighbors(0, 0).is_empty());

        let square = started_square();
        assert_eq!(square.neighbors(7, 7).len(), 3);
    }

    #[test]
    fn test_copy_board_is_independent() {
        let mut game = started_square();
        let snapshot = game.copy_board().unwrap();
        game.make_move(2, 4).unwrap();
        assert_eq!(snapshot.get(Position::new(2, 4)), Some(Tile::Empty));
        assert_ne!(&snapshot, game.board());
    }
}

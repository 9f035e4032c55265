//! Engine errors

/// Broad classification of a rejected call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The game is in the wrong state for the call
    State,
    /// The arguments do not name a playable cell or a valid board
    InvalidArgument,
}

/// Errors returned by the game engine.
///
/// A rejected call never modifies the game.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReversiError {
    #[error("Game has not started")]
    NotStarted,

    #[error("Game has already started")]
    AlreadyStarted,

    #[error("Game is over")]
    GameOver,

    #[error("Game is not over yet")]
    GameNotOver,

    #[error("There is no winner, the game ended in a draw")]
    Draw,

    #[error("Cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("Cell ({row}, {col}) is not empty")]
    Occupied { row: usize, col: usize },

    #[error("Cell ({row}, {col}) does not border an opposing tile")]
    NoAdjacentOpponent { row: usize, col: usize },

    #[error("Move at ({row}, {col}) captures nothing")]
    NoCapture { row: usize, col: usize },

    #[error("Axial cell ({q}, {r}) is outside the board")]
    AxialOutOfBounds { q: i32, r: i32 },

    #[error("Hex board side length must be between 3 and 64, got {0}")]
    InvalidSideLength(usize),
}

impl ReversiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReversiError::OutOfBounds { .. }
            | ReversiError::AxialOutOfBounds { .. }
            | ReversiError::InvalidSideLength(_) => ErrorKind::InvalidArgument,
            _ => ErrorKind::State,
        }
    }

    /// True for the errors produced by an illegal placement
    pub fn is_illegal_move(&self) -> bool {
        matches!(
            self,
            ReversiError::OutOfBounds { .. }
                | ReversiError::AxialOutOfBounds { .. }
                | ReversiError::Occupied { .. }
                | ReversiError::NoAdjacentOpponent { .. }
                | ReversiError::NoCapture { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ReversiError>;

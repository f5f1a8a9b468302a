//! Error types for the reversi engine
//!
//! Every variant carries a message fit to be relayed to a player as-is.

use thiserror::Error;

/// Errors raised by board construction, move application and move selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Board width is odd or smaller than 2
    #[error("board width must be an even number of at least 2, got {width}")]
    InvalidConfiguration { width: usize },

    /// Coordinate outside the board
    #[error("step out of bounds: {row}, {col}")]
    OutOfBounds { row: i64, col: i64 },

    /// Target cell already holds a piece
    #[error("the place {row}, {col} has already been taken")]
    CellOccupied { row: usize, col: usize },

    /// Target cell is empty but closes no capturing run
    #[error("you can't place a piece at {row}, {col}")]
    IllegalMove { row: usize, col: usize },

    /// Move selection requested with an empty legal-move set
    #[error("the game is already finished")]
    NoMovesAvailable,
}

/// Result type alias for engine operations
pub type GameResult<T> = Result<T, GameError>;

use thiserror::Error;

use crate::game_state::chess_types::Square;

/// Errors surfaced at the game-session boundary.
///
/// Every variant is recoverable: the session leaves board state and move
/// history untouched when returning any of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The requested move does not match any legal move in the current position.
    #[error("invalid move from {from} to {to}")]
    InvalidMove { from: Square, to: Square },

    /// A coordinate outside the 8x8 board.
    #[error("invalid square: file {file}, rank {rank}")]
    InvalidSquare { file: i8, rank: i8 },

    /// Undo was requested with no moves on record.
    #[error("no moves to undo")]
    NoHistory,

    /// A position string failed structural validation.
    #[error("malformed position string: {0}")]
    MalformedPosition(String),
}

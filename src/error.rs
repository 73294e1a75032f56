//! Errors raised at the engine boundary

use crate::board::{Pos, Stone, BOARD_SIZE};

/// Caller contract violations.
///
/// Running out of moves is not an error: the engine reports it as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("({row}, {col}) is outside the {size}x{size} board", size = BOARD_SIZE)]
    OutOfBounds { row: i32, col: i32 },
    #[error("cell {0} is already occupied")]
    Occupied(Pos),
    #[error("an empty stone cannot be played")]
    EmptySide,
    #[error("{0} is not a legal move here")]
    NotCandidate(Pos),
    #[error("{} already has five in a row", .0.name())]
    GameOver(Stone),
}

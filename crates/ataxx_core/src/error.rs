//! Error types shared by the board, the players and the turn loop.

use thiserror::Error;

/// Errors raised by the Ataxx core.
///
/// All of them are local and synchronous: the operation that returns one has
/// not mutated anything.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AtaxxError {
    /// A coordinate outside the 8x8 grid.
    #[error("coordinate ({x}, {y}) is outside the board")]
    OutOfRange { x: i32, y: i32 },

    /// A malformed or illegal request (illegal move, wrong side, finished game).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The component is not in a state where the call makes sense.
    #[error("invalid state: {0}")]
    InvalidState(String),
}

impl AtaxxError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        AtaxxError::InvalidArgument(msg.into())
    }

    pub(crate) fn invalid_state(msg: impl Into<String>) -> Self {
        AtaxxError::InvalidState(msg.into())
    }
}

/// Result alias for Ataxx core operations.
pub type Result<T> = std::result::Result<T, AtaxxError>;

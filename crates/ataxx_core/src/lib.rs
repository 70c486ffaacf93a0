pub mod board;
pub mod error;
pub mod game;
pub mod limits;
pub mod movegen;
pub mod perft;
pub mod player;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::*;
pub use error::{AtaxxError, Result};
pub use game::*;
pub use limits::*;
pub use movegen::*;
pub use perft::perft;
pub use player::*;
pub use types::*;

// =============================================================================
// Engine trait: implemented by all move-selecting engines (minimax, random)
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// The move to play. A pass when the side has nothing else.
    pub best_move: Move,
    /// Evaluation of the chosen line from the engine's perspective
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
    /// Whether search was abandoned through the cancel token
    pub stopped: bool,
}

/// Trait that all engines must implement.
///
/// Engines only ever see a borrowed board and must not keep references to
/// it, so they can run on a worker thread against a clone.
pub trait Engine: Send {
    /// Choose a move for `side` on `board` within the given limits.
    fn search(&mut self, board: &Board, side: Side, limits: &SearchLimits) -> SearchResult;

    /// Returns the engine's name for logs and reports
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn search(&mut self, board: &Board, side: Side, limits: &SearchLimits) -> SearchResult {
        (**self).search(board, side, limits)
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn new_game(&mut self) {
        (**self).new_game()
    }
}

//! Minimax Ataxx Engine
//!
//! Depth-limited minimax with alpha-beta pruning over cloned boards, scored
//! by pawn difference. This is the computer opponent.

mod eval;
mod search;

use std::fmt;
use std::str::FromStr;

use ataxx_core::{Board, Engine, SearchLimits, SearchResult, Side};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;


/// Engine using minimax with alpha-beta pruning.
///
/// This engine uses:
/// - Minimax search with alpha-beta pruning, one board clone per node
/// - Pawn-count evaluation
/// - Moves shuffled at every node with an injected random source, so equal
///   moves are picked unpredictably but reproducibly for a given seed
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    rng: StdRng,
    ordering: MoveOrdering,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    /// Engine seeded from the operating system.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Engine whose tie-breaking is reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            rng,
            ordering: MoveOrdering::default(),
            nodes: 0,
        }
    }

    pub fn with_ordering(mut self, ordering: MoveOrdering) -> Self {
        self.ordering = ordering;
        self
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn search(&mut self, board: &Board, side: Side, limits: &SearchLimits) -> SearchResult {
        self.nodes = 0;

        let outcome = search::pick_best_move(
            board,
            side,
            limits.depth,
            self.ordering,
            &mut self.rng,
            &mut self.nodes,
            &limits.cancel,
        );
        debug!(
            %side,
            depth = limits.depth,
            nodes = self.nodes,
            score = outcome.score,
            best = %outcome.best_move,
            stopped = outcome.stopped,
            "minimax search"
        );

        SearchResult {
            best_move: outcome.best_move,
            score: outcome.score,
            depth: limits.depth,
            nodes: self.nodes,
            stopped: outcome.stopped,
        }
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Playing strength offered to users. Each level maps to a search depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Depth used when no configuration overrides it.
    pub fn default_depth(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 3,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        };
        f.write_str(s)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "normal" | "medium" => Ok(Difficulty::Normal),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!(
                "unknown difficulty '{other}' (expected easy, normal or hard)"
            )),
        }
    }
}

// Re-export for direct use if needed
pub use eval::evaluate;
pub use search::{find_move, pick_best_move, MoveOrdering, SearchOutcome};

//! Random Move Ataxx Engine
//!
//! A simple engine that selects moves uniformly at random from all legal moves.
//! Useful for:
//! - Exercising the player and game plumbing without a real search
//! - Baseline comparisons (minimax at any depth should easily beat this)

use ataxx_core::{moves_or_pass_into, Board, Engine, Move, SearchLimits, SearchResult, Side};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;


/// An engine that plays random legal moves.
///
/// It passes only when it has to, like every other player.
#[derive(Debug, Clone)]
pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn search(&mut self, board: &Board, side: Side, limits: &SearchLimits) -> SearchResult {
        let mut moves = Vec::with_capacity(64);
        moves_or_pass_into(board, side, &mut moves);

        // Never empty: a blocked side gets a lone pass.
        let best_move = moves
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Move::pass(side));

        SearchResult {
            best_move,
            score: 0,
            depth: 1,
            nodes: moves.len() as u64,
            stopped: limits.should_stop(),
        }
    }

    fn name(&self) -> &str {
        "Random v1.0"
    }
}

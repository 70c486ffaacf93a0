//! Minimax search with alpha-beta pruning

use ataxx_core::{moves_or_pass_into, Board, CancelToken, Move, Side};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::eval::evaluate;

/// Order in which a node's moves are searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveOrdering {
    /// Uniformly shuffled at every node, so equal-scoring moves are not
    /// always resolved the same way.
    #[default]
    Shuffled,
    /// Generator order. Deterministic, for tests and analysis.
    Generated,
}

/// Result from pick_best_move indicating whether search completed or was stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Best root move; a pass if the search never recorded one
    pub best_move: Move,
    /// Minimax value of the root from the searching side's point of view
    pub score: i32,
    /// True if search was cancelled; the move must then be ignored
    pub stopped: bool,
}

/// Searches `depth` plies ahead and returns the best move for `side`.
/// A depth of 0 is searched as 1 so the returned move is always legal.
///
/// # Arguments
/// * `board` - The position to search; never modified
/// * `side` - The side to move, which is the maximizing side
/// * `depth` - Maximum search depth in plies
/// * `ordering` - Whether moves are shuffled before searching
/// * `rng` - Random source used for shuffling
/// * `nodes` - Counter for nodes searched (for statistics)
/// * `cancel` - Checked at every node to abandon the search
pub fn pick_best_move<R: Rng + ?Sized>(
    board: &Board,
    side: Side,
    depth: u8,
    ordering: MoveOrdering,
    rng: &mut R,
    nodes: &mut u64,
    cancel: &CancelToken,
) -> SearchOutcome {
    let depth = depth.max(1);
    let mut search = Search {
        side,
        root_depth: depth,
        ordering,
        rng,
        nodes,
        cancel,
        best_move: Move::pass(side),
        stopped: false,
    };
    let root = board.clone();
    let score = search.minimax(&root, depth, true, i32::MIN, i32::MAX);

    SearchOutcome {
        best_move: search.best_move,
        score,
        stopped: search.stopped,
    }
}

/// Shuffled search that cannot be interrupted; returns only the move.
pub fn find_move<R: Rng + ?Sized>(board: &Board, side: Side, depth: u8, rng: &mut R) -> Move {
    let mut nodes = 0;
    pick_best_move(
        board,
        side,
        depth,
        MoveOrdering::Shuffled,
        rng,
        &mut nodes,
        &CancelToken::new(),
    )
    .best_move
}

struct Search<'a, R: ?Sized> {
    side: Side,
    root_depth: u8,
    ordering: MoveOrdering,
    rng: &'a mut R,
    nodes: &'a mut u64,
    cancel: &'a CancelToken,
    best_move: Move,
    stopped: bool,
}

impl<R: Rng + ?Sized> Search<'_, R> {
    /// Fail-hard minimax: a max node returns its alpha, a min node its beta.
    /// Every child is searched on its own clone of the board.
    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        *self.nodes += 1;
        if self.cancel.is_cancelled() {
            self.stopped = true;
            return 0;
        }
        if depth == 0 {
            return evaluate(board, self.side);
        }

        let to_act = if maximizing {
            self.side
        } else {
            self.side.other()
        };
        let mut moves = Vec::with_capacity(64);
        moves_or_pass_into(board, to_act, &mut moves);
        if self.ordering == MoveOrdering::Shuffled {
            moves.shuffle(&mut *self.rng);
        }

        if maximizing {
            let mut best = i32::MIN;
            for mv in &moves {
                let child = board.child(mv);
                let score = self.minimax(&child, depth - 1, false, alpha, beta);
                if self.stopped {
                    return alpha;
                }
                if score > best {
                    best = score;
                    if depth == self.root_depth {
                        self.best_move = *mv;
                    }
                }
                alpha = alpha.max(best);
                if alpha >= beta {
                    break; // Beta cutoff
                }
            }
            alpha
        } else {
            let mut best = i32::MAX;
            for mv in &moves {
                let child = board.child(mv);
                let score = self.minimax(&child, depth - 1, true, alpha, beta);
                if self.stopped {
                    return beta;
                }
                best = best.min(score);
                beta = beta.min(best);
                if alpha >= beta {
                    break; // Alpha cutoff
                }
            }
            beta
        }
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;

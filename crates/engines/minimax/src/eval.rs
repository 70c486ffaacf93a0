//! Static evaluation.

use ataxx_core::{Board, Side};

/// Pawn difference from `side`'s point of view.
///
/// Returns a score in pawns, bounded by the board size:
/// - Positive = `side` has more pawns
/// - Negative = the opponent has more pawns
/// - 0 = equal material
pub fn evaluate(board: &Board, side: Side) -> i32 {
    board.count(side) as i32 - board.count(side.other()) as i32
}

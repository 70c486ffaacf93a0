use crate::{board::Board, types::*};

/// Generate all legal non-pass moves for `side`, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    legal_moves_into(board, side, &mut out);
    out
}

/// Generate all legal non-pass moves into the provided buffer, reusing it across calls.
///
/// Sources are visited row-major and destinations in offset order, but callers
/// must not rely on the order.
pub fn legal_moves_into(board: &Board, side: Side, out: &mut Vec<Move>) {
    out.clear();
    for from in board.pieces(side) {
        for dy in -2..=2i8 {
            for dx in -2..=2i8 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let Some(to) = from.offset(dx, dy) else {
                    continue;
                };
                let mv = Move::new(side, from, to);
                if board.is_legal(&mv) {
                    out.push(mv);
                }
            }
        }
    }
}

/// Like `legal_moves_into`, but leaves a single pass in `out` when `side` has
/// nothing else to play.
pub fn moves_or_pass_into(board: &Board, side: Side, out: &mut Vec<Move>) {
    legal_moves_into(board, side, out);
    if out.is_empty() {
        out.push(Move::pass(side));
    }
}

pub fn has_legal_move(board: &Board, side: Side) -> bool {
    board.can_move(side)
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;

use crate::{board::Board, movegen::moves_or_pass_into, types::Side};

/// Counts the leaf nodes of the move tree `depth` plies deep, `side` to move.
/// Forced passes count as moves; decided positions are leaves.
pub fn perft(board: &Board, side: Side, depth: u8) -> u64 {
    if depth == 0 || board.outcome().is_over() {
        return 1;
    }
    let mut moves = Vec::with_capacity(64);
    moves_or_pass_into(board, side, &mut moves);
    if depth == 1 {
        return moves.len() as u64;
    }
    let mut nodes = 0;
    for mv in &moves {
        nodes += perft(&board.child(mv), side.other(), depth - 1);
    }
    nodes
}

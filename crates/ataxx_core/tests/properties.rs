//! Board invariants checked over random playouts.

use ataxx_core::{Board, Move, MoveKind, Pos, Side, legal_moves, moves_or_pass_into};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Plays up to `plies` random moves from the standard start and returns every
/// board reached along the way together with the side to move on it.
fn playout(seed: u64, plies: usize) -> Vec<(Board, Side)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = Board::standard();
    let mut side = Side::Side1;
    let mut seen = vec![(board.clone(), side)];
    let mut moves = Vec::new();

    for _ in 0..plies {
        if board.outcome().is_over() {
            break;
        }
        moves_or_pass_into(&board, side, &mut moves);
        let mv = *moves.choose(&mut rng).expect("at least a pass");
        board.apply_move(&mv).expect("generated moves are legal");
        side = side.other();
        seen.push((board.clone(), side));
    }
    seen
}

fn random_pos(rng: &mut StdRng) -> Pos {
    Pos::new(rng.gen_range(0..8), rng.gen_range(0..8)).expect("in range")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn cell_counts_always_sum_to_64(seed in any::<u64>(), plies in 0usize..80) {
        for (board, _) in playout(seed, plies) {
            let stats = board.stats();
            prop_assert_eq!(stats.total(), 64);
            let side1 = board.iter().filter(|(_, c)| *c == Some(Side::Side1)).count();
            let empty = board.iter().filter(|(_, c)| c.is_none()).count();
            prop_assert_eq!(stats.side1 as usize, side1);
            prop_assert_eq!(stats.empty as usize, empty);
        }
    }

    #[test]
    fn illegal_moves_never_mutate(seed in any::<u64>(), plies in 0usize..60) {
        let mut rng = StdRng::seed_from_u64(seed ^ 0x5eed);
        for (board, _) in playout(seed, plies) {
            for _ in 0..16 {
                let side = if rng.gen_range(0..2) == 0 { Side::Side1 } else { Side::Side2 };
                let mv = Move::new(side, random_pos(&mut rng), random_pos(&mut rng));
                let mut copy = board.clone();
                let accepted = !board.outcome().is_over() && board.is_legal(&mv);
                match copy.apply_move(&mv) {
                    Ok(_) => prop_assert!(accepted),
                    Err(_) => {
                        prop_assert!(!accepted);
                        prop_assert_eq!(&copy, &board);
                    }
                }
            }
        }
    }

    #[test]
    fn conversions_are_exactly_the_adjacent_opponents(seed in any::<u64>(), plies in 0usize..60) {
        for (board, side) in playout(seed, plies) {
            if board.outcome().is_over() {
                continue;
            }
            for mv in legal_moves(&board, side) {
                let mut expected: Vec<Pos> = mv
                    .to
                    .ring(1)
                    .filter(|&n| board.cell(n) == Some(side.other()))
                    .collect();
                let simulated = board.simulate_move(&mv).expect("legal");
                let mut after = board.clone();
                let mut converted = after.apply_move(&mv).expect("legal");
                prop_assert_eq!(&simulated, &after);

                expected.sort();
                converted.sort();
                prop_assert_eq!(&converted, &expected);

                for p in Pos::all() {
                    let want = if p == mv.to || expected.contains(&p) {
                        Some(side)
                    } else if p == mv.from && mv.kind() == Some(MoveKind::Jump) {
                        None
                    } else {
                        board.cell(p)
                    };
                    prop_assert_eq!(after.cell(p), want, "cell {} after {}", p, mv);
                }
            }
        }
    }

    #[test]
    fn simulate_leaves_input_alone(seed in any::<u64>(), plies in 0usize..60) {
        for (board, side) in playout(seed, plies) {
            let before = board.clone();
            let mut moves = Vec::new();
            moves_or_pass_into(&board, side, &mut moves);
            for mv in &moves {
                let _ = board.simulate_move(mv);
                prop_assert_eq!(&board, &before);
            }
        }
    }
}

#[test]
fn scenario_clone_from_corner() {
    let mut board = Board::from_coords(0, 0, 7, 7).unwrap();
    let mv = Move::parse(Side::Side1, "a1b2").unwrap();
    assert_eq!(mv.kind(), Some(MoveKind::Clone));
    board.apply_move(&mv).unwrap();
    assert_eq!(board.cell_at(1, 1).unwrap(), Some(Side::Side1));
    assert_eq!(board.cell_at(0, 0).unwrap(), Some(Side::Side1));
    let stats = board.stats();
    assert_eq!((stats.empty, stats.side1, stats.side2), (61, 2, 1));
}

#[test]
fn scenario_jump_from_corner() {
    let mut board = Board::from_coords(0, 0, 7, 7).unwrap();
    let mv = Move::parse(Side::Side1, "a1c1").unwrap();
    assert_eq!(mv.kind(), Some(MoveKind::Jump));
    board.apply_move(&mv).unwrap();
    assert_eq!(board.cell_at(0, 0).unwrap(), None);
    assert_eq!(board.cell_at(2, 0).unwrap(), Some(Side::Side1));
    let stats = board.stats();
    assert_eq!((stats.empty, stats.side1, stats.side2), (62, 1, 1));
}

//! Perft benchmark for profiling with cargo-flamegraph.
//!
//! Usage:
//!   cargo flamegraph --example perft_bench -p ataxx_core -- [depth]

use ataxx_core::{Board, Side, perft};
use std::env;
use std::time::Instant;

/// Test positions for profiling, Side1 to move.
const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Standard start",
        "
        .......O
        ........
        ........
        ........
        ........
        ........
        ........
        X.......
        ",
    ),
    (
        "Crossed diagonals",
        "
        X......O
        ........
        ..X..O..
        ........
        ........
        ..O..X..
        ........
        O......X
        ",
    ),
    (
        "Crowded centre",
        "
        ........
        ........
        ..XOOX..
        ..OXXO..
        ..OXXO..
        ..XOOX..
        ........
        ........
        ",
    ),
];

fn main() {
    let depth: u8 = env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = std::time::Duration::ZERO;

    for (name, text) in TEST_POSITIONS {
        let board: Board = match text.parse() {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };

        print!("{name:.<30}");

        let start = Instant::now();
        let nodes = perft(&board, Side::Side1, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;

        let nps = if elapsed.as_secs_f64() > 0.0 {
            nodes as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({nps:>10.0} nps)");
    }

    println!();
    println!("{:=<70}", "");
    let total_nps = if total_time.as_secs_f64() > 0.0 {
        total_nodes as f64 / total_time.as_secs_f64()
    } else {
        0.0
    };
    println!("TOTAL: {total_nodes} nodes in {total_time:.3?} ({total_nps:.0} nps)");
}

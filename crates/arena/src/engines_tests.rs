use super::*;
use ataxx_core::{legal_moves, Board, SearchLimits, Side};

#[test]
fn test_parse_specs() {
    assert_eq!(
        "minimax".parse::<EngineSpec>(),
        Ok(EngineSpec::Minimax(Strength::Difficulty(Difficulty::Normal)))
    );
    assert_eq!(
        "minimax:hard".parse::<EngineSpec>(),
        Ok(EngineSpec::Minimax(Strength::Difficulty(Difficulty::Hard)))
    );
    assert_eq!(
        "Minimax:4".parse::<EngineSpec>(),
        Ok(EngineSpec::Minimax(Strength::Depth(4)))
    );
    assert_eq!("random".parse::<EngineSpec>(), Ok(EngineSpec::Random));
}

#[test]
fn test_parse_rejects_garbage() {
    for bad in ["", "alphazero", "minimax:0", "minimax:brutal", "random:2"] {
        assert!(bad.parse::<EngineSpec>().is_err(), "{bad}");
    }
}

#[test]
fn test_display_parses_back() {
    for spec in [
        EngineSpec::Random,
        EngineSpec::Minimax(Strength::Depth(3)),
        EngineSpec::Minimax(Strength::Difficulty(Difficulty::Easy)),
    ] {
        assert_eq!(spec.to_string().parse::<EngineSpec>(), Ok(spec));
    }
}

#[test]
fn test_depth_follows_config() {
    let depths = DepthConfig {
        easy: 1,
        normal: 3,
        hard: 5,
    };
    let normal = EngineSpec::Minimax(Strength::Difficulty(Difficulty::Normal));
    assert_eq!(normal.depth(&depths), 3);
    assert_eq!(EngineSpec::Minimax(Strength::Depth(2)).depth(&depths), 2);
    assert_eq!(EngineSpec::Random.depth(&depths), 1);
}

#[test]
fn test_built_engines_play_legal_moves() {
    let board = Board::standard();
    for spec in [EngineSpec::Random, EngineSpec::Minimax(Strength::Depth(2))] {
        let mut engine = spec.build(9);
        let result = engine.search(&board, Side::Side1, &SearchLimits::depth(2));
        assert!(legal_moves(&board, Side::Side1).contains(&result.best_move));
    }
}

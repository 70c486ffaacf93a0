use super::*;
use crate::engines::Strength;

fn config(games: u32, max_plies: u32, seed: u64) -> ArenaConfig {
    let mut config = ArenaConfig::default();
    config.matches.games = games;
    config.matches.max_plies = max_plies;
    config.matches.seed = Some(seed);
    config
}

#[test]
fn test_random_self_play() {
    let runner = MatchRunner::new(config(2, 40, 1)).unwrap();
    let report = runner.run_match(&EngineSpec::Random, &EngineSpec::Random);

    // Self-play should complete without panic
    assert_eq!(report.result.total_games(), 2);
    assert_eq!(report.games.len(), 2);
    assert_eq!(report.games[0].engine1_side, Side::Side1);
    assert_eq!(report.games[1].engine1_side, Side::Side2);
    for game in &report.games {
        assert_eq!(game.final_stats.total(), 64);
        assert_eq!(game.moves.len() as u32, game.plies);
        assert!(game.plies <= 40);
    }
}

#[test]
fn test_seeded_matches_repeat() {
    let spec = EngineSpec::Minimax(Strength::Depth(1));
    let a = MatchRunner::new(config(2, 30, 5))
        .unwrap()
        .run_match(&spec, &EngineSpec::Random);
    let b = MatchRunner::new(config(2, 30, 5))
        .unwrap()
        .run_match(&spec, &EngineSpec::Random);
    assert_eq!(a, b);
}

#[test]
fn test_ply_limit_adjudicates_draw() {
    let runner = MatchRunner::new(config(1, 4, 0)).unwrap();
    let report = runner.run_match(&EngineSpec::Random, &EngineSpec::Random);
    let game = &report.games[0];
    assert_eq!(game.termination, Termination::MaxPlies);
    assert_eq!(game.outcome, Outcome::Draw);
    assert_eq!(game.result, GameResult::Draw);
    assert_eq!(game.plies, 4);
    assert_eq!(report.result.draws, 1);
}

#[test]
fn test_decided_game_is_scored_for_engine1() {
    // Side2 starts next to Side1, so any clone wipes it out.
    let mut cfg = config(1, 50, 3);
    cfg.start.side2 = [1, 1];
    cfg.matches.alternate_sides = false;
    let runner = MatchRunner::new(cfg).unwrap();

    let report = runner.run_match(&EngineSpec::Minimax(Strength::Depth(1)), &EngineSpec::Random);
    let game = &report.games[0];
    assert_eq!(game.termination, Termination::Decided);
    assert_eq!(game.outcome, Outcome::Side1Won);
    assert_eq!(game.result, GameResult::Win);
    assert_eq!(game.plies, 1);
    assert_eq!(game.final_stats.side2, 0);
    assert_eq!(report.result.wins, 1);
}

#[test]
fn test_alternation_can_be_disabled() {
    let mut cfg = config(2, 6, 8);
    cfg.matches.alternate_sides = false;
    let report = MatchRunner::new(cfg)
        .unwrap()
        .run_match(&EngineSpec::Random, &EngineSpec::Random);
    assert!(report.games.iter().all(|g| g.engine1_side == Side::Side1));
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut cfg = ArenaConfig::default();
    cfg.start.side1 = [7, 7];
    assert!(matches!(MatchRunner::new(cfg), Err(ConfigError::InvalidStart(_))));
}

#[test]
fn test_quick_match() {
    let report = quick_match(&EngineSpec::Random, &EngineSpec::Random, 1, 11).unwrap();
    assert_eq!(report.seed, 11);
    assert_eq!(report.result.total_games(), 1);
}

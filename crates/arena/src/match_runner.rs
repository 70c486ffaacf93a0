//! Match runner for playing games between engines

use ataxx_core::{Board, EnginePlayer, Game, Move, Outcome, Side};
use std::thread;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::{ArenaConfig, ConfigError};
use crate::engines::EngineSpec;
use crate::results::{GameRecord, GameResult, MatchReport, MatchResult, Termination};

/// How a single game ended, from the board's point of view.
#[derive(Debug, Clone)]
pub struct PlayedGame {
    pub outcome: Outcome,
    pub termination: Termination,
    pub board: Board,
    pub plies: u32,
    pub moves: Vec<Move>,
}

/// Runs matches between two engines
pub struct MatchRunner {
    config: ArenaConfig,
    start: Board,
    /// Print progress during match
    pub verbose: bool,
}

impl MatchRunner {
    pub fn new(config: ArenaConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let start = config.start.board()?;
        Ok(Self {
            config,
            start,
            verbose: false,
        })
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Run a match between two engines
    ///
    /// Results are from engine1's perspective
    pub fn run_match(&self, engine1: &EngineSpec, engine2: &EngineSpec) -> MatchReport {
        let settings = &self.config.matches;
        let seed = settings.seed.unwrap_or_else(rand::random);
        let depth1 = engine1.depth(&self.config.depths);
        let depth2 = engine2.depth(&self.config.depths);

        let mut result = MatchResult::new();
        let mut games = Vec::with_capacity(settings.games as usize);

        for game_num in 0..settings.games {
            // Alternate sides if configured
            let engine1_side = if !settings.alternate_sides || game_num % 2 == 0 {
                Side::Side1
            } else {
                Side::Side2
            };
            let game_seed = seed.wrapping_add(u64::from(game_num) * 2);
            let (side1, side2) = if engine1_side == Side::Side1 {
                ((engine1, depth1, game_seed), (engine2, depth2, game_seed.wrapping_add(1)))
            } else {
                ((engine2, depth2, game_seed.wrapping_add(1)), (engine1, depth1, game_seed))
            };

            let played = match self.play_game(side1, side2) {
                Ok(played) => played,
                Err(e) => {
                    warn!(game = game_num + 1, error = %e, "game could not be played");
                    continue;
                }
            };

            let game_result = GameResult::for_side(played.outcome, engine1_side);
            result.record(game_result);

            if self.verbose {
                println!(
                    "Game {}/{}: {:?} as {} after {} plies - Score: {}-{}-{}",
                    game_num + 1,
                    settings.games,
                    game_result,
                    engine1_side.symbol(),
                    played.plies,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }

            games.push(GameRecord {
                number: game_num + 1,
                engine1_side,
                outcome: played.outcome,
                result: game_result,
                termination: played.termination,
                plies: played.plies,
                final_stats: played.board.stats(),
                moves: played.moves,
            });
        }

        info!(
            engine1 = %engine1,
            engine2 = %engine2,
            wins = result.wins,
            losses = result.losses,
            draws = result.draws,
            "match finished"
        );

        MatchReport {
            engine1: engine1.to_string(),
            engine2: engine2.to_string(),
            depth1,
            depth2,
            seed,
            result,
            games,
        }
    }

    /// Play a single game with each side given as (engine, depth, seed).
    pub fn play_game(
        &self,
        side1: (&EngineSpec, u8, u64),
        side2: (&EngineSpec, u8, u64),
    ) -> ataxx_core::Result<PlayedGame> {
        let settings = &self.config.matches;
        let p1 = EnginePlayer::new(Side::Side1, side1.0.build(side1.2), side1.1)?;
        let p2 = EnginePlayer::new(Side::Side2, side2.0.build(side2.2), side2.1)?;
        let mut game = Game::new(self.start.clone(), Box::new(p1), Box::new(p2))?;
        game.start()?;

        let tick = Duration::from_millis(settings.tick_ms);
        let mut moves = Vec::new();

        loop {
            let outcome = game.outcome();
            if outcome.is_over() {
                return Ok(finish(&game, outcome, Termination::Decided, moves));
            }
            if game.plies() >= settings.max_plies {
                return Ok(finish(&game, Outcome::Draw, Termination::MaxPlies, moves));
            }

            match game.tick() {
                Ok(Some(event)) => moves.push(event.mv),
                Ok(None) => thread::sleep(tick),
                Err(e) => {
                    let loser = game.to_move();
                    warn!(side = %loser, error = %e, "engine forfeits");
                    let outcome = match loser {
                        Side::Side1 => Outcome::Side2Won,
                        Side::Side2 => Outcome::Side1Won,
                    };
                    return Ok(finish(&game, outcome, Termination::Forfeit, moves));
                }
            }
        }
    }
}

fn finish(game: &Game, outcome: Outcome, termination: Termination, moves: Vec<Move>) -> PlayedGame {
    PlayedGame {
        outcome,
        termination,
        board: game.board().clone(),
        plies: game.plies(),
        moves,
    }
}

/// Quick utility to run a single match with default settings
pub fn quick_match(
    engine1: &EngineSpec,
    engine2: &EngineSpec,
    num_games: u32,
    seed: u64,
) -> Result<MatchReport, ConfigError> {
    let mut config = ArenaConfig::default();
    config.matches.games = num_games;
    config.matches.seed = Some(seed);
    Ok(MatchRunner::new(config)?.run_match(engine1, engine2))
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;

//! Engine specifications accepted on the command line

use ataxx_core::Engine;
use minimax_engine::{Difficulty, MinimaxEngine};
use random_engine::RandomEngine;
use std::fmt;
use std::str::FromStr;

use crate::config::DepthConfig;

/// How strong a minimax engine should play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Difficulty(Difficulty),
    Depth(u8),
}

/// An engine named by the user, e.g. `minimax:hard`, `minimax:4` or `random`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineSpec {
    Minimax(Strength),
    Random,
}

impl EngineSpec {
    /// Search depth this engine is run with.
    pub fn depth(&self, depths: &DepthConfig) -> u8 {
        match self {
            EngineSpec::Minimax(Strength::Difficulty(d)) => depths.depth_for(*d),
            EngineSpec::Minimax(Strength::Depth(depth)) => *depth,
            EngineSpec::Random => 1,
        }
    }

    /// Create a fresh engine whose randomness is fixed by `seed`.
    pub fn build(&self, seed: u64) -> Box<dyn Engine> {
        match self {
            EngineSpec::Minimax(_) => Box::new(MinimaxEngine::with_seed(seed)),
            EngineSpec::Random => Box::new(RandomEngine::with_seed(seed)),
        }
    }
}

impl fmt::Display for EngineSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineSpec::Minimax(Strength::Difficulty(d)) => write!(f, "minimax:{d}"),
            EngineSpec::Minimax(Strength::Depth(depth)) => write!(f, "minimax:{depth}"),
            EngineSpec::Random => f.write_str("random"),
        }
    }
}

impl FromStr for EngineSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name, Some(arg)),
            None => (s, None),
        };
        match (name.to_lowercase().as_str(), arg) {
            ("minimax" | "mm", None) => Ok(EngineSpec::Minimax(Strength::Difficulty(
                Difficulty::default(),
            ))),
            ("minimax" | "mm", Some(arg)) => {
                if let Ok(depth) = arg.parse::<u8>() {
                    if depth == 0 {
                        return Err("minimax depth must be at least 1".to_string());
                    }
                    return Ok(EngineSpec::Minimax(Strength::Depth(depth)));
                }
                arg.parse::<Difficulty>()
                    .map(|d| EngineSpec::Minimax(Strength::Difficulty(d)))
            }
            ("random", None) => Ok(EngineSpec::Random),
            ("random", Some(_)) => Err("random takes no argument".to_string()),
            _ => Err(format!(
                "unknown engine '{s}' (expected minimax, minimax:<difficulty|depth> or random)"
            )),
        }
    }
}

#[cfg(test)]
#[path = "engines_tests.rs"]
mod engines_tests;

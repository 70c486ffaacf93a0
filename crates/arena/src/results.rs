//! Match results storage and reporting

use ataxx_core::{BoardStats, Move, Outcome, Side};
use serde::{Deserialize, Serialize};

/// Result of a single game from engine1's point of view
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// Scores a finished game for whoever played `side`.
    pub fn for_side(outcome: Outcome, side: Side) -> Self {
        match outcome.winner() {
            Some(winner) if winner == side => GameResult::Win,
            Some(_) => GameResult::Loss,
            None => GameResult::Draw,
        }
    }
}

/// How a game came to an end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The board itself decided the game
    Decided,
    /// Ply limit reached; scored as a draw
    MaxPlies,
    /// The side to move produced an unplayable move and lost
    Forfeit,
}

/// Result of a match (multiple games)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Loss => self.losses += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Score from engine1's perspective (1 for win, 0.5 for draw, 0 for loss)
    pub fn score(&self) -> f64 {
        let total = self.total_games() as f64;
        if total == 0.0 {
            return 0.5;
        }
        (self.wins as f64 + 0.5 * self.draws as f64) / total
    }
}

/// Everything worth keeping about one game.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameRecord {
    /// 1-based game number within the match
    pub number: u32,
    /// Side engine1 played
    pub engine1_side: Side,
    pub outcome: Outcome,
    pub result: GameResult,
    pub termination: Termination,
    pub plies: u32,
    pub final_stats: BoardStats,
    pub moves: Vec<Move>,
}

/// Complete match report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchReport {
    pub engine1: String,
    pub engine2: String,
    pub depth1: u8,
    pub depth2: u8,
    pub seed: u64,
    pub result: MatchResult,
    pub games: Vec<GameRecord>,
}

impl MatchReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!(
            "=== Match: {} (depth {}) vs {} (depth {}) ===\n",
            self.engine1, self.depth1, self.engine2, self.depth2
        ));
        report.push_str(&format!("Seed: {}\n\n", self.seed));

        report.push_str(&format!(
            "{:>4} {:<6} {:<10} {:>5} {:>5} {:>6}  {}\n",
            "Game", "Side", "Result", "X", "O", "Plies", "End"
        ));
        report.push_str(&"-".repeat(50));
        report.push('\n');

        for game in &self.games {
            report.push_str(&format!(
                "{:>4} {:<6} {:<10} {:>5} {:>5} {:>6}  {:?}\n",
                game.number,
                game.engine1_side.symbol(),
                format!("{:?}", game.result),
                game.final_stats.side1,
                game.final_stats.side2,
                game.plies,
                game.termination
            ));
        }

        report.push('\n');
        report.push_str(&format!(
            "{}: {} wins, {} losses, {} draws (score {:.1}%)\n",
            self.engine1,
            self.result.wins,
            self.result.losses,
            self.result.draws,
            self.result.score() * 100.0
        ));
        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        println!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;

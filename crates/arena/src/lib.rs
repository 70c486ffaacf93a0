//! Arena for Ataxx engines
//!
//! This crate provides infrastructure for:
//! - Loading arena settings (depths per difficulty, match setup) from TOML
//! - Running matches between engines through the same game loop humans use
//! - Generating text and JSON reports
//!
//! # Usage
//!
//! ```bash
//! # Play against the computer as Side1
//! cargo run -p arena -- play --human side1 --difficulty hard
//!
//! # Run a match between two engines
//! cargo run -p arena -- match minimax:hard random --games 20 --json
//! ```

mod config;
mod engines;
mod match_runner;
mod results;

pub use config::*;
pub use engines::*;
pub use match_runner::*;
pub use results::*;

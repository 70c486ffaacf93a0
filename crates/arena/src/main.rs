//! Ataxx CLI
//!
//! Play against the computer, run engine matches and count positions.

use anyhow::{bail, Context, Result};
use arena::{ArenaConfig, EngineSpec, MatchRunner};
use ataxx_core::{perft, EnginePlayer, Game, HumanPlayer, Move, Side, TurnEvent};
use clap::{Parser, Subcommand};
use minimax_engine::{Difficulty, MinimaxEngine};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ataxx", version, about = "Ataxx against the computer and between engines")]
struct Cli {
    /// Arena configuration file (TOML)
    #[arg(global = true, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game against the minimax engine on the terminal
    Play {
        /// Side you play; Side1 moves first
        #[arg(long, default_value = "side1")]
        human: Side,
        #[arg(long, default_value_t = Difficulty::Normal)]
        difficulty: Difficulty,
        /// Seed for the engine's tie-breaking
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Run a match between two engines
    Match {
        /// e.g. minimax, minimax:hard, minimax:4, random
        engine1: EngineSpec,
        engine2: EngineSpec,
        #[arg(long, short)]
        games: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
        /// Also write the JSON report to this file
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Count leaf positions from the configured start
    Perft {
        #[arg(long, short, default_value_t = 4)]
        depth: u8,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<ArenaConfig> {
    match path {
        Some(path) => ArenaConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(ArenaConfig::default()),
    }
}

fn run_play(config: &ArenaConfig, human: Side, difficulty: Difficulty, seed: Option<u64>) -> Result<()> {
    let depth = config.depths.depth_for(difficulty);
    let engine = match seed {
        Some(seed) => MinimaxEngine::with_seed(seed),
        None => MinimaxEngine::new(),
    };
    let (human_player, input) = HumanPlayer::channel(human);
    let computer = EnginePlayer::new(human.other(), engine, depth)?;

    let board = config.start.board()?;
    let mut game = match human {
        Side::Side1 => Game::new(board, Box::new(human_player), Box::new(computer))?,
        Side::Side2 => Game::new(board, Box::new(computer), Box::new(human_player))?,
    };
    game.start()?;
    info!(%human, %difficulty, depth, "new game");

    println!("You are {} ({}). Enter moves like a1b2, 'pass' or 'quit'.", human, human.symbol());
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.outcome().is_over() {
        if game.to_move() == human {
            println!("\n{}", game.board());
            if !game.board().can_move(human) {
                println!("You have no move and must pass.");
                input.forfeit()?;
            } else {
                print!("{} to move> ", human.symbol());
                io::stdout().flush()?;
                let Some(line) = lines.next() else {
                    return Ok(());
                };
                let line = line?;
                let line = line.trim();
                if line.eq_ignore_ascii_case("quit") {
                    return Ok(());
                }
                match Move::parse(human, line) {
                    Ok(mv) => input.submit(mv)?,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                }
            }
        }

        match wait_for_turn(&mut game) {
            Ok(event) => {
                let who = event.mv.side;
                println!(
                    "{} plays {} ({} converted)",
                    who.symbol(),
                    event.mv,
                    event.converted.len()
                );
            }
            Err(e) => println!("Illegal move: {e}"),
        }
    }

    let stats = game.board().stats();
    println!("\n{}", game.board());
    println!(
        "Game over: {:?} (X {} - O {})",
        game.outcome(),
        stats.side1,
        stats.side2
    );
    Ok(())
}

fn wait_for_turn(game: &mut Game) -> ataxx_core::Result<TurnEvent> {
    loop {
        if let Some(event) = game.tick()? {
            return Ok(event);
        }
        thread::sleep(Duration::from_millis(5));
    }
}

fn run_match(
    mut config: ArenaConfig,
    engine1: EngineSpec,
    engine2: EngineSpec,
    games: Option<u32>,
    seed: Option<u64>,
    json: bool,
    out: Option<PathBuf>,
) -> Result<()> {
    if let Some(games) = games {
        config.matches.games = games;
    }
    if seed.is_some() {
        config.matches.seed = seed;
    }

    let mut runner = MatchRunner::new(config)?;
    runner.verbose = !json;
    let report = runner.run_match(&engine1, &engine2);

    let encoded = report.to_json()?;
    if let Some(path) = out {
        std::fs::write(&path, &encoded)
            .with_context(|| format!("writing report {}", path.display()))?;
    }
    if json {
        println!("{encoded}");
    } else {
        println!();
        report.print_report();
    }
    Ok(())
}

fn run_perft(config: &ArenaConfig, depth: u8) -> Result<()> {
    if depth == 0 {
        bail!("perft depth must be at least 1");
    }
    let board = config.start.board()?;
    for d in 1..=depth {
        let start = Instant::now();
        let nodes = perft(&board, Side::Side1, d);
        let elapsed = start.elapsed();
        let nps = nodes as f64 / elapsed.as_secs_f64().max(1e-9);
        println!(
            "perft({d}) = {nodes:>12}   {:>8.2?}   {:>12.0} nps",
            elapsed, nps
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Play {
            human,
            difficulty,
            seed,
        } => run_play(&config, human, difficulty, seed),
        Command::Match {
            engine1,
            engine2,
            games,
            seed,
            json,
            out,
        } => run_match(config, engine1, engine2, games, seed, json, out),
        Command::Perft { depth } => run_perft(&config, depth),
    }
}

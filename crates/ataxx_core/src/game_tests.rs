use super::*;
use crate::movegen::moves_or_pass_into;
use crate::player::{EnginePlayer, HumanInput, HumanPlayer};
use crate::{Engine, SearchLimits, SearchResult};
use std::thread;
use std::time::{Duration, Instant};

struct FirstMove;

impl Engine for FirstMove {
    fn search(&mut self, board: &Board, side: Side, limits: &SearchLimits) -> SearchResult {
        let mut moves = Vec::new();
        moves_or_pass_into(board, side, &mut moves);
        SearchResult {
            best_move: moves[0],
            score: 0,
            depth: limits.depth,
            nodes: 1,
            stopped: false,
        }
    }

    fn name(&self) -> &str {
        "first-move"
    }
}

fn humans() -> (Game, HumanInput, HumanInput) {
    let (p1, in1) = HumanPlayer::channel(Side::Side1);
    let (p2, in2) = HumanPlayer::channel(Side::Side2);
    let game = Game::new(Board::standard(), Box::new(p1), Box::new(p2)).unwrap();
    (game, in1, in2)
}

fn tick_until_event(game: &mut Game) -> TurnEvent {
    let start = Instant::now();
    while start.elapsed() < Duration::from_secs(5) {
        if let Some(ev) = game.tick().unwrap() {
            return ev;
        }
        thread::sleep(Duration::from_millis(1));
    }
    panic!("no move within timeout");
}

/// Cells whose owner went from one side to the other.
fn flipped(before: &Board, after: &Board) -> Vec<Pos> {
    Pos::all()
        .filter(|&p| matches!((before.cell(p), after.cell(p)), (Some(a), Some(b)) if a != b))
        .collect()
}

#[test]
fn test_new_checks_player_sides() {
    let (p1, _) = HumanPlayer::channel(Side::Side1);
    let (p2, _) = HumanPlayer::channel(Side::Side2);
    let res = Game::new(Board::standard(), Box::new(p2), Box::new(p1));
    assert!(matches!(res, Err(AtaxxError::InvalidArgument(_))));
}

#[test]
fn test_tick_requires_start() {
    let (mut game, _, _) = humans();
    assert!(matches!(game.tick(), Err(AtaxxError::InvalidState(_))));
    game.start().unwrap();
    assert!(matches!(game.start(), Err(AtaxxError::InvalidState(_))));
    assert_eq!(game.tick(), Ok(None));
}

#[test]
fn test_human_turns_alternate() {
    let (mut game, in1, in2) = humans();
    game.start().unwrap();

    in1.submit(Move::parse(Side::Side1, "a1b2").unwrap()).unwrap();
    let ev = game.tick().unwrap().expect("move applied");
    assert!(ev.converted.is_empty());
    assert_eq!(ev.outcome, Outcome::Playing);
    assert_eq!(game.to_move(), Side::Side2);
    assert_eq!(game.plies(), 1);

    // Out-of-turn input is discarded when Side1 is next asked to move.
    in1.submit(Move::parse(Side::Side1, "a1a2").unwrap()).unwrap();
    in2.submit(Move::parse(Side::Side2, "h8f6").unwrap()).unwrap();
    game.tick().unwrap().expect("move applied");
    assert_eq!(game.to_move(), Side::Side1);
    assert_eq!(game.tick(), Ok(None));
}

#[test]
fn test_rejected_move_keeps_turn() {
    let (mut game, in1, in2) = humans();
    game.start().unwrap();
    in1.submit(Move::parse(Side::Side1, "a1b1").unwrap()).unwrap();
    game.tick().unwrap();

    let before = game.board().clone();
    in2.submit(Move::parse(Side::Side2, "h8h5").unwrap()).unwrap();
    assert!(matches!(game.tick(), Err(AtaxxError::InvalidArgument(_))));
    assert_eq!(game.board(), &before);
    assert_eq!(game.to_move(), Side::Side2);

    in2.submit(Move::parse(Side::Side2, "h8g7").unwrap()).unwrap();
    let ev = game.tick().unwrap().expect("move applied");
    assert_eq!(ev.mv.to, "g7".parse().unwrap());
}

/// Always offers the same move and refuses to be asked twice.
struct Stubborn {
    mv: Move,
    begun: u32,
}

impl Player for Stubborn {
    fn side(&self) -> Side {
        self.mv.side
    }

    fn begin_move(&mut self, _board: &Board) -> Result<()> {
        self.begun += 1;
        if self.begun > 1 {
            return Err(AtaxxError::invalid_state("already asked"));
        }
        Ok(())
    }

    fn is_move_ready(&mut self) -> bool {
        true
    }

    fn take_move(&mut self) -> Result<Move> {
        Ok(self.mv)
    }

    fn reset(&mut self) {}
}

#[test]
fn test_rejection_survives_failed_reask() {
    let stubborn = Stubborn {
        mv: Move::parse(Side::Side1, "a1a4").unwrap(),
        begun: 0,
    };
    let (p2, _in2) = HumanPlayer::channel(Side::Side2);
    let mut game = Game::new(Board::standard(), Box::new(stubborn), Box::new(p2)).unwrap();
    game.start().unwrap();

    // The illegal jump is reported, not the player's refusal to start again.
    assert!(matches!(game.tick(), Err(AtaxxError::InvalidArgument(_))));
    assert_eq!(game.board(), &Board::standard());
    assert_eq!(game.to_move(), Side::Side1);
    assert_eq!(game.plies(), 0);
}

#[test]
fn test_engine_game_reports_conversions() {
    let p1 = EnginePlayer::new(Side::Side1, FirstMove, 1).unwrap();
    let p2 = EnginePlayer::new(Side::Side2, FirstMove, 1).unwrap();
    let mut game = Game::new(Board::standard(), Box::new(p1), Box::new(p2)).unwrap();
    game.start().unwrap();

    for _ in 0..40 {
        if game.outcome().is_over() {
            break;
        }
        let before = game.board().clone();
        let ev = tick_until_event(&mut game);
        let mut expected = flipped(&before, game.board());
        let mut got = ev.converted.clone();
        expected.sort();
        got.sort();
        assert_eq!(got, expected, "after {}", ev.mv);
        assert_eq!(game.board().stats().total(), 64);
        assert_eq!(ev.outcome, game.outcome());
    }
}

#[test]
fn test_restart_resets_everything() {
    let (mut game, in1, _in2) = humans();
    game.start().unwrap();
    in1.submit(Move::parse(Side::Side1, "a1a3").unwrap()).unwrap();
    game.tick().unwrap();

    game.restart(Board::standard());
    assert!(!game.is_started());
    assert_eq!(game.plies(), 0);
    assert_eq!(game.to_move(), Side::Side1);
    assert_eq!(game.board(), &Board::standard());
    game.start().unwrap();
}

#[test]
fn test_finished_board_cannot_start() {
    let (p1, _) = HumanPlayer::channel(Side::Side1);
    let (p2, _) = HumanPlayer::channel(Side::Side2);
    let mut board = Board::empty();
    board.set_cell(Pos::new(4, 4).unwrap(), Some(Side::Side1));
    let mut game = Game::new(board, Box::new(p1), Box::new(p2)).unwrap();
    assert_eq!(game.outcome(), Outcome::Side1Won);
    assert!(matches!(game.start(), Err(AtaxxError::InvalidState(_))));
}

//! Poll-driven turn loop.
//!
//! `Game` owns the authoritative board and both players. The host calls
//! [`Game::tick`] once per frame or loop iteration; it never blocks on a
//! player.

use tracing::{info, warn};

use crate::board::Board;
use crate::error::{AtaxxError, Result};
use crate::player::Player;
use crate::types::{Move, Outcome, Pos, Side};

/// What happened on a tick that applied a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnEvent {
    pub mv: Move,
    /// Cells whose owner changed from the opponent to the mover.
    pub converted: Vec<Pos>,
    /// Outcome after the move.
    pub outcome: Outcome,
}

pub struct Game {
    board: Board,
    players: [Box<dyn Player>; 2],
    to_move: Side,
    started: bool,
    plies: u32,
}

impl Game {
    pub fn new(board: Board, side1: Box<dyn Player>, side2: Box<dyn Player>) -> Result<Self> {
        if side1.side() != Side::Side1 || side2.side() != Side::Side2 {
            return Err(AtaxxError::invalid_argument(
                "players must be given as (side1, side2)",
            ));
        }
        Ok(Self {
            board,
            players: [side1, side2],
            to_move: Side::Side1,
            started: false,
            plies: 0,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Moves applied since the last start.
    pub fn plies(&self) -> u32 {
        self.plies
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn player_mut(&mut self, side: Side) -> &mut dyn Player {
        self.players[side.idx()].as_mut()
    }

    /// Asks the side to move for its first move.
    pub fn start(&mut self) -> Result<()> {
        if self.started {
            return Err(AtaxxError::invalid_state("game already started"));
        }
        if self.board.outcome().is_over() {
            return Err(AtaxxError::invalid_state("game is already decided"));
        }
        self.players[self.to_move.idx()].begin_move(&self.board)?;
        self.started = true;
        Ok(())
    }

    /// Polls the active player once. When its move is ready it is validated
    /// and applied; the returned event carries the converted cells.
    ///
    /// A rejected move is returned as an error and the same player is asked
    /// to move again on the unchanged board.
    pub fn tick(&mut self) -> Result<Option<TurnEvent>> {
        if !self.started {
            return Err(AtaxxError::invalid_state("game has not been started"));
        }
        if self.board.outcome().is_over() {
            return Ok(None);
        }

        let side = self.to_move;
        let player = &mut self.players[side.idx()];
        if !player.is_move_ready() {
            return Ok(None);
        }

        let applied = player.take_move().and_then(|mv| {
            if mv.side != side {
                return Err(AtaxxError::invalid_argument(format!(
                    "{side} is to move, got a move for {}",
                    mv.side
                )));
            }
            let converted = self.board.apply_move(&mv)?;
            Ok((mv, converted))
        });

        let (mv, converted) = match applied {
            Ok(ok) => ok,
            Err(e) => {
                warn!(%side, error = %e, "move rejected");
                // The rejection is what the caller needs to see.
                if let Err(again) = player.begin_move(&self.board) {
                    warn!(%side, error = %again, "could not ask for another move");
                }
                return Err(e);
            }
        };

        self.plies += 1;
        let outcome = self.board.outcome();
        if outcome.is_over() {
            info!(?outcome, plies = self.plies, "game over");
        } else {
            self.to_move = side.other();
            self.players[self.to_move.idx()].begin_move(&self.board)?;
        }

        Ok(Some(TurnEvent {
            mv,
            converted,
            outcome,
        }))
    }

    /// Abandons whatever the players are doing and installs a fresh board.
    /// Call [`Game::start`] again to begin.
    pub fn restart(&mut self, board: Board) {
        for p in &mut self.players {
            p.reset();
        }
        self.board = board;
        self.to_move = Side::Side1;
        self.started = false;
        self.plies = 0;
    }
}

impl Drop for Game {
    fn drop(&mut self) {
        for p in &mut self.players {
            p.reset();
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;

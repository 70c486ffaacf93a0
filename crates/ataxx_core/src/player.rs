//! Players the turn loop can drive uniformly.
//!
//! Producing a move takes time (a human clicks, an engine searches), so a
//! player is asynchronous and controlled through three calls: `begin_move`,
//! then poll `is_move_ready` once per tick, then `take_move`.

use std::sync::{Arc, Mutex};
use std::thread;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use tracing::{debug, warn};

use crate::board::Board;
use crate::error::{AtaxxError, Result};
use crate::limits::{CancelToken, SearchLimits};
use crate::types::{Move, Side};
use crate::{Engine, SearchResult};

pub trait Player: Send {
    fn side(&self) -> Side;

    /// Called when it is this player's turn. The board is borrowed only for
    /// the duration of the call; implementations copy what they need.
    ///
    /// Fails with `InvalidState` if a move is already being produced.
    fn begin_move(&mut self, board: &Board) -> Result<()>;

    /// Non-blocking: true once the move requested by `begin_move` is available.
    fn is_move_ready(&mut self) -> bool;

    /// Hands over the finished move. Fails with `InvalidState` if no move was
    /// requested, it is not ready yet, or it was already taken.
    fn take_move(&mut self) -> Result<Move>;

    /// Abandons any move in progress. Called on restart or when leaving a game.
    fn reset(&mut self);
}

#[derive(Debug)]
enum HumanState {
    Idle,
    Choosing,
    Ready(Move),
}

/// A player whose moves come from outside, typically a UI or stdin.
///
/// Moves are submitted through the paired [`HumanInput`], so the input side
/// can live wherever user interaction happens.
#[derive(Debug)]
pub struct HumanPlayer {
    side: Side,
    inbox: Receiver<Move>,
    state: HumanState,
}

/// Sending half of a [`HumanPlayer`].
#[derive(Debug, Clone)]
pub struct HumanInput {
    side: Side,
    outbox: Sender<Move>,
}

impl HumanPlayer {
    pub fn channel(side: Side) -> (HumanPlayer, HumanInput) {
        let (outbox, inbox) = crossbeam_channel::unbounded();
        (
            HumanPlayer {
                side,
                inbox,
                state: HumanState::Idle,
            },
            HumanInput { side, outbox },
        )
    }

    pub fn is_choosing(&self) -> bool {
        matches!(self.state, HumanState::Choosing)
    }

    fn drain_inbox(&self) {
        for stale in self.inbox.try_iter() {
            debug!(side = %self.side, mv = %stale, "discarding input submitted out of turn");
        }
    }
}

impl HumanInput {
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn submit(&self, mv: Move) -> Result<()> {
        if mv.side != self.side {
            return Err(AtaxxError::invalid_argument(format!(
                "{} cannot submit a move for {}",
                self.side, mv.side
            )));
        }
        self.outbox
            .send(mv)
            .map_err(|_| AtaxxError::invalid_state("player is gone"))
    }

    /// Gives up the turn, e.g. when there is no move or the action timer fired.
    pub fn forfeit(&self) -> Result<()> {
        self.submit(Move::pass(self.side))
    }
}

impl Player for HumanPlayer {
    fn side(&self) -> Side {
        self.side
    }

    fn begin_move(&mut self, _board: &Board) -> Result<()> {
        if self.is_choosing() {
            return Err(AtaxxError::invalid_state("already choosing a move"));
        }
        self.drain_inbox();
        self.state = HumanState::Choosing;
        Ok(())
    }

    fn is_move_ready(&mut self) -> bool {
        if let HumanState::Choosing = self.state {
            if let Ok(mv) = self.inbox.try_recv() {
                self.state = HumanState::Ready(mv);
            }
        }
        matches!(self.state, HumanState::Ready(_))
    }

    fn take_move(&mut self) -> Result<Move> {
        match std::mem::replace(&mut self.state, HumanState::Idle) {
            HumanState::Ready(mv) => Ok(mv),
            HumanState::Choosing => {
                self.state = HumanState::Choosing;
                Err(AtaxxError::invalid_state("still choosing a move"))
            }
            HumanState::Idle => Err(AtaxxError::invalid_state("no move was requested")),
        }
    }

    fn reset(&mut self) {
        self.state = HumanState::Idle;
        self.drain_inbox();
    }
}

#[derive(Debug)]
enum EngineState {
    Idle,
    Searching {
        rx: Receiver<SearchResult>,
        cancel: CancelToken,
    },
    Ready(SearchResult),
    Failed,
}

/// A player backed by an [`Engine`] searching on a background thread.
///
/// The board is cloned into the worker, so the authoritative board is never
/// shared. `reset` cancels the worker and drops the receiving end: a result
/// that arrives later has nowhere to go and can't be applied to a new game.
pub struct EnginePlayer<E> {
    side: Side,
    depth: u8,
    engine: Arc<Mutex<E>>,
    state: EngineState,
    last: Option<SearchResult>,
}

impl<E: Engine + 'static> EnginePlayer<E> {
    /// Fails with `InvalidArgument` if `depth` is 0.
    pub fn new(side: Side, engine: E, depth: u8) -> Result<Self> {
        check_depth(depth)?;
        Ok(Self {
            side,
            depth,
            engine: Arc::new(Mutex::new(engine)),
            state: EngineState::Idle,
            last: None,
        })
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Takes effect from the next `begin_move`.
    pub fn set_depth(&mut self, depth: u8) -> Result<()> {
        check_depth(depth)?;
        self.depth = depth;
        Ok(())
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.state, EngineState::Searching { .. })
    }

    /// Statistics of the most recent completed search.
    pub fn last_result(&self) -> Option<&SearchResult> {
        self.last.as_ref()
    }

    fn spawn_search(&self, board: Board, limits: SearchLimits) -> Result<Receiver<SearchResult>> {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let engine = Arc::clone(&self.engine);
        let side = self.side;

        thread::Builder::new()
            .name(format!("ataxx-search-{side}"))
            .spawn(move || {
                // A previous, abandoned search may still hold the engine.
                let mut engine = match engine.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                if limits.should_stop() {
                    return;
                }
                let result = engine.search(&board, side, &limits);
                if !result.stopped {
                    let _ = tx.send(result);
                }
            })
            .map_err(|e| AtaxxError::invalid_state(format!("cannot start search: {e}")))?;

        Ok(rx)
    }
}

fn check_depth(depth: u8) -> Result<()> {
    if depth == 0 {
        return Err(AtaxxError::invalid_argument(
            "engine players must search at least one ply",
        ));
    }
    Ok(())
}

impl<E: Engine + 'static> Player for EnginePlayer<E> {
    fn side(&self) -> Side {
        self.side
    }

    fn begin_move(&mut self, board: &Board) -> Result<()> {
        if self.is_searching() {
            return Err(AtaxxError::invalid_state("already searching"));
        }
        let cancel = CancelToken::new();
        let limits = SearchLimits::with_cancel(self.depth, cancel.clone());
        let rx = self.spawn_search(board.clone(), limits)?;
        debug!(side = %self.side, depth = self.depth, "search started");
        self.state = EngineState::Searching { rx, cancel };
        Ok(())
    }

    fn is_move_ready(&mut self) -> bool {
        if let EngineState::Searching { rx, .. } = &self.state {
            match rx.try_recv() {
                Ok(result) => {
                    debug!(
                        side = %self.side,
                        mv = %result.best_move,
                        score = result.score,
                        nodes = result.nodes,
                        "search finished"
                    );
                    self.state = EngineState::Ready(result);
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    warn!(side = %self.side, "search worker exited without a move");
                    self.state = EngineState::Failed;
                }
            }
        }
        matches!(self.state, EngineState::Ready(_) | EngineState::Failed)
    }

    fn take_move(&mut self) -> Result<Move> {
        match std::mem::replace(&mut self.state, EngineState::Idle) {
            EngineState::Ready(result) => {
                let mv = result.best_move;
                self.last = Some(result);
                Ok(mv)
            }
            EngineState::Failed => Err(AtaxxError::invalid_state(
                "search worker exited without a move",
            )),
            searching @ EngineState::Searching { .. } => {
                self.state = searching;
                Err(AtaxxError::invalid_state("still searching"))
            }
            EngineState::Idle => Err(AtaxxError::invalid_state("no move was requested")),
        }
    }

    fn reset(&mut self) {
        if let EngineState::Searching { cancel, .. } = &self.state {
            debug!(side = %self.side, "abandoning search");
            cancel.cancel();
        }
        self.state = EngineState::Idle;
    }
}

impl<E> Drop for EnginePlayer<E> {
    fn drop(&mut self) {
        if let EngineState::Searching { cancel, .. } = &self.state {
            cancel.cancel();
        }
    }
}

#[cfg(test)]
#[path = "player_tests.rs"]
mod player_tests;

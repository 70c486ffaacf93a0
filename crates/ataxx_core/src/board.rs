use std::fmt;
use std::str::FromStr;

use crate::error::{AtaxxError, Result};
use crate::types::*;

/// The 8x8 grid of cells. Holds no presentation state: it is the
/// authoritative data the turn loop mutates and the search clones.
///
/// Two ways of playing a move are offered:
/// - [`Board::apply_move`] validates, mutates in place and returns the
///   positions whose owner changed.
/// - [`Board::simulate_move`] validates and returns the resulting board,
///   leaving `self` untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Side>; NUM_CELLS],
    counts: [u8; 2],
}

impl Board {
    /// A board with nothing on it. Mostly useful for setting up positions.
    pub fn empty() -> Self {
        Board {
            cells: [None; NUM_CELLS],
            counts: [0; 2],
        }
    }

    /// Game start: one pawn per side on the given cells.
    pub fn new(side1_start: Pos, side2_start: Pos) -> Result<Self> {
        let mut b = Board::empty();
        b.reset(side1_start, side2_start)?;
        Ok(b)
    }

    /// Like [`Board::new`] but from raw coordinates, so out-of-range starts
    /// are reported as `OutOfRange`.
    pub fn from_coords(x1: i8, y1: i8, x2: i8, y2: i8) -> Result<Self> {
        Board::new(Pos::new(x1, y1)?, Pos::new(x2, y2)?)
    }

    /// Side1 at a1 (0,0), Side2 at h8 (7,7).
    pub fn standard() -> Self {
        let mut b = Board::empty();
        b.put(Pos::from_index(0), Side::Side1);
        b.put(Pos::from_index(NUM_CELLS - 1), Side::Side2);
        b
    }

    /// Puts the board back to a game start.
    pub fn reset(&mut self, side1_start: Pos, side2_start: Pos) -> Result<()> {
        if side1_start == side2_start {
            return Err(AtaxxError::invalid_argument(format!(
                "both sides cannot start on {side1_start}"
            )));
        }
        *self = Board::empty();
        self.set_cell(side1_start, Some(Side::Side1));
        self.set_cell(side2_start, Some(Side::Side2));
        Ok(())
    }

    fn put(&mut self, pos: Option<Pos>, side: Side) {
        if let Some(p) = pos {
            self.set_cell(p, Some(side));
        }
    }

    pub fn cell(&self, pos: Pos) -> Option<Side> {
        self.cells[pos.index()]
    }

    pub fn cell_at(&self, x: i8, y: i8) -> Result<Option<Side>> {
        Ok(self.cell(Pos::new(x, y)?))
    }

    /// Overwrites a cell, keeping the side counts in step.
    pub fn set_cell(&mut self, pos: Pos, cell: Option<Side>) {
        let slot = &mut self.cells[pos.index()];
        if let Some(old) = *slot {
            self.counts[old.idx()] -= 1;
        }
        if let Some(new) = cell {
            self.counts[new.idx()] += 1;
        }
        *slot = cell;
    }

    pub fn count(&self, side: Side) -> u8 {
        self.counts[side.idx()]
    }

    pub fn stats(&self) -> BoardStats {
        let side1 = self.counts[0];
        let side2 = self.counts[1];
        BoardStats {
            empty: NUM_CELLS as u8 - side1 - side2,
            side1,
            side2,
        }
    }

    /// Cells owned by `side`, row-major.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&p| self.cell(p) == Some(side))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, Option<Side>)> + '_ {
        Pos::all().map(move |p| (p, self.cell(p)))
    }

    /// True iff some cell owned by `side` has an empty cell within distance 2.
    /// Any such pair is a legal clone or jump, so this is exactly "has a
    /// non-pass move".
    pub fn can_move(&self, side: Side) -> bool {
        self.pieces(side)
            .any(|from| from.ring(2).any(|to| self.cell(to).is_none()))
    }

    pub fn outcome(&self) -> Outcome {
        let side1 = self.count(Side::Side1);
        let side2 = self.count(Side::Side2);
        if side1 == 0 {
            return Outcome::Side2Won;
        }
        if side2 == 0 {
            return Outcome::Side1Won;
        }
        if !self.can_move(Side::Side1) && !self.can_move(Side::Side2) {
            return match side1.cmp(&side2) {
                std::cmp::Ordering::Greater => Outcome::Side1Won,
                std::cmp::Ordering::Less => Outcome::Side2Won,
                std::cmp::Ordering::Equal => Outcome::Draw,
            };
        }
        Outcome::Playing
    }

    /// Explains why `mv` is illegal on this board, if it is.
    ///
    /// A pass is legal only when the mover has no other move. Otherwise the
    /// destination must be empty and within distance 2 of a source the mover
    /// owns.
    pub fn check_move(&self, mv: &Move) -> Result<()> {
        let dist = mv.distance();
        if dist > 2 {
            return Err(AtaxxError::invalid_argument(format!(
                "{mv}: distance {dist} is more than 2"
            )));
        }
        if mv.is_pass() {
            if self.can_move(mv.side) {
                return Err(AtaxxError::invalid_argument(format!(
                    "{} cannot pass while it has a legal move",
                    mv.side
                )));
            }
            return Ok(());
        }
        if self.cell(mv.to).is_some() {
            return Err(AtaxxError::invalid_argument(format!(
                "{mv}: destination {} is occupied",
                mv.to
            )));
        }
        if self.cell(mv.from) != Some(mv.side) {
            return Err(AtaxxError::invalid_argument(format!(
                "{mv}: {} does not own {}",
                mv.side, mv.from
            )));
        }
        Ok(())
    }

    pub fn is_legal(&self, mv: &Move) -> bool {
        self.check_move(mv).is_ok()
    }

    /// Validates and plays `mv`, returning every converted position exactly
    /// once. Nothing is mutated when an error is returned.
    pub fn apply_move(&mut self, mv: &Move) -> Result<Vec<Pos>> {
        let outcome = self.outcome();
        if outcome.is_over() {
            return Err(AtaxxError::invalid_argument(format!(
                "game is already decided ({outcome:?})"
            )));
        }
        self.check_move(mv)?;
        Ok(self.make_move(mv))
    }

    /// Plays `mv` without validating it. The caller guarantees legality.
    pub fn make_move(&mut self, mv: &Move) -> Vec<Pos> {
        let mut converted = Vec::new();
        if mv.is_pass() {
            return converted;
        }
        if mv.kind() == Some(MoveKind::Jump) {
            self.set_cell(mv.from, None);
        }
        self.set_cell(mv.to, Some(mv.side));

        let opponent = mv.side.other();
        for n in mv.to.ring(1) {
            if self.cell(n) == Some(opponent) {
                self.set_cell(n, Some(mv.side));
                converted.push(n);
            }
        }
        converted
    }

    /// What the board would look like after `mv`; `self` is not modified.
    pub fn simulate_move(&self, mv: &Move) -> Result<Board> {
        let mut next = self.clone();
        next.apply_move(mv)?;
        Ok(next)
    }

    /// Clone-and-play without validation, for generated moves.
    pub fn child(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        next.make_move(mv);
        next
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

/// Eight rows, rank 8 first, `X` for Side1, `O` for Side2, `.` for empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..BOARD_LEN).rev() {
            for x in 0..BOARD_LEN {
                let c = match Pos::new(x, y).ok().and_then(|p| self.cell(p)) {
                    Some(side) => side.symbol(),
                    None => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = AtaxxError;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != BOARD_LEN as usize {
            return Err(AtaxxError::invalid_argument(format!(
                "expected {BOARD_LEN} rows, got {}",
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (row_idx, row) in rows.iter().enumerate() {
            let y = BOARD_LEN - 1 - row_idx as i8;
            let chars: Vec<char> = row.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() != BOARD_LEN as usize {
                return Err(AtaxxError::invalid_argument(format!(
                    "row {} has {} cells",
                    row_idx + 1,
                    chars.len()
                )));
            }
            for (x, ch) in chars.into_iter().enumerate() {
                let cell = match ch.to_ascii_uppercase() {
                    'X' => Some(Side::Side1),
                    'O' => Some(Side::Side2),
                    '.' | '-' => None,
                    other => {
                        return Err(AtaxxError::invalid_argument(format!(
                            "unexpected cell '{other}'"
                        )));
                    }
                };
                board.set_cell(Pos::new(x as i8, y)?, cell);
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;

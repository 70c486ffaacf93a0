use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AtaxxError, Result};

/// Side length of the square board.
pub const BOARD_LEN: i8 = 8;
/// Number of cells on the board.
pub const NUM_CELLS: usize = (BOARD_LEN as usize) * (BOARD_LEN as usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Side1,
    Side2,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Side1, Side::Side2];

    pub fn other(self) -> Side {
        match self {
            Side::Side1 => Side::Side2,
            Side::Side2 => Side::Side1,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::Side1 => 0,
            Side::Side2 => 1,
        }
    }
    /// Character used for this side in the text board format.
    pub fn symbol(self) -> char {
        match self {
            Side::Side1 => 'X',
            Side::Side2 => 'O',
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Side1 => f.write_str("side1"),
            Side::Side2 => f.write_str("side2"),
        }
    }
}

impl FromStr for Side {
    type Err = AtaxxError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "side1" | "1" | "x" => Ok(Side::Side1),
            "side2" | "2" | "o" => Ok(Side::Side2),
            other => Err(AtaxxError::invalid_argument(format!("unknown side '{other}'"))),
        }
    }
}

/// A coordinate on the board. Always within `0..8` on both axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(i8, i8)", into = "(i8, i8)")]
pub struct Pos {
    x: i8,
    y: i8,
}

impl Pos {
    pub fn new(x: i8, y: i8) -> Result<Pos> {
        if (0..BOARD_LEN).contains(&x) && (0..BOARD_LEN).contains(&y) {
            Ok(Pos { x, y })
        } else {
            Err(AtaxxError::OutOfRange {
                x: x as i32,
                y: y as i32,
            })
        }
    }

    /// Position for a cell index (row-major, `y * 8 + x`).
    pub fn from_index(idx: usize) -> Option<Pos> {
        if idx < NUM_CELLS {
            Some(Pos {
                x: (idx % BOARD_LEN as usize) as i8,
                y: (idx / BOARD_LEN as usize) as i8,
            })
        } else {
            None
        }
    }

    pub fn x(self) -> i8 {
        self.x
    }
    pub fn y(self) -> i8 {
        self.y
    }
    pub fn index(self) -> usize {
        (self.y as usize) * (BOARD_LEN as usize) + self.x as usize
    }

    /// The position shifted by `(dx, dy)`, or `None` if that leaves the board.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Pos> {
        Pos::new(self.x + dx, self.y + dy).ok()
    }

    /// Chebyshev distance: `max(|dx|, |dy|)`.
    pub fn chebyshev(self, other: Pos) -> u8 {
        let dx = (self.x - other.x).unsigned_abs();
        let dy = (self.y - other.y).unsigned_abs();
        dx.max(dy)
    }

    /// Every position on the board, row-major.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..NUM_CELLS).filter_map(Pos::from_index)
    }

    /// On-board positions within Chebyshev distance `radius`, excluding `self`.
    pub fn ring(self, radius: i8) -> impl Iterator<Item = Pos> {
        (-radius..=radius)
            .flat_map(move |dy| (-radius..=radius).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl TryFrom<(i8, i8)> for Pos {
    type Error = AtaxxError;

    fn try_from((x, y): (i8, i8)) -> Result<Self> {
        Pos::new(x, y)
    }
}

impl From<Pos> for (i8, i8) {
    fn from(p: Pos) -> Self {
        (p.x, p.y)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.x as u8) as char;
        let rank = (b'1' + self.y as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Pos {
    type Err = AtaxxError;

    fn from_str(s: &str) -> Result<Self> {
        let b = s.trim().as_bytes();
        if b.len() != 2 {
            return Err(AtaxxError::invalid_argument(format!("bad coordinate '{s}'")));
        }
        let file = b[0].to_ascii_lowercase() as i32 - b'a' as i32;
        let rank = b[1] as i32 - b'1' as i32;
        if !(0..BOARD_LEN as i32).contains(&file) || !(0..BOARD_LEN as i32).contains(&rank) {
            return Err(AtaxxError::OutOfRange { x: file, y: rank });
        }
        Pos::new(file as i8, rank as i8)
    }
}

/// How a move relates its source and destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// Source equals destination: the mover skips the turn.
    Pass,
    /// Distance 1: a new pawn appears, the source pawn stays.
    Clone,
    /// Distance 2: the source pawn relocates.
    Jump,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub side: Side,
    pub from: Pos,
    pub to: Pos,
}

impl Move {
    pub fn new(side: Side, from: Pos, to: Pos) -> Self {
        Self { side, from, to }
    }

    pub fn pass(side: Side) -> Self {
        let origin = Pos { x: 0, y: 0 };
        Self {
            side,
            from: origin,
            to: origin,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.from == self.to
    }

    pub fn distance(&self) -> u8 {
        self.from.chebyshev(self.to)
    }

    /// `None` when the distance exceeds 2.
    pub fn kind(&self) -> Option<MoveKind> {
        match self.distance() {
            0 => Some(MoveKind::Pass),
            1 => Some(MoveKind::Clone),
            2 => Some(MoveKind::Jump),
            _ => None,
        }
    }

    /// Parses `a1b3`, `a1 b3` or `pass` for the given side.
    pub fn parse(side: Side, text: &str) -> Result<Move> {
        let compact: String = text.split_whitespace().collect();
        if compact.eq_ignore_ascii_case("pass") {
            return Ok(Move::pass(side));
        }
        if compact.len() != 4 || !compact.is_ascii() {
            return Err(AtaxxError::invalid_argument(format!(
                "expected a move like 'a1b2' or 'pass', got '{}'",
                text.trim()
            )));
        }
        let from: Pos = compact[..2].parse()?;
        let to: Pos = compact[2..].parse()?;
        Ok(Move::new(side, from, to))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_pass() {
            f.write_str("pass")
        } else {
            write!(f, "{}{}", self.from, self.to)
        }
    }
}

/// State of the whole game as derived from a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Playing,
    Side1Won,
    Side2Won,
    Draw,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        self != Outcome::Playing
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::Side1Won => Some(Side::Side1),
            Outcome::Side2Won => Some(Side::Side2),
            Outcome::Playing | Outcome::Draw => None,
        }
    }

    pub(crate) fn won_by(side: Side) -> Outcome {
        match side {
            Side::Side1 => Outcome::Side1Won,
            Side::Side2 => Outcome::Side2Won,
        }
    }
}

/// Cell counts of a board; the three fields always sum to 64.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardStats {
    pub empty: u8,
    pub side1: u8,
    pub side2: u8,
}

impl BoardStats {
    pub fn total(&self) -> usize {
        self.empty as usize + self.side1 as usize + self.side2 as usize
    }

    pub fn count(&self, side: Side) -> u8 {
        match side {
            Side::Side1 => self.side1,
            Side::Side2 => self.side2,
        }
    }
}

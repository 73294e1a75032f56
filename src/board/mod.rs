//! Board representation for Gomoku

pub mod bitboard;
pub mod board;


use std::fmt;
use std::ops::Neg;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Board size (15x15)
pub const BOARD_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 225

/// Index of the central row/column
pub const CENTER: u8 = (BOARD_SIZE / 2) as u8;

/// Stone colors.
///
/// Stored as a signed unit so that the opponent of a side is its negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Stone {
    Empty = 0,
    Black = 1,
    White = -1,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        -self
    }

    #[inline]
    pub fn is_player(self) -> bool {
        self != Stone::Empty
    }

    /// Display name used in status lines
    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "Black",
            Stone::White => "White",
            Stone::Empty => "Empty",
        }
    }
}

impl Neg for Stone {
    type Output = Stone;

    #[inline]
    fn neg(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8);
        Self { row, col }
    }

    /// Checked constructor from signed coordinates
    #[inline]
    pub fn try_new(row: i32, col: i32) -> Option<Self> {
        if Self::is_valid(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// The central cell
    #[inline]
    pub fn center() -> Self {
        Self::new(CENTER, CENTER)
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / BOARD_SIZE) as u8,
            col: (idx % BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32
    }

    /// Whether both coordinates lie on the board
    #[inline]
    pub fn in_bounds(self) -> bool {
        Self::is_valid(self.row as i32, self.col as i32)
    }

    /// Step `steps` times along `(dr, dc)`, `None` once off the board
    #[inline]
    pub fn offset(self, dr: i32, dc: i32, steps: i32) -> Option<Pos> {
        Self::try_new(self.row as i32 + dr * steps, self.col as i32 + dc * steps)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

//! Board structure

use std::fmt;

use super::bitboard::Bitboard;
use super::{Pos, Stone, BOARD_SIZE};
use crate::error::GameError;

/// Game board: one occupancy bitboard per color.
///
/// Two boards compare equal exactly when every cell holds the same stone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Black stones bitboard
    black: Bitboard,
    /// White stones bitboard
    white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get stone at position, `Stone::Empty` off the board
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Get stone at signed coordinates, `None` off the board.
    ///
    /// Line scanners treat `None` as matching nothing.
    #[inline]
    pub fn get_at(&self, row: i32, col: i32) -> Option<Stone> {
        Pos::try_new(row, col).map(|pos| self.get(pos))
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone for a player.
    ///
    /// Rejects off-board positions, occupied cells and `Stone::Empty`,
    /// leaving the board untouched.
    ///
    /// ```
    /// use gomoku::{Board, GameError, Pos, Stone};
    ///
    /// let mut board = Board::new();
    /// board.place(Pos::new(7, 7), Stone::Black)?;
    /// assert_eq!(
    ///     board.place(Pos::new(7, 7), Stone::White),
    ///     Err(GameError::Occupied(Pos::new(7, 7)))
    /// );
    /// # Ok::<(), GameError>(())
    /// ```
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), GameError> {
        if !pos.in_bounds() {
            return Err(GameError::OutOfBounds {
                row: pos.row as i32,
                col: pos.col as i32,
            });
        }
        if !stone.is_player() {
            return Err(GameError::EmptySide);
        }
        if !self.is_empty(pos) {
            return Err(GameError::Occupied(pos));
        }
        self.set(pos, stone);
        Ok(())
    }

    /// Place a stone on a cell known to be empty (search internals)
    #[inline]
    pub(crate) fn set(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.is_empty(pos), "set on occupied cell {}", pos);
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Reset a cell to empty (undo of a trial move); no-op off the board
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// All occupied cells
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black.union(&self.white)
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == BOARD_SIZE * BOARD_SIZE
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE as u8 {
            for col in 0..BOARD_SIZE as u8 {
                let c = match self.get(Pos::new(row, col)) {
                    Stone::Black => 'X',
                    Stone::White => 'O',
                    Stone::Empty => '.',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

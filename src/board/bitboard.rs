//! Occupancy bitboard for one color

use super::{Pos, TOTAL_CELLS};

const WORDS: usize = 4;

/// One bit per cell.
/// Uses 4 x u64 to represent 225 cells (4 * 64 = 256 >= 225)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard {
    bits: [u64; WORDS],
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: [0; WORDS] }
    }

    /// Word and bit for an on-board cell, `None` otherwise
    #[inline]
    fn locate(pos: Pos) -> Option<(usize, u32)> {
        if !pos.in_bounds() {
            return None;
        }
        let idx = pos.to_index();
        Some((idx / 64, (idx % 64) as u32))
    }

    /// Set a bit at position; off-board positions are ignored
    #[inline]
    pub fn set(&mut self, pos: Pos) {
        if let Some((word, bit)) = Self::locate(pos) {
            self.bits[word] |= 1u64 << bit;
        }
    }

    /// Clear a bit at position; off-board positions are ignored
    #[inline]
    pub fn clear(&mut self, pos: Pos) {
        if let Some((word, bit)) = Self::locate(pos) {
            self.bits[word] &= !(1u64 << bit);
        }
    }

    /// Check if bit is set at position, `false` off the board
    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        Self::locate(pos).map_or(false, |(word, bit)| (self.bits[word] >> bit) & 1 == 1)
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.iter().map(|b| b.count_ones()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&b| b == 0)
    }

    /// Union of two bitboards
    #[inline]
    pub fn union(&self, other: &Bitboard) -> Bitboard {
        let mut bits = self.bits;
        for (word, theirs) in bits.iter_mut().zip(other.bits.iter()) {
            *word |= theirs;
        }
        Bitboard { bits }
    }

    /// Iterate over set bit positions in row-major order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter {
            bits: self.bits,
            word_idx: 0,
            current_word: self.bits[0],
        }
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: [u64; WORDS],
    word_idx: usize,
    current_word: u64,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        while self.current_word == 0 {
            self.word_idx += 1;
            if self.word_idx >= WORDS {
                return None;
            }
            self.current_word = self.bits[self.word_idx];
        }

        let bit_pos = self.current_word.trailing_zeros() as usize;
        let idx = self.word_idx * 64 + bit_pos;
        self.current_word &= self.current_word - 1;

        // Bits past the last cell are never set, but don't hand them out
        if idx < TOTAL_CELLS {
            Some(Pos::from_index(idx))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear() {
        let mut bb = Bitboard::new();
        let pos = Pos::new(7, 7);
        assert!(!bb.get(pos));
        bb.set(pos);
        assert!(bb.get(pos));
        assert_eq!(bb.count(), 1);
        bb.clear(pos);
        assert!(!bb.get(pos));
        assert!(bb.is_empty());
    }

    #[test]
    fn test_iter_ones_row_major() {
        let mut bb = Bitboard::new();
        // Spread across all four words
        let cells = [Pos::new(14, 14), Pos::new(0, 0), Pos::new(8, 3), Pos::new(4, 5)];
        for pos in cells {
            bb.set(pos);
        }
        let got: Vec<Pos> = bb.iter_ones().collect();
        let mut expected = cells.to_vec();
        expected.sort();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_union() {
        let mut a = Bitboard::new();
        let mut b = Bitboard::new();
        a.set(Pos::new(0, 1));
        b.set(Pos::new(13, 2));
        let both = a.union(&b);
        assert_eq!(both.count(), 2);
        assert!(both.get(Pos::new(0, 1)));
        assert!(both.get(Pos::new(13, 2)));
    }

    #[test]
    fn test_off_board_cells_are_ignored() {
        let mut bb = Bitboard::new();
        // Index 225 still fits in the last word, index 303 does not
        for pos in [Pos { row: 15, col: 0 }, Pos { row: 20, col: 3 }] {
            bb.set(pos);
            assert!(!bb.get(pos));
            bb.clear(pos);
        }
        assert!(bb.is_empty());
        assert_eq!(bb.iter_ones().count(), 0);
    }
}

//! Pattern weights and open-line counting
//!
//! A line of a given length counts when every cell belongs to one side and
//! at least one of the two cells just outside it is an empty board cell,
//! meaning the line can still grow toward five.

use crate::board::{Board, Pos, Stone};
use crate::rules::DIRECTIONS;

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row - immediate win
    pub const FIVE: i32 = 1_000_000;

    /// Own open four
    pub const FOUR: i32 = 10_000;
    /// Own open three
    pub const THREE: i32 = 1_000;
    /// Own open two
    pub const TWO: i32 = 100;

    // Opponent lines weigh more than our own (x1.2, x1.5, x1.2) so that
    // blocking a threat beats building an equal one.
    /// Opponent open four (1.2 x FOUR)
    pub const OPP_FOUR: i32 = Self::FOUR * 6 / 5;
    /// Opponent open three (1.5 x THREE)
    pub const OPP_THREE: i32 = Self::THREE * 3 / 2;
    /// Opponent open two (1.2 x TWO)
    pub const OPP_TWO: i32 = Self::TWO * 6 / 5;
}

/// Count open lines of exactly `length` cells for `stone`.
///
/// Every direction and every start cell is tried independently, so
/// overlapping runs (a four contains two threes) are all counted.
pub fn count_open_lines(board: &Board, stone: Stone, length: i32) -> u32 {
    let Some(stones) = board.stones(stone) else {
        return 0;
    };
    if length <= 0 {
        return 0;
    }

    let mut count = 0;
    for start in stones.iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            if is_open_line(board, start, dr, dc, stone, length) {
                count += 1;
            }
        }
    }
    count
}

fn is_open_line(board: &Board, start: Pos, dr: i32, dc: i32, stone: Stone, length: i32) -> bool {
    for i in 1..length {
        match start.offset(dr, dc, i) {
            Some(pos) if board.get(pos) == stone => {}
            _ => return false,
        }
    }

    let is_open = |pos: Option<Pos>| pos.map_or(false, |p| board.is_empty(p));
    is_open(start.offset(dr, dc, -1)) || is_open(start.offset(dr, dc, length))
}

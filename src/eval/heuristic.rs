//! Heuristic evaluation function for Gomoku board positions
//!
//! Board positions are scored on:
//! - Win/loss detection
//! - Open lines of length four, three and two for both sides
//! - Positional bonuses (center control)

use crate::board::{Board, Stone, CENTER};
use crate::rules::has_winner;

use super::patterns::{count_open_lines, PatternScore};

/// Center weight falloff per row/column step away from the center
const CENTER_WEIGHT_K: i32 = 7;

/// Multiplier applied to each stone's center weight
const POSITION_WEIGHT: i32 = 2;

/// Evaluate the board from the perspective of the given color.
///
/// Returns a score where:
/// - Positive values indicate advantage for `color`
/// - Negative values indicate disadvantage for `color`
/// - `PatternScore::FIVE` indicates a win for `color`
/// - `-PatternScore::FIVE` indicates a win for the opponent
///
/// Wins are checked first and override every other term.
///
/// ```
/// use gomoku::{Board, Pos, Stone};
/// use gomoku::eval::{evaluate, PatternScore};
///
/// let mut board = Board::new();
/// for col in 3..8 {
///     board.place(Pos::new(7, col), Stone::White).unwrap();
/// }
/// assert_eq!(evaluate(&board, Stone::White), PatternScore::FIVE);
/// assert_eq!(evaluate(&board, Stone::Black), -PatternScore::FIVE);
/// ```
#[must_use]
pub fn evaluate(board: &Board, color: Stone) -> i32 {
    let opponent = color.opponent();

    if has_winner(board, color) {
        return PatternScore::FIVE;
    }
    if has_winner(board, opponent) {
        return -PatternScore::FIVE;
    }

    pattern_score(board, color) + evaluate_positions(board, color)
}

/// Weighted open-line counts. Opponent lines are penalized harder
/// than our own lines are rewarded.
fn pattern_score(board: &Board, color: Stone) -> i32 {
    let opponent = color.opponent();
    let lines = |stone: Stone, length: i32| count_open_lines(board, stone, length) as i32;

    PatternScore::FOUR * lines(color, 4) - PatternScore::OPP_FOUR * lines(opponent, 4)
        + PatternScore::THREE * lines(color, 3)
        - PatternScore::OPP_THREE * lines(opponent, 3)
        + PatternScore::TWO * lines(color, 2)
        - PatternScore::OPP_TWO * lines(opponent, 2)
}

/// Weight of a cell: highest at the center, falling off along both axes.
///
/// Not clamped, so a larger board would produce negative weights far out.
#[inline]
pub fn center_weight(row: u8, col: u8) -> i32 {
    let center = i32::from(CENTER);
    (CENTER_WEIGHT_K - (center - i32::from(row)).abs())
        * (CENTER_WEIGHT_K - (center - i32::from(col)).abs())
}

/// Center-control term: own stones add, opponent stones subtract.
fn evaluate_positions(board: &Board, color: Stone) -> i32 {
    let opponent = color.opponent();
    let mut score = 0;

    for pos in board.occupied().iter_ones() {
        let weight = POSITION_WEIGHT * center_weight(pos.row, pos.col);
        let stone = board.get(pos);
        if stone == color {
            score += weight;
        } else if stone == opponent {
            score -= weight;
        }
    }

    score
}

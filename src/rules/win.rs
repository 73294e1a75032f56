//! Win condition checking: five in a row
//!
//! A run of five consecutive stones in any of the four line directions wins.
//! Longer runs (overlines) contain such a run and win as well.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Check if there's 5 in a row for the given color
pub fn has_winner(board: &Board, stone: Stone) -> bool {
    find_five(board, stone).is_some()
}

/// Find the first run of five for `stone`.
///
/// Every stone of that color is tried as a run start, stepping forward
/// along each direction. A probe that leaves the board fails for that start.
pub fn find_five(board: &Board, stone: Stone) -> Option<[Pos; 5]> {
    let stones = board.stones(stone)?;

    for start in stones.iter_ones() {
        for &(dr, dc) in &DIRECTIONS {
            if let Some(line) = run_from(board, start, dr, dc, stone) {
                return Some(line);
            }
        }
    }
    None
}

fn run_from(board: &Board, start: Pos, dr: i32, dc: i32, stone: Stone) -> Option<[Pos; 5]> {
    let mut line = [start; 5];
    for (i, slot) in line.iter_mut().enumerate().skip(1) {
        let pos = start.offset(dr, dc, i as i32)?;
        if board.get(pos) != stone {
            return None;
        }
        *slot = pos;
    }
    Some(line)
}

/// Color with five in a row, if any. Black is checked first.
pub fn check_winner(board: &Board) -> Option<Stone> {
    [Stone::Black, Stone::White]
        .into_iter()
        .find(|&stone| has_winner(board, stone))
}

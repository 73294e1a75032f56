//! Candidate move generation
//!
//! Only empty cells touching an existing stone (8 directions) are
//! considered, which keeps the branching factor small without a hard cap.

use crate::board::{Bitboard, Board, Pos};

/// Candidate moves for the current position, in row-major order.
///
/// - Empty board: exactly the center cell.
/// - Otherwise: every empty cell adjacent to at least one stone.
/// - Full board: nothing, which callers treat as a draw.
pub fn candidate_moves(board: &Board) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![Pos::center()];
    }

    let occupied = board.occupied();
    let mut near = Bitboard::new();
    for pos in occupied.iter_ones() {
        for dr in -1i32..=1 {
            for dc in -1i32..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                if let Some(adj) = pos.offset(dr, dc, 1) {
                    if !occupied.get(adj) {
                        near.set(adj);
                    }
                }
            }
        }
    }

    let mut moves = Vec::with_capacity(near.count() as usize);
    moves.extend(near.iter_ones());
    moves
}

/// Whether `pos` is one of the current candidate moves
pub fn is_candidate(board: &Board, pos: Pos) -> bool {
    if !pos.in_bounds() || !board.is_empty(pos) {
        return false;
    }
    if board.is_board_empty() {
        return pos == Pos::center();
    }
    (-1i32..=1).any(|dr| {
        (-1i32..=1).any(|dc| {
            (dr, dc) != (0, 0)
                && pos
                    .offset(dr, dc, 1)
                    .map_or(false, |adj| !board.is_empty(adj))
        })
    })
}

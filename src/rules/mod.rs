//! Game rules for Gomoku
//!
//! This module implements the rule set:
//! - Candidate move generation (cells next to existing stones)
//! - Win condition (five in a row)

pub mod moves;
pub mod win;

// Re-exports for convenient access
pub use moves::{candidate_moves, is_candidate};
pub use win::{check_winner, find_five, has_winner, DIRECTIONS};

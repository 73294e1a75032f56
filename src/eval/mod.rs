//! Evaluation module for Gomoku positions
//!
//! This module provides pattern recognition and scoring for board positions.
//! The evaluation considers:
//! - Five in a row (decisive)
//! - Open fours, threes and twos, weighted toward defense
//! - Positional bonuses (center control)

pub mod heuristic;
pub mod patterns;

pub use heuristic::{center_weight, evaluate};
pub use patterns::{count_open_lines, PatternScore};

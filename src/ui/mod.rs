//! GUI module for the Gomoku game
//!
//! A native front end built with egui/eframe. The board is drawn from the
//! engine's [`Board`](crate::Board); human clicks are checked against
//! [`legal_moves`](crate::legal_moves) and engine turns run on a worker
//! thread so the window stays responsive.

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use board_view::mark_symbol;
pub use game_state::{GameState, MatchConfig, Outcome, Player, TurnError, AI_DEPTH};

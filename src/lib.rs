//! Gomoku search and evaluation engine
//!
//! Plays five-in-a-row on a 15x15 board:
//! - Black moves first
//! - Five or more stones in a row wins
//! - A full board with no five is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Candidate moves and win detection
//! - [`eval`]: Open-line counting and position evaluation
//! - [`search`]: Minimax and alpha-beta searches
//! - [`engine`]: Boundary operations and the configurable AI engine
//! - [`ui`]: egui front end (menu, board, turn scheduling)
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, EngineKind, Pos, Stone};
//!
//! let mut board = Board::new();
//! let mut engine = AIEngine::with_seed(EngineKind::AlphaBeta, 2, 7);
//!
//! board.place(Pos::new(7, 7), Stone::Black)?;
//!
//! // AI responds as White
//! if let Some(pos) = engine.get_move(&board, Stone::White)? {
//!     board.place(pos, Stone::White)?;
//!     println!("AI plays at {}", pos);
//! }
//! # Ok::<(), gomoku::GameError>(())
//! ```
//!
//! # Engines
//!
//! - **Minimax** searches every candidate move at every node.
//! - **Alpha-Beta** orders candidates by a one-ply static evaluation,
//!   keeps the best eight and prunes with alpha-beta bounds.
//!
//! Both pick uniformly at random among equally scored moves, so play is not
//! fully predictable. Seed the engine to replay a game.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use engine::{
    choose_move, initialize_board, is_win, legal_moves, AIEngine, EngineKind, MoveResult,
};
pub use error::GameError;

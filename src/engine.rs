//! Main AI engine and the boundary operations used by the game layer
//!
//! The game layer (GUI, turn scheduling) talks to the engine only through:
//!
//! - [`initialize_board`]: fresh empty board
//! - [`legal_moves`]: candidate moves, also used to validate human clicks
//! - [`is_win`]: five-in-a-row check for one side
//! - [`choose_move`]: run one of the two searches and return its move
//!
//! [`AIEngine`] is the configurable form of [`choose_move`]: it keeps its
//! own random source (so games can be replayed from a seed) and reports
//! search statistics.
//!
//! # Example
//!
//! ```
//! use gomoku::{choose_move, initialize_board, legal_moves, EngineKind, Pos, Stone};
//!
//! let mut board = initialize_board();
//! assert_eq!(legal_moves(&board), vec![Pos::new(7, 7)]);
//!
//! let black = choose_move(&board, Stone::Black, EngineKind::AlphaBeta, 2)?;
//! assert_eq!(black, Some(Pos::new(7, 7)));
//! board.place(Pos::new(7, 7), Stone::Black)?;
//!
//! let white = choose_move(&board, Stone::White, EngineKind::Minimax, 2)?.unwrap();
//! assert!(legal_moves(&board).contains(&white));
//! # Ok::<(), gomoku::GameError>(())
//! ```

use std::fmt;
use std::time::Instant;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Pos, Stone};
use crate::error::GameError;
use crate::rules::{candidate_moves, check_winner, has_winner};
use crate::search::{SearchResult, SearchStats, Searcher, INF};

/// Which search strategy picks the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EngineKind {
    /// Full-width minimax over every candidate move
    Minimax,
    /// Alpha-beta over the eight most promising moves per node
    AlphaBeta,
}

impl EngineKind {
    pub const ALL: [EngineKind; 2] = [EngineKind::Minimax, EngineKind::AlphaBeta];
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineKind::Minimax => write!(f, "Minimax"),
            EngineKind::AlphaBeta => write!(f, "Alpha-Beta"),
        }
    }
}

/// Result of a move search with statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, `None` when the board has no candidate moves
    pub best_move: Option<Pos>,
    /// Score of the search from the mover's point of view
    pub score: i32,
    /// Strategy that produced the move
    pub engine: EngineKind,
    /// Depth searched
    pub depth: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Node and evaluation counts
    pub stats: SearchStats,
}

impl MoveResult {
    /// Nodes visited
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.stats.nodes
    }
}

/// Main AI engine for Gomoku.
///
/// # Example
///
/// ```
/// use gomoku::{AIEngine, Board, EngineKind, Pos, Stone};
///
/// let mut engine = AIEngine::with_seed(EngineKind::AlphaBeta, 2, 42);
/// let mut board = Board::new();
/// board.place(Pos::new(7, 7), Stone::Black).unwrap();
///
/// let result = engine.get_move_with_stats(&board, Stone::White).unwrap();
/// println!("Best move: {:?}", result.best_move);
/// println!("Nodes: {}, time: {}ms", result.nodes(), result.time_ms);
/// ```
pub struct AIEngine<R: Rng = SmallRng> {
    searcher: Searcher<R>,
    kind: EngineKind,
    depth: i32,
}

impl AIEngine<SmallRng> {
    /// Engine seeded from the operating system.
    #[must_use]
    pub fn new(kind: EngineKind, depth: i32) -> Self {
        Self::with_rng(kind, depth, SmallRng::from_entropy())
    }

    /// Engine with a fixed seed; the same seed replays the same choices.
    #[must_use]
    pub fn with_seed(kind: EngineKind, depth: i32, seed: u64) -> Self {
        Self::with_rng(kind, depth, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> AIEngine<R> {
    /// Engine drawing tie-breaks from the given random source.
    ///
    /// A depth below 1 is raised to 1 so that a move is always produced
    /// when one exists.
    #[must_use]
    pub fn with_rng(kind: EngineKind, depth: i32, rng: R) -> Self {
        Self {
            searcher: Searcher::new(rng),
            kind,
            depth: depth.max(1),
        }
    }

    /// Get the best move for `color`, `None` when the board is full.
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Result<Option<Pos>, GameError> {
        self.get_move_with_stats(board, color).map(|result| result.best_move)
    }

    /// Get the best move with search statistics.
    ///
    /// The search always maximizes for `color`. The caller's board is not
    /// touched; the search backtracks on its own copy.
    ///
    /// Fails with [`GameError::EmptySide`] for `Stone::Empty` and with
    /// [`GameError::GameOver`] when either side already has five.
    pub fn get_move_with_stats(
        &mut self,
        board: &Board,
        color: Stone,
    ) -> Result<MoveResult, GameError> {
        if !color.is_player() {
            return Err(GameError::EmptySide);
        }
        if let Some(side) = check_winner(board) {
            return Err(GameError::GameOver(side));
        }

        let start = Instant::now();
        self.searcher.reset_stats();

        let mut work_board = board.clone();
        let result = self.run_search(&mut work_board, color);
        debug_assert_eq!(&work_board, board);

        Ok(MoveResult {
            best_move: result.best_move,
            score: result.score,
            engine: self.kind,
            depth: self.depth,
            time_ms: start.elapsed().as_millis() as u64,
            stats: self.searcher.stats(),
        })
    }

    fn run_search(&mut self, board: &mut Board, color: Stone) -> SearchResult {
        match self.kind {
            EngineKind::Minimax => self.searcher.minimax(board, self.depth, true, color, color),
            EngineKind::AlphaBeta => {
                self.searcher
                    .alpha_beta(board, self.depth, -INF, INF, true, color, color)
            }
        }
    }
}

/// Fresh 15x15 board, every cell empty.
#[must_use]
pub fn initialize_board() -> Board {
    Board::new()
}

/// Candidate moves for the position; empty means the game is a draw.
#[must_use]
pub fn legal_moves(board: &Board) -> Vec<Pos> {
    candidate_moves(board)
}

/// Whether `side` has five in a row.
#[must_use]
pub fn is_win(board: &Board, side: Stone) -> bool {
    has_winner(board, side)
}

/// Choose a move for `side_to_move` with an OS-seeded engine.
///
/// `depth` is raised to at least 1, so a depth of 0 or below still searches
/// one ply and returns a move. Returns `Ok(None)` only when there are no
/// legal moves.
pub fn choose_move(
    board: &Board,
    side_to_move: Stone,
    engine_kind: EngineKind,
    depth: i32,
) -> Result<Option<Pos>, GameError> {
    AIEngine::new(engine_kind, depth).get_move(board, side_to_move)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Full board with no five anywhere: pairs of columns alternate by row.
    fn drawn_board() -> Board {
        let mut board = Board::new();
        for row in 0..15u8 {
            for col in 0..15u8 {
                let stone = if (col / 2 + row) % 2 == 0 {
                    Stone::Black
                } else {
                    Stone::White
                };
                board.place(Pos::new(row, col), stone).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_initialize_board() {
        let board = initialize_board();
        assert!(board.is_board_empty());
        assert_eq!(legal_moves(&board), vec![Pos::new(7, 7)]);
    }

    #[test]
    fn test_full_board_is_draw() {
        let board = drawn_board();
        assert!(board.is_full());
        assert!(!is_win(&board, Stone::Black));
        assert!(!is_win(&board, Stone::White));
        assert!(legal_moves(&board).is_empty());

        for kind in EngineKind::ALL {
            assert_eq!(choose_move(&board, Stone::Black, kind, 2), Ok(None));
            assert_eq!(choose_move(&board, Stone::White, kind, 1), Ok(None));
        }
    }

    #[test]
    fn test_empty_board_center_for_both_engines() {
        let board = initialize_board();
        for kind in EngineKind::ALL {
            assert_eq!(
                choose_move(&board, Stone::Black, kind, 2),
                Ok(Some(Pos::new(7, 7)))
            );
        }
    }

    #[test]
    fn test_empty_side_rejected() {
        let board = initialize_board();
        assert_eq!(
            choose_move(&board, Stone::Empty, EngineKind::Minimax, 2),
            Err(GameError::EmptySide)
        );
    }

    #[test]
    fn test_finished_game_rejected() {
        let mut board = initialize_board();
        for col in 0..5 {
            board.place(Pos::new(3, col), Stone::White).unwrap();
        }
        assert!(is_win(&board, Stone::White));
        assert_eq!(
            choose_move(&board, Stone::Black, EngineKind::AlphaBeta, 2),
            Err(GameError::GameOver(Stone::White))
        );
    }

    #[test]
    fn test_zero_depth_still_moves() {
        let mut board = initialize_board();
        board.place(Pos::new(7, 7), Stone::Black).unwrap();
        for kind in EngineKind::ALL {
            for depth in [0, -3] {
                let mv = choose_move(&board, Stone::White, kind, depth).unwrap();
                assert!(mv.map_or(false, |m| legal_moves(&board).contains(&m)));
            }
            let result = AIEngine::with_seed(kind, 0, 5)
                .get_move_with_stats(&board, Stone::White)
                .unwrap();
            assert_eq!(result.depth, 1);
        }
    }

    #[test]
    fn test_caller_board_untouched() {
        let mut board = initialize_board();
        board.place(Pos::new(7, 7), Stone::Black).unwrap();
        board.place(Pos::new(7, 8), Stone::White).unwrap();
        let before = board.clone();
        let mut engine = AIEngine::with_seed(EngineKind::Minimax, 2, 3);
        engine.get_move(&board, Stone::Black).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_seeded_engines_repeat() {
        let mut board = initialize_board();
        board.place(Pos::new(7, 7), Stone::Black).unwrap();
        board.place(Pos::new(8, 8), Stone::White).unwrap();

        for kind in EngineKind::ALL {
            let mut a = AIEngine::with_seed(kind, 2, 99);
            let mut b = AIEngine::with_seed(kind, 2, 99);
            for _ in 0..3 {
                let ra = a.get_move_with_stats(&board, Stone::Black).unwrap();
                let rb = b.get_move_with_stats(&board, Stone::Black).unwrap();
                assert_eq!(ra.best_move, rb.best_move);
                assert_eq!(ra.score, rb.score);
                assert_eq!(ra.stats, rb.stats);
            }
        }
    }

    #[test]
    fn test_alpha_beta_visits_fewer_nodes() {
        let mut board = initialize_board();
        for (pos, stone) in [
            (Pos::new(7, 7), Stone::Black),
            (Pos::new(7, 8), Stone::White),
            (Pos::new(8, 7), Stone::Black),
            (Pos::new(6, 6), Stone::White),
        ] {
            board.place(pos, stone).unwrap();
        }

        let full = AIEngine::with_seed(EngineKind::Minimax, 2, 1)
            .get_move_with_stats(&board, Stone::Black)
            .unwrap();
        let pruned = AIEngine::with_seed(EngineKind::AlphaBeta, 2, 1)
            .get_move_with_stats(&board, Stone::Black)
            .unwrap();
        assert!(pruned.nodes() < full.nodes());
        assert_eq!(full.engine, EngineKind::Minimax);
        assert_eq!(pruned.depth, 2);
    }

    #[test]
    fn test_engine_display() {
        assert_eq!(EngineKind::Minimax.to_string(), "Minimax");
        assert_eq!(EngineKind::AlphaBeta.to_string(), "Alpha-Beta");
    }
}

//! Match/session state for the Gomoku GUI
//!
//! Everything the turn loop needs (who plays each color, whose turn it is,
//! pending engine work) lives here and is owned by the app.

use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::rules::{find_five, is_candidate};
use crate::{
    initialize_board, is_win, legal_moves, AIEngine, Board, EngineKind, GameError, MoveResult,
    Pos, Stone,
};

/// Default search depth for engine players
pub const AI_DEPTH: i32 = 2;

/// Who controls a color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    Human,
    Engine(EngineKind),
}

/// Players and search depth for one match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchConfig {
    pub black: Player,
    pub white: Player,
    pub depth: i32,
}

impl MatchConfig {
    /// Human (Black) against the alpha-beta engine (White)
    pub fn vs_ai() -> Self {
        Self {
            black: Player::Human,
            white: Player::Engine(EngineKind::AlphaBeta),
            depth: AI_DEPTH,
        }
    }

    /// Minimax (Black) against alpha-beta (White)
    pub fn ai_vs_ai() -> Self {
        Self {
            black: Player::Engine(EngineKind::Minimax),
            white: Player::Engine(EngineKind::AlphaBeta),
            depth: AI_DEPTH,
        }
    }

    pub fn player(&self, stone: Stone) -> Option<Player> {
        match stone {
            Stone::Black => Some(self.black),
            Stone::White => Some(self.white),
            Stone::Empty => None,
        }
    }

    pub fn humans(&self) -> usize {
        [self.black, self.white]
            .iter()
            .filter(|&&p| p == Player::Human)
            .count()
    }

    /// Short label such as "Black (Minimax)" or "White (Human)"
    pub fn label(&self, stone: Stone) -> String {
        match self.player(stone) {
            Some(Player::Human) => format!("{} (Human)", stone.name()),
            Some(Player::Engine(kind)) => format!("{} ({})", stone.name(), kind),
            None => stone.name().to_string(),
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::vs_ai()
    }
}

/// Why a human move was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("the game is over")]
    GameFinished,
    #[error("the engine is thinking")]
    AiThinking,
    #[error("it is not your turn")]
    NotYourTurn,
    #[error(transparent)]
    Illegal(#[from] GameError),
}

/// How the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win {
        winner: Stone,
        line: Option<[Pos; 5]>,
    },
    Draw,
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<Result<MoveResult, GameError>>,
        start_time: Instant,
    },
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Main game state
pub struct GameState {
    pub board: Board,
    pub config: MatchConfig,
    pub current_turn: Stone,
    pub outcome: Option<Outcome>,
    pub last_move: Option<Pos>,
    pub move_history: Vec<(Pos, Stone)>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(config: MatchConfig) -> Self {
        Self {
            board: initialize_board(),
            config,
            current_turn: Stone::Black,
            outcome: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            message: None,
        }
    }

    /// Start over with the same players
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn is_human_turn(&self) -> bool {
        self.config.player(self.current_turn) == Some(Player::Human)
    }

    /// Engine to run for the side to move, if that side is an engine
    pub fn engine_to_move(&self) -> Option<EngineKind> {
        match self.config.player(self.current_turn) {
            Some(Player::Engine(kind)) => Some(kind),
            _ => None,
        }
    }

    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Whether a click at `pos` would be accepted right now
    pub fn can_play(&self, pos: Pos) -> bool {
        !self.is_game_over()
            && !self.is_ai_thinking()
            && self.is_human_turn()
            && is_candidate(&self.board, pos)
    }

    /// Attempt a human move at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), TurnError> {
        if self.is_game_over() {
            return Err(TurnError::GameFinished);
        }
        if self.is_ai_thinking() {
            return Err(TurnError::AiThinking);
        }
        if !self.is_human_turn() {
            return Err(TurnError::NotYourTurn);
        }
        if !is_candidate(&self.board, pos) {
            return Err(GameError::NotCandidate(pos).into());
        }

        self.execute_move(pos)?;
        Ok(())
    }

    /// Execute a move (for both human and AI)
    fn execute_move(&mut self, pos: Pos) -> Result<(), GameError> {
        let color = self.current_turn;
        self.board.place(pos, color)?;

        self.move_history.push((pos, color));
        self.last_move = Some(pos);
        self.message = None;
        self.move_timer.stop();

        if let Some(outcome) = self.check_outcome(color) {
            self.outcome = Some(outcome);
            return Ok(());
        }

        self.current_turn = color.opponent();
        self.move_timer.start();
        Ok(())
    }

    /// Win for the side that just moved, or a draw on a full board
    fn check_outcome(&self, mover: Stone) -> Option<Outcome> {
        if is_win(&self.board, mover) {
            return Some(Outcome::Win {
                winner: mover,
                line: find_five(&self.board, mover),
            });
        }
        if legal_moves(&self.board).is_empty() {
            return Some(Outcome::Draw);
        }
        None
    }

    /// Start an engine search on a worker thread with its own board copy
    pub fn start_ai_thinking(&mut self) {
        if self.is_ai_thinking() || self.is_game_over() {
            return;
        }
        let Some(kind) = self.engine_to_move() else {
            return;
        };

        let board = self.board.clone();
        let color = self.current_turn;
        let depth = self.config.depth;

        let (tx, rx) = channel();
        thread::spawn(move || {
            let mut engine = AIEngine::new(kind, depth);
            let _ = tx.send(engine.get_move_with_stats(&board, color));
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Apply the engine's move once it has reported back
    pub fn check_ai_result(&mut self) {
        let AiState::Thinking {
            receiver,
            start_time,
        } = &self.ai_state
        else {
            return;
        };
        let (result, elapsed) = match receiver.try_recv() {
            Ok(result) => (result, start_time.elapsed()),
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Disconnected) => {
                self.ai_state = AiState::Idle;
                self.message = Some("AI worker stopped unexpectedly".to_string());
                return;
            }
        };

        self.ai_state = AiState::Idle;
        self.move_timer.ai_thinking_time = Some(elapsed);

        match result {
            Ok(move_result) => {
                let best_move = move_result.best_move;
                self.last_ai_result = Some(move_result);
                match best_move {
                    Some(pos) => {
                        if let Err(err) = self.execute_move(pos) {
                            self.message = Some(err.to_string());
                        }
                    }
                    // No candidates left: the board is full
                    None => self.outcome = Some(Outcome::Draw),
                }
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Undo the last move, or the last human+engine pair against one engine
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        let undo_count = if self.config.humans() == 1 && self.move_history.len() >= 2 {
            2
        } else {
            1
        };

        // Simple undo: reset and replay
        let keep = self.move_history.len() - undo_count;
        let moves: Vec<_> = self.move_history.drain(..keep).collect();

        self.board = initialize_board();
        self.move_history.clear();
        self.current_turn = Stone::Black;
        self.outcome = None;
        self.last_move = None;
        self.message = None;

        for (pos, color) in moves {
            // Replaying moves that were legal when first played
            if self.board.place(pos, color).is_ok() {
                self.move_history.push((pos, color));
                self.last_move = Some(pos);
                self.current_turn = color.opponent();
            }
        }

        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human_vs_human() -> MatchConfig {
        MatchConfig {
            black: Player::Human,
            white: Player::Human,
            depth: AI_DEPTH,
        }
    }

    #[test]
    fn test_presets() {
        let pve = MatchConfig::vs_ai();
        assert_eq!(pve.black, Player::Human);
        assert_eq!(pve.white, Player::Engine(EngineKind::AlphaBeta));
        assert_eq!(pve.humans(), 1);

        let eve = MatchConfig::ai_vs_ai();
        assert_eq!(eve.black, Player::Engine(EngineKind::Minimax));
        assert_eq!(eve.humans(), 0);
        assert_eq!(eve.label(Stone::White), "White (Alpha-Beta)");
    }

    #[test]
    fn test_first_move_must_be_center() {
        let mut state = GameState::new(human_vs_human());
        assert_eq!(
            state.try_place_stone(Pos::new(0, 0)),
            Err(TurnError::Illegal(GameError::NotCandidate(Pos::new(0, 0))))
        );
        assert!(state.can_play(Pos::new(7, 7)));
        assert!(state.try_place_stone(Pos::new(7, 7)).is_ok());
        assert_eq!(state.current_turn, Stone::White);
        assert!(state.can_play(Pos::new(6, 6)));
        assert!(!state.can_play(Pos::new(7, 7)));
        assert!(!state.can_play(Pos::new(0, 0)));
        assert_eq!(state.last_move, Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_not_your_turn_against_engine() {
        let mut state = GameState::new(MatchConfig::vs_ai());
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        assert_eq!(state.engine_to_move(), Some(EngineKind::AlphaBeta));
        assert!(!state.can_play(Pos::new(7, 8)));
        assert_eq!(
            state.try_place_stone(Pos::new(7, 8)),
            Err(TurnError::NotYourTurn)
        );
    }

    #[test]
    fn test_win_ends_game() {
        let mut state = GameState::new(human_vs_human());
        let black = [(7, 7), (7, 8), (7, 9), (7, 10), (7, 11)];
        let white = [(8, 7), (8, 8), (8, 9), (8, 10)];
        for i in 0..5 {
            state.try_place_stone(Pos::new(black[i].0, black[i].1)).unwrap();
            if i < 4 {
                state.try_place_stone(Pos::new(white[i].0, white[i].1)).unwrap();
            }
        }
        match state.outcome {
            Some(Outcome::Win { winner, line }) => {
                assert_eq!(winner, Stone::Black);
                assert_eq!(line.map(|l| l[0]), Some(Pos::new(7, 7)));
            }
            other => panic!("expected a win, got {:?}", other),
        }
        assert_eq!(
            state.try_place_stone(Pos::new(6, 7)),
            Err(TurnError::GameFinished)
        );
    }

    #[test]
    fn test_undo_single_and_pair() {
        let mut state = GameState::new(human_vs_human());
        state.try_place_stone(Pos::new(7, 7)).unwrap();
        state.try_place_stone(Pos::new(7, 8)).unwrap();
        state.undo();
        assert_eq!(state.move_history.len(), 1);
        assert_eq!(state.current_turn, Stone::White);
        assert_eq!(state.board.get(Pos::new(7, 8)), Stone::Empty);

        let mut pve = GameState::new(MatchConfig::vs_ai());
        pve.try_place_stone(Pos::new(7, 7)).unwrap();
        pve.execute_move(Pos::new(6, 6)).unwrap();
        pve.undo();
        assert!(pve.move_history.is_empty());
        assert!(pve.board.is_board_empty());
        assert_eq!(pve.current_turn, Stone::Black);
    }

    #[test]
    fn test_engine_turn_completes() {
        let mut state = GameState::new(MatchConfig::ai_vs_ai());
        state.start_ai_thinking();
        assert!(state.is_ai_thinking());

        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_ai_thinking() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
            state.check_ai_result();
        }
        assert_eq!(state.last_move, Some(Pos::new(7, 7)));
        assert_eq!(state.current_turn, Stone::White);
        assert_eq!(
            state.last_ai_result.as_ref().map(|r| r.engine),
            Some(EngineKind::Minimax)
        );
    }
}

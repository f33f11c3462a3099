use std::time::Duration;

use thiserror::Error;

use crate::alpha_beta_searcher::{AlphaBetaSearcher, DEFAULT_SEARCH_DEPTH};
use crate::ataxx_move::AtaxxMove;
use crate::board::error::BoardError;
use crate::board::square::Square;
use crate::board::Board;
use crate::evaluate::{self, GameEnding};
use crate::input_handler::MoveInput;

/// Game setup shared by all play modes.
#[derive(Clone)]
pub struct EngineConfig {
    pub search_depth: u8,
    /// Squares to block (with their mirror images) before play begins.
    pub blocks: Vec<Square>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            blocks: Vec::new(),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("invalid move")]
    InvalidMove,
    #[error("{error}")]
    BoardError { error: BoardError },
}

/// Owns the live board and the searcher, and mediates between raw player
/// input and board operations.
pub struct Engine {
    board: Board,
    searcher: AlphaBetaSearcher,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default()).expect("default config has no blocks")
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, EngineError> {
        let mut board = Board::new();
        for block in &config.blocks {
            board
                .set_block(block.col(), block.row())
                .map_err(|error| EngineError::BoardError { error })?;
        }
        Ok(Self {
            board,
            searcher: AlphaBetaSearcher::new(config.search_depth),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        evaluate::game_ending(&self.board)
    }

    pub fn last_move(&self) -> Option<AtaxxMove> {
        self.board.all_moves().last().copied()
    }

    pub fn make_move(&mut self, mv: AtaxxMove) -> Result<(), EngineError> {
        self.board
            .make_move(mv)
            .map_err(|error| EngineError::BoardError { error })
    }

    pub fn make_move_from_input(&mut self, input: MoveInput) -> Result<AtaxxMove, EngineError> {
        match input {
            MoveInput::Coordinate { from, to } => {
                let from = from.parse::<Square>().map_err(|_| EngineError::InvalidMove)?;
                let to = to.parse::<Square>().map_err(|_| EngineError::InvalidMove)?;
                let mv = AtaxxMove::new(from, to).map_err(|_| EngineError::InvalidMove)?;
                self.make_move(mv)?;
                Ok(mv)
            }
            MoveInput::Pass => {
                self.make_move(AtaxxMove::Pass)?;
                Ok(AtaxxMove::Pass)
            }
            // the game loop services undo before input reaches the engine
            MoveInput::Undo => Err(EngineError::InvalidMove),
            MoveInput::UseEngine => self.make_best_move(),
        }
    }

    /// Run the search for the player on turn without applying the result.
    pub fn find_best_move(&mut self) -> AtaxxMove {
        self.searcher.choose_move(&self.board)
    }

    pub fn make_best_move(&mut self) -> Result<AtaxxMove, EngineError> {
        let mv = self.find_best_move();
        self.make_move(mv)?;
        Ok(mv)
    }

    pub fn undo(&mut self) -> Result<(), EngineError> {
        self.board
            .undo()
            .map_err(|error| EngineError::BoardError { error })
    }

    /// Take back a full turn: the last move and, if present, the reply
    /// before it. Used when a human asks to undo against the computer.
    pub fn take_back(&mut self) -> Result<(), EngineError> {
        self.undo()?;
        if !self.board.all_moves().is_empty() {
            self.undo()?;
        }
        Ok(())
    }

    pub fn search_stats(&self) -> SearchStats {
        SearchStats {
            positions_searched: self.searcher.searched_position_count(),
            depth: self.searcher.search_depth(),
            last_score: self.searcher.last_score(),
            last_search_duration: self.searcher.last_search_duration(),
        }
    }
}

/// Search performance statistics for display.
#[derive(Debug, Clone)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub depth: u8,
    pub last_score: Option<i32>,
    pub last_search_duration: Option<Duration>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alpha_beta_searcher::potential_moves;
    use crate::board::color::PieceColor;

    fn coordinate(from: &str, to: &str) -> MoveInput {
        MoveInput::Coordinate {
            from: from.to_string(),
            to: to.to_string(),
        }
    }

    #[test]
    fn test_make_move_from_input() {
        let mut engine = Engine::new();
        let mv = engine.make_move_from_input(coordinate("a7", "b6")).unwrap();
        assert_eq!(mv, "a7-b6".parse().unwrap());
        assert_eq!(engine.board().turn(), PieceColor::Blue);
        assert_eq!(engine.last_move(), Some(mv));
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut engine = Engine::new();
        assert_eq!(
            engine.make_move_from_input(coordinate("a7", "e3")),
            Err(EngineError::InvalidMove)
        );
        assert!(matches!(
            engine.make_move_from_input(coordinate("a1", "b2")),
            Err(EngineError::BoardError { .. })
        ));
        assert!(matches!(
            engine.make_move_from_input(MoveInput::Pass),
            Err(EngineError::BoardError { .. })
        ));
    }

    #[test]
    fn test_engine_move_is_legal() {
        let mut engine = Engine::with_config(EngineConfig {
            search_depth: 2,
            blocks: Vec::new(),
        })
        .unwrap();
        let candidates = potential_moves(engine.board());
        let mv = engine.make_best_move().unwrap();
        assert!(candidates.contains(&mv));
        assert_eq!(engine.board().move_count(), 1);
    }

    #[test]
    fn test_take_back() {
        let mut engine = Engine::with_config(EngineConfig {
            search_depth: 1,
            blocks: Vec::new(),
        })
        .unwrap();
        engine.make_move_from_input(coordinate("a7", "b6")).unwrap();
        engine.make_best_move().unwrap();
        assert_eq!(engine.board().move_count(), 2);
        engine.take_back().unwrap();
        assert_eq!(engine.board().move_count(), 0);
        assert_eq!(engine.board(), &Board::new());
    }

    #[test]
    fn test_config_blocks_applied() {
        let engine = Engine::with_config(EngineConfig {
            search_depth: 2,
            blocks: vec!["c3".parse().unwrap()],
        })
        .unwrap();
        assert_eq!(
            engine.board().get("c3".parse().unwrap()),
            PieceColor::Blocked
        );
        assert_eq!(
            engine.board().get("e5".parse().unwrap()),
            PieceColor::Blocked
        );

        let corner = Engine::with_config(EngineConfig {
            search_depth: 2,
            blocks: vec!["a1".parse().unwrap()],
        });
        assert!(corner.is_err());
    }

    #[test]
    fn test_short_engine_game_stays_consistent() {
        let mut engine = Engine::with_config(EngineConfig {
            search_depth: 1,
            blocks: Vec::new(),
        })
        .unwrap();
        for _ in 0..10 {
            if engine.check_game_over().is_some() {
                break;
            }
            engine.make_best_move().unwrap();
            let board = engine.board();
            let side = crate::board::square::SIDE as u32;
            assert!(board.red_pieces() + board.blue_pieces() <= side * side);
        }
    }
}

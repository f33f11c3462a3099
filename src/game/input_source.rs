use crate::board::color::PieceColor;
use crate::input_handler::{self, InputError, MoveInput};

pub trait InputSource {
    fn get_move(&self, current_turn: PieceColor) -> Result<Option<MoveInput>, InputError>;
}

/// Both sides read from stdin.
pub struct HumanInput;

impl InputSource for HumanInput {
    fn get_move(&self, _current_turn: PieceColor) -> Result<Option<MoveInput>, InputError> {
        match input_handler::parse_move_input() {
            Ok(move_input) => Ok(Some(move_input)),
            Err(InputError::UserExit) => Err(InputError::UserExit),
            Err(_) => Ok(None), // other errors treated as invalid input
        }
    }
}

/// Both sides are played by the searcher.
pub struct EngineInput;

impl InputSource for EngineInput {
    fn get_move(&self, _current_turn: PieceColor) -> Result<Option<MoveInput>, InputError> {
        Ok(Some(MoveInput::UseEngine))
    }
}

/// One human color, the engine playing the other.
pub struct ConditionalInput {
    pub human_color: PieceColor,
}

impl InputSource for ConditionalInput {
    fn get_move(&self, current_turn: PieceColor) -> Result<Option<MoveInput>, InputError> {
        if current_turn == self.human_color {
            match input_handler::parse_move_input() {
                Ok(move_input) => Ok(Some(move_input)),
                Err(InputError::UserExit) => Err(InputError::UserExit),
                Err(_) => Ok(None),
            }
        } else {
            Ok(Some(MoveInput::UseEngine))
        }
    }
}

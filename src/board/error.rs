use thiserror::Error;

use crate::ataxx_move::{AtaxxMove, MoveError};

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("that move is illegal: {mv}")]
    IllegalMove { mv: AtaxxMove },
    #[error("cannot pass while a legal move exists")]
    IllegalPass,
    #[error("illegal block placement")]
    IllegalBlock,
    #[error("blocks may only be placed before the first move")]
    BlockAfterFirstMove,
    #[error("no moves to undo")]
    EmptyHistory,
    #[error("malformed move: {0}")]
    MalformedMove(#[from] MoveError),
}

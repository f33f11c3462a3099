use core::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::board::square::Square;

#[derive(Error, Debug, PartialEq)]
pub enum MoveError {
    #[error("a move must change squares")]
    SameSquare,
    #[error("{from} and {to} are more than two squares apart")]
    TooFar { from: Square, to: Square },
    #[error("invalid move notation: {input:?}")]
    InvalidNotation { input: String },
}

/// A single Ataxx move. The Chebyshev distance between the two squares
/// classifies every non-pass move exhaustively: distance 1 is an extend
/// (a new piece grows onto the target), distance 2 is a jump (the piece
/// relocates, vacating its source).
///
/// `Win` and `Loss` are markers returned by the search's leaf evaluator
/// for decided positions; they are never applied to a board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum AtaxxMove {
    Pass,
    Extend { from: Square, to: Square },
    Jump { from: Square, to: Square },
    Win,
    Loss,
}

impl AtaxxMove {
    /// Classify the move between two squares by distance.
    pub fn new(from: Square, to: Square) -> Result<Self, MoveError> {
        match from.chebyshev_distance(to) {
            0 => Err(MoveError::SameSquare),
            1 => Ok(AtaxxMove::Extend { from, to }),
            2 => Ok(AtaxxMove::Jump { from, to }),
            _ => Err(MoveError::TooFar { from, to }),
        }
    }

    /// Build a move from raw column/row characters. A '-' in the first
    /// column position denotes a pass.
    pub fn from_coords(c0: char, r0: char, c1: char, r1: char) -> Result<Self, MoveError> {
        if c0 == '-' {
            return Ok(AtaxxMove::Pass);
        }
        let from = Square::new(c0, r0).ok_or_else(|| MoveError::InvalidNotation {
            input: format!("{}{}", c0, r0),
        })?;
        let to = Square::new(c1, r1).ok_or_else(|| MoveError::InvalidNotation {
            input: format!("{}{}", c1, r1),
        })?;
        Self::new(from, to)
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, AtaxxMove::Pass)
    }

    pub fn is_extend(&self) -> bool {
        matches!(self, AtaxxMove::Extend { .. })
    }

    pub fn is_jump(&self) -> bool {
        matches!(self, AtaxxMove::Jump { .. })
    }

    /// Source square, if the move has one.
    pub fn from_square(&self) -> Option<Square> {
        match self {
            AtaxxMove::Extend { from, .. } | AtaxxMove::Jump { from, .. } => Some(*from),
            _ => None,
        }
    }

    /// Destination square, if the move has one.
    pub fn to_square(&self) -> Option<Square> {
        match self {
            AtaxxMove::Extend { to, .. } | AtaxxMove::Jump { to, .. } => Some(*to),
            _ => None,
        }
    }
}

impl fmt::Display for AtaxxMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtaxxMove::Pass => write!(f, "-"),
            AtaxxMove::Extend { from, to } | AtaxxMove::Jump { from, to } => {
                write!(f, "{}-{}", from, to)
            }
            AtaxxMove::Win => write!(f, "(win)"),
            AtaxxMove::Loss => write!(f, "(loss)"),
        }
    }
}

impl FromStr for AtaxxMove {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" || s == "pass" {
            return Ok(AtaxxMove::Pass);
        }
        let invalid = || MoveError::InvalidNotation {
            input: s.to_string(),
        };
        let mut parts = s.split('-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(from), Some(to), None) => {
                let from = from.parse::<Square>().map_err(|_| invalid())?;
                let to = to.parse::<Square>().map_err(|_| invalid())?;
                Self::new(from, to)
            }
            _ => Err(invalid()),
        }
    }
}

//! Move input parsing and validation.

use std::io;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static MOVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-g][1-7])-([a-g][1-7])$").expect("MOVE_RE regex should be valid"));

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user requested exit")]
    UserExit,
}

/// One line of player input, before board-level validation.
#[derive(Debug, PartialEq)]
pub enum MoveInput {
    Coordinate { from: String, to: String },
    Pass,
    Undo,
    UseEngine,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        match trimmed {
            "-" | "pass" => return Ok(MoveInput::Pass),
            "undo" => return Ok(MoveInput::Undo),
            "q" | "quit" => return Err(InputError::UserExit),
            _ => {}
        }
        if let Some(caps) = MOVE_RE.captures(trimmed) {
            let from = caps.get(1).unwrap().as_str();
            let to = caps.get(2).unwrap().as_str();
            return Ok(MoveInput::Coordinate {
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Err(InputError::InvalidInput {
            input: trimmed.to_string(),
        })
    }
}

/// Read one move from stdin.
pub fn parse_move_input() -> Result<MoveInput, InputError> {
    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(_n) => input.parse(),
        Err(error) => Err(InputError::IOError {
            error: error.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(
            "a7-b6".parse::<MoveInput>().unwrap(),
            MoveInput::Coordinate {
                from: "a7".to_string(),
                to: "b6".to_string(),
            }
        );
        // surrounding whitespace is fine
        assert_eq!(
            "  g1-e3\n".parse::<MoveInput>().unwrap(),
            MoveInput::Coordinate {
                from: "g1".to_string(),
                to: "e3".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_pass_and_undo() {
        assert_eq!("-".parse::<MoveInput>().unwrap(), MoveInput::Pass);
        assert_eq!("pass".parse::<MoveInput>().unwrap(), MoveInput::Pass);
        assert_eq!("undo".parse::<MoveInput>().unwrap(), MoveInput::Undo);
    }

    #[test]
    fn test_parse_quit() {
        assert_eq!("q".parse::<MoveInput>(), Err(InputError::UserExit));
        assert_eq!("quit".parse::<MoveInput>(), Err(InputError::UserExit));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for bad in &["", "a7b6", "h1-h2", "a7-a9", "a7 b6", "move a7-b6"] {
            assert!(matches!(
                bad.parse::<MoveInput>(),
                Err(InputError::InvalidInput { .. })
            ));
        }
    }
}

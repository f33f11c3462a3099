use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// The contents of a single board cell. `Red` and `Blue` are the two
/// players; `Empty` and `Blocked` are occupancy markers only.
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord, Hash)]
pub enum PieceColor {
    Empty,
    Blocked,
    Red,
    Blue,
}

impl PieceColor {
    const PLAYERS: [PieceColor; 2] = [PieceColor::Red, PieceColor::Blue];

    /// The opposing player. `Empty` and `Blocked` have no opponent and map
    /// to themselves.
    pub fn opposite(&self) -> Self {
        match self {
            PieceColor::Red => PieceColor::Blue,
            PieceColor::Blue => PieceColor::Red,
            other => *other,
        }
    }

    pub fn is_piece(&self) -> bool {
        matches!(self, PieceColor::Red | PieceColor::Blue)
    }

    /// Red maximizes the material score, blue minimizes it.
    pub fn maximize_score(&self) -> bool {
        *self == PieceColor::Red
    }

    pub fn random_player() -> Self {
        *Self::PLAYERS.choose(&mut rand::thread_rng()).unwrap()
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            PieceColor::Empty => "empty",
            PieceColor::Blocked => "blocked",
            PieceColor::Red => "red",
            PieceColor::Blue => "blue",
        };
        write!(f, "{}", color_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for PieceColor {
    type Err = ParseError;
    fn from_str(color: &str) -> Result<Self, Self::Err> {
        match color {
            "red" => Ok(PieceColor::Red),
            "blue" => Ok(PieceColor::Blue),
            "random" => Ok(PieceColor::random_player()),
            _ => Err("invalid color; options are: red, blue, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(PieceColor::Red.opposite(), PieceColor::Blue);
        assert_eq!(PieceColor::Blue.opposite(), PieceColor::Red);
        assert_eq!(PieceColor::Empty.opposite(), PieceColor::Empty);
        assert_eq!(PieceColor::Blocked.opposite(), PieceColor::Blocked);
    }

    #[test]
    fn test_parse_red() {
        assert_eq!(PieceColor::Red, PieceColor::from_str("red").unwrap());
    }

    #[test]
    fn test_parse_blue() {
        assert_eq!(PieceColor::Blue, PieceColor::from_str("blue").unwrap());
    }

    #[test]
    fn test_parse_random() {
        let rand_color = PieceColor::from_str("random").unwrap();
        assert!(PieceColor::PLAYERS.contains(&rand_color));
    }

    #[test]
    fn test_random_player() {
        assert!(PieceColor::PLAYERS.contains(&PieceColor::random_player()));
    }
}

use std::fmt;
use std::fmt::Write;

use super::color::PieceColor;
use super::square::Square;
use super::Board;

impl Board {
    /// A text depiction of the playable area, top row first. With
    /// `legend`, row and column labels are added around the edges.
    pub fn to_ascii(&self, legend: bool) -> String {
        let mut out = String::new();
        for row in ('1'..='7').rev() {
            if legend {
                write!(out, " {}", row).unwrap();
            }
            for col in 'a'..='g' {
                let cell = match self.get(Square::new(col, row).unwrap()) {
                    PieceColor::Empty => '-',
                    PieceColor::Blocked => 'X',
                    PieceColor::Red => 'r',
                    PieceColor::Blue => 'b',
                };
                out.push(' ');
                out.push(cell);
            }
            out.push('\n');
        }
        if legend {
            out.push_str("    a b c d e f g");
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_ascii(false))
    }
}

use std::fmt::Write;

use termion::{clear, color, cursor};

use crate::ataxx_move::AtaxxMove;
use crate::board::color::PieceColor;
use crate::board::square::Square;
use crate::board::Board;

/// Renders one frame of the console UI into an internal buffer, then
/// prints it in a single write to avoid flicker.
pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(1024),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All).unwrap();
    }

    pub fn render_game_state(
        &mut self,
        board: &Board,
        current_turn: PieceColor,
        last_move: Option<&AtaxxMove>,
        stats: Option<&str>,
    ) {
        self.clear();

        self.buffer.push_str("   a b c d e f g\n");
        for row in ('1'..='7').rev() {
            write!(self.buffer, " {}", row).unwrap();
            for col in 'a'..='g' {
                match board.get(Square::new(col, row).unwrap()) {
                    PieceColor::Red => {
                        write!(
                            self.buffer,
                            " {}r{}",
                            color::Fg(color::Red),
                            color::Fg(color::Reset)
                        )
                        .unwrap();
                    }
                    PieceColor::Blue => {
                        write!(
                            self.buffer,
                            " {}b{}",
                            color::Fg(color::Blue),
                            color::Fg(color::Reset)
                        )
                        .unwrap();
                    }
                    PieceColor::Empty => self.buffer.push_str(" -"),
                    PieceColor::Blocked => self.buffer.push_str(" X"),
                }
            }
            writeln!(self.buffer, " {}", row).unwrap();
        }
        self.buffer.push_str("   a b c d e f g\n\n");

        writeln!(
            self.buffer,
            "Pieces: red {}, blue {}",
            board.red_pieces(),
            board.blue_pieces()
        )
        .unwrap();
        writeln!(self.buffer, "Turn: {}", current_turn).unwrap();

        if let Some(mv) = last_move {
            writeln!(self.buffer, "Last move: {}", mv).unwrap();
        }

        if let Some(stats) = stats {
            writeln!(self.buffer, "\n{}", stats).unwrap();
        }

        print!("{}", self.buffer);
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

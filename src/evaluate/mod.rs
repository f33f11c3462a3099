use std::fmt;

use crate::ataxx_move::AtaxxMove;
use crate::board::Board;

/// A magnitude greater than any genuine material score. Positive marks a
/// position already won for red, negative for blue.
pub const INFINITY: i32 = i32::MAX;

/// How a finished game came out, judged by final piece counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnding {
    RedWins,
    BlueWins,
    Draw,
}

impl fmt::Display for GameEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            GameEnding::RedWins => "Red wins.",
            GameEnding::BlueWins => "Blue wins.",
            GameEnding::Draw => "Draw.",
        };
        write!(f, "{}", msg)
    }
}

/// Returns the game's outcome if it is over, otherwise `None`.
pub fn game_ending(board: &Board) -> Option<GameEnding> {
    if !board.game_over() {
        return None;
    }
    Some(if board.red_pieces() > board.blue_pieces() {
        GameEnding::RedWins
    } else if board.blue_pieces() > board.red_pieces() {
        GameEnding::BlueWins
    } else {
        GameEnding::Draw
    })
}

/// Zero-order material heuristic: positive favors red.
pub fn material_score(board: &Board) -> i32 {
    board.red_pieces() as i32 - board.blue_pieces() as i32
}

/// Heuristic value of `board` after `mv` was applied. The win and loss
/// markers produced by the search's leaf evaluator score as plus and minus
/// infinity; everything else scores as material.
pub fn static_score(board: &Board, mv: &AtaxxMove) -> i32 {
    match mv {
        AtaxxMove::Win => INFINITY,
        AtaxxMove::Loss => -INFINITY,
        _ => material_score(board),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::color::PieceColor;
    use crate::board::square::Square;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_material_score() {
        let mut board = Board::new();
        assert_eq!(material_score(&board), 0);
        board.make_move("a7-b6".parse().unwrap()).unwrap();
        assert_eq!(material_score(&board), 1);
    }

    #[test]
    fn test_static_score_markers() {
        let board = Board::new();
        assert_eq!(static_score(&board, &AtaxxMove::Win), INFINITY);
        assert_eq!(static_score(&board, &AtaxxMove::Loss), -INFINITY);
        assert_eq!(static_score(&board, &"a7-b6".parse().unwrap()), 0);
    }

    #[test]
    fn test_game_ending() {
        let mut board = Board::new();
        assert_eq!(game_ending(&board), None);

        board.set_unchecked(sq("a1"), PieceColor::Empty);
        board.set_unchecked(sq("g7"), PieceColor::Empty);
        assert_eq!(game_ending(&board), Some(GameEnding::RedWins));
    }

    #[test]
    fn test_draw_on_equal_counts() {
        let mut board = Board::new();
        // nobody can move, two pieces each
        for cr in &["a2", "b1", "b2", "a3", "b3", "c1", "c2", "c3"] {
            let square = sq(cr);
            board.set_block(square.col(), square.row()).unwrap();
        }
        assert_eq!(game_ending(&board), Some(GameEnding::Draw));
    }
}

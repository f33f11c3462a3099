use std::time::{Duration, Instant};

use log::debug;

use crate::ataxx_move::AtaxxMove;
use crate::board::square::Square;
use crate::board::Board;
use crate::evaluate::{self, INFINITY};

#[cfg(test)]
mod tests;

/// Default minimax search horizon in plies.
pub const DEFAULT_SEARCH_DEPTH: u8 = 4;

/// Depth-limited minimax with alpha-beta pruning over a material
/// evaluation. The searcher owns no game state: it works on a private
/// clone of the caller's board, applying and undoing its own candidate
/// moves, and returns a single chosen move.
pub struct AlphaBetaSearcher {
    search_depth: u8,
    searched_position_count: usize,
    termination_count: usize,
    last_score: Option<i32>,
    last_search_duration: Option<Duration>,
}

impl Default for AlphaBetaSearcher {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl AlphaBetaSearcher {
    pub fn new(depth: u8) -> Self {
        Self {
            search_depth: depth,
            searched_position_count: 0,
            termination_count: 0,
            last_score: None,
            last_search_duration: None,
        }
    }

    pub fn search_depth(&self) -> u8 {
        self.search_depth
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    pub fn termination_count(&self) -> usize {
        self.termination_count
    }

    pub fn last_score(&self) -> Option<i32> {
        self.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.last_search_duration
    }

    pub fn reset_stats(&mut self) {
        self.searched_position_count = 0;
        self.termination_count = 0;
    }

    /// Pick a move for the player on turn in `board`. Returns `Pass`
    /// without searching when that player has no legal move; otherwise the
    /// result is always one of `potential_moves(board)`. The caller's
    /// board is never mutated.
    pub fn choose_move(&mut self, board: &Board) -> AtaxxMove {
        self.reset_stats();
        let turn = board.turn();
        if !board.can_move(turn) {
            debug!("{} has no legal moves, passing", turn);
            return AtaxxMove::Pass;
        }

        let started = Instant::now();
        let mut scratch = board.clone();
        let (chosen, score) = if turn.maximize_score() {
            self.find_max(&mut scratch, self.search_depth, -INFINITY, INFINITY)
        } else {
            self.find_min(&mut scratch, self.search_depth, -INFINITY, INFINITY)
        };
        self.last_score = Some(score);
        self.last_search_duration = Some(started.elapsed());
        debug!(
            "{} plays {} (score {}, {} positions, {} cutoffs)",
            turn, chosen, score, self.searched_position_count, self.termination_count
        );
        chosen
    }

    /// Best move for the maximizer together with the score of the
    /// opponent's best response line. A candidate replaces the current
    /// best only on a strictly better score, so among equal candidates the
    /// first in generation order wins.
    fn find_max(
        &mut self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        beta: i32,
    ) -> (AtaxxMove, i32) {
        self.searched_position_count += 1;
        if depth == 0 || board.game_over() {
            return self.basic_max(board, alpha, beta);
        }
        let mut best: Option<(AtaxxMove, i32)> = None;
        for mv in potential_moves(board) {
            board.make_move(mv).expect("candidate moves are pre-validated");
            let (_, response_score) = self.find_min(board, depth - 1, alpha, beta);
            board.undo().expect("search unwinds its own moves");
            if best.map_or(true, |(_, score)| response_score > score) {
                best = Some((mv, response_score));
                alpha = alpha.max(response_score);
                if beta <= alpha {
                    self.termination_count += 1;
                    break;
                }
            }
        }
        best.unwrap_or((AtaxxMove::Loss, -INFINITY))
    }

    /// Mirror image of `find_max` for the minimizer.
    fn find_min(
        &mut self,
        board: &mut Board,
        depth: u8,
        alpha: i32,
        mut beta: i32,
    ) -> (AtaxxMove, i32) {
        self.searched_position_count += 1;
        if depth == 0 || board.game_over() {
            return self.basic_min(board, alpha, beta);
        }
        let mut best: Option<(AtaxxMove, i32)> = None;
        for mv in potential_moves(board) {
            board.make_move(mv).expect("candidate moves are pre-validated");
            let (_, response_score) = self.find_max(board, depth - 1, alpha, beta);
            board.undo().expect("search unwinds its own moves");
            if best.map_or(true, |(_, score)| response_score < score) {
                best = Some((mv, response_score));
                beta = beta.min(response_score);
                if beta <= alpha {
                    self.termination_count += 1;
                    break;
                }
            }
        }
        best.unwrap_or((AtaxxMove::Win, INFINITY))
    }

    /// Leaf evaluator for the maximizer. A finished game collapses to a
    /// win or loss marker by comparing final piece counts; otherwise one
    /// last greedy ply is scanned under the material heuristic.
    fn basic_max(&mut self, board: &mut Board, mut alpha: i32, beta: i32) -> (AtaxxMove, i32) {
        if board.game_over() {
            return if board.red_pieces() > board.blue_pieces() {
                (AtaxxMove::Win, INFINITY)
            } else {
                (AtaxxMove::Loss, -INFINITY)
            };
        }
        let mut best: Option<(AtaxxMove, i32)> = None;
        for mv in potential_moves(board) {
            board.make_move(mv).expect("candidate moves are pre-validated");
            let score = evaluate::static_score(board, &mv);
            board.undo().expect("search unwinds its own moves");
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.termination_count += 1;
                    break;
                }
            }
        }
        best.unwrap_or((AtaxxMove::Loss, -INFINITY))
    }

    /// Mirror image of `basic_max` for the minimizer.
    fn basic_min(&mut self, board: &mut Board, alpha: i32, mut beta: i32) -> (AtaxxMove, i32) {
        if board.game_over() {
            return if board.red_pieces() > board.blue_pieces() {
                (AtaxxMove::Win, INFINITY)
            } else {
                (AtaxxMove::Loss, -INFINITY)
            };
        }
        let mut best: Option<(AtaxxMove, i32)> = None;
        for mv in potential_moves(board) {
            board.make_move(mv).expect("candidate moves are pre-validated");
            let score = evaluate::static_score(board, &mv);
            board.undo().expect("search unwinds its own moves");
            if best.map_or(true, |(_, s)| score < s) {
                best = Some((mv, score));
                beta = beta.min(score);
                if beta <= alpha {
                    self.termination_count += 1;
                    break;
                }
            }
        }
        best.unwrap_or((AtaxxMove::Win, INFINITY))
    }
}

/// Every legal move for the player on turn, in a fixed enumeration order:
/// rows top to bottom, columns left to right, then column offset +2 to -2
/// and row offset +2 to -2 around each owned piece. Ties in the search are
/// broken by this order, so it must stay stable.
pub fn potential_moves(board: &Board) -> Vec<AtaxxMove> {
    let mut result = Vec::new();
    for row in ('1'..='7').rev() {
        for col in 'a'..='g' {
            let from = match Square::new(col, row) {
                Some(sq) => sq,
                None => continue,
            };
            if board.get(from) != board.turn() {
                continue;
            }
            for dc in (-2i8..=2).rev() {
                for dr in (-2i8..=2).rev() {
                    if dc == 0 && dr == 0 {
                        continue;
                    }
                    let to_col = (col as i8 + dc) as u8 as char;
                    let to_row = (row as i8 + dr) as u8 as char;
                    let to = match Square::new(to_col, to_row) {
                        Some(sq) => sq,
                        None => continue,
                    };
                    let mv = AtaxxMove::new(from, to).expect("offsets stay within jump range");
                    if board.legal_move(&mv) {
                        result.push(mv);
                    }
                }
            }
        }
    }
    result
}

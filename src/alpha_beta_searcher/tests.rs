use super::*;
use crate::board::color::PieceColor;
use crate::evaluate;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn mv(s: &str) -> AtaxxMove {
    s.parse().unwrap()
}

fn play(board: &mut Board, moves: &[&str]) {
    for m in moves {
        board.make_move(mv(m)).unwrap();
    }
}

/// A position where red's only piece sits on a7 with every square within
/// two steps blocked off. Blue can still move, so the game is not over.
fn red_trapped_board() -> Board {
    let mut board = Board::new();
    board.set_unchecked(sq("g1"), PieceColor::Empty);
    for cr in &["a5", "a6", "b5", "b6", "b7", "c5", "c6", "c7"] {
        board.set_unchecked(sq(cr), PieceColor::Blocked);
    }
    board
}

/// Two lone pieces: whoever moves first can flip the other and end the
/// game immediately.
fn duel_board(to_move: PieceColor) -> Board {
    let mut board = Board::new();
    for cr in &["a7", "g1", "a1", "g7"] {
        board.set_unchecked(sq(cr), PieceColor::Empty);
    }
    board.set_unchecked(sq("d4"), PieceColor::Red);
    board.set_unchecked(sq("e5"), PieceColor::Blue);
    board.set_turn(to_move);
    board
}

/// Plain minimax with no pruning, sharing the searcher's leaf semantics.
/// Used to check that pruning never changes the value of the search.
fn minimax(board: &mut Board, depth: u8, maximize: bool) -> i32 {
    if board.game_over() {
        return if board.red_pieces() > board.blue_pieces() {
            INFINITY
        } else {
            -INFINITY
        };
    }
    let mut best: Option<i32> = None;
    for m in potential_moves(board) {
        board.make_move(m).unwrap();
        let score = if depth == 0 {
            evaluate::material_score(board)
        } else {
            minimax(board, depth - 1, !maximize)
        };
        board.undo().unwrap();
        best = Some(match best {
            None => score,
            Some(b) if maximize => b.max(score),
            Some(b) => b.min(score),
        });
    }
    best.unwrap_or(if maximize { -INFINITY } else { INFINITY })
}

#[test]
fn test_potential_moves_from_start() {
    let board = Board::new();
    let moves = potential_moves(&board);
    // each red corner piece reaches the 8 empty squares around it
    assert_eq!(moves.len(), 16);
    assert_eq!(moves[0], mv("a7-c7"));
    assert_eq!(moves[moves.len() - 1], mv("g1-e1"));
    for m in &moves {
        assert!(board.legal_move(m));
    }
}

#[test]
fn test_potential_moves_empty_when_trapped() {
    let board = red_trapped_board();
    assert!(potential_moves(&board).is_empty());
}

#[test]
fn test_returns_pass_without_moves() {
    let mut searcher = AlphaBetaSearcher::new(3);
    let board = red_trapped_board();
    assert_eq!(searcher.choose_move(&board), AtaxxMove::Pass);
}

#[test]
fn test_chosen_move_is_a_candidate() {
    let mut searcher = AlphaBetaSearcher::new(2);
    let board = Board::new();
    let chosen = searcher.choose_move(&board);
    assert!(potential_moves(&board).contains(&chosen));
}

#[test]
fn test_caller_board_is_not_mutated() {
    let mut searcher = AlphaBetaSearcher::new(3);
    let mut board = Board::new();
    play(&mut board, &["a7-b6", "g7-f6"]);
    let before = board.clone();
    searcher.choose_move(&board);
    assert_eq!(board, before);
}

#[test]
fn test_search_is_deterministic() {
    let mut board = Board::new();
    play(&mut board, &["a7-b6", "g7-f6", "b6-c5"]);

    let mut first = AlphaBetaSearcher::new(3);
    let mut second = AlphaBetaSearcher::new(3);
    let chosen = first.choose_move(&board);
    assert_eq!(chosen, second.choose_move(&board));
    // repeated searches on the same searcher agree too
    assert_eq!(chosen, first.choose_move(&board));
}

#[test]
fn test_pruned_value_matches_plain_minimax() {
    let mut board = Board::new();
    for depth in 1..=3 {
        let mut searcher = AlphaBetaSearcher::new(depth);
        searcher.choose_move(&board);
        let expected = minimax(&mut board.clone(), depth, true);
        assert_eq!(searcher.last_score(), Some(expected), "depth {}", depth);
    }

    // a midgame position with blue to move
    play(&mut board, &["a7-b6", "g7-f6", "b6-c5"]);
    for depth in 1..=2 {
        let mut searcher = AlphaBetaSearcher::new(depth);
        searcher.choose_move(&board);
        let expected = minimax(&mut board.clone(), depth, false);
        assert_eq!(searcher.last_score(), Some(expected), "depth {}", depth);
    }
}

#[test]
fn test_maximizer_finds_immediate_win() {
    let mut searcher = AlphaBetaSearcher::default();
    let mut board = duel_board(PieceColor::Red);
    let chosen = searcher.choose_move(&board);
    assert_eq!(searcher.last_score(), Some(INFINITY));

    board.make_move(chosen).unwrap();
    assert_eq!(board.blue_pieces(), 0);
    assert!(board.game_over());
}

#[test]
fn test_minimizer_finds_immediate_win() {
    let mut searcher = AlphaBetaSearcher::default();
    let mut board = duel_board(PieceColor::Blue);
    let chosen = searcher.choose_move(&board);
    assert_eq!(searcher.last_score(), Some(-INFINITY));

    board.make_move(chosen).unwrap();
    assert_eq!(board.red_pieces(), 0);
    assert!(board.game_over());
}

#[test]
fn test_search_stats() {
    let mut searcher = AlphaBetaSearcher::new(2);
    assert_eq!(searcher.search_depth(), 2);
    searcher.choose_move(&Board::new());
    assert!(searcher.searched_position_count() > 0);
    assert!(searcher.last_score().is_some());
    assert!(searcher.last_search_duration().is_some());
}

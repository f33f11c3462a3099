pub mod alpha_beta_searcher;
pub mod ataxx_move;
pub mod board;
pub mod cli;
pub mod evaluate;
pub mod game;
pub mod input_handler;

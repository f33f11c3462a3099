//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, play::PlayArgs, pvp::PvpArgs, watch::WatchArgs,
};

#[derive(StructOpt)]
#[structopt(name = "ataxx", about = "An Ataxx engine implemented in Rust")]
pub enum Ataxx {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which searches for its moves with alpha-beta pruning at the given `--depth` (default: 4). Your color is chosen at random unless you specify `--color`. Setup blocks can be added with repeated `--block` options."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 4)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Determine the best move from the position reached by replaying the `--move` list from the starting position, searching at the given `--depth` (default: 4)."
    )]
    BestMove(BestMoveArgs),
}

impl crate::cli::commands::Command for Ataxx {
    fn execute(self) {
        match self {
            Self::Play(cmd) => cmd.execute(),
            Self::Pvp(cmd) => cmd.execute(),
            Self::Watch(cmd) => cmd.execute(),
            Self::BestMove(cmd) => cmd.execute(),
        }
    }
}

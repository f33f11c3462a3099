//! Play command - play a game against the computer.

use structopt::StructOpt;

use crate::board::color::PieceColor;
use crate::board::square::Square;
use crate::game::input_source::ConditionalInput;
use crate::game::renderer::ConditionalStatsRenderer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short = "c", long = "color", default_value = "random")]
    pub color: PieceColor,
    #[structopt(short = "b", long = "block")]
    pub blocks: Vec<Square>,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config(self.depth, self.blocks);
        run_game_loop(
            ConditionalInput {
                human_color: self.color,
            },
            ConditionalStatsRenderer {
                human_color: self.color,
            },
            config,
        );
    }
}

//! Pvp command - play a game against another human.

use structopt::StructOpt;

use crate::board::square::Square;
use crate::game::input_source::HumanInput;
use crate::game::renderer::SimpleRenderer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(short = "b", long = "block")]
    pub blocks: Vec<Square>,
}

impl Command for PvpArgs {
    fn execute(self) {
        // depth is irrelevant with two human players
        let config = create_config(0, self.blocks);
        run_game_loop(HumanInput, SimpleRenderer, config);
    }
}

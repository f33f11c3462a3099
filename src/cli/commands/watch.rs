//! Watch command - the computer plays against itself.

use std::time::Duration;

use structopt::StructOpt;

use crate::board::square::Square;
use crate::game::input_source::EngineInput;
use crate::game::renderer::StatsRenderer;

use super::util::{create_config, run_game_loop};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short = "b", long = "block")]
    pub blocks: Vec<Square>,
    /// Delay between moves, in milliseconds.
    #[structopt(long = "delay", default_value = "1000")]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config(self.depth, self.blocks);
        run_game_loop(
            EngineInput,
            StatsRenderer {
                delay_between_moves: Some(Duration::from_millis(self.delay_ms)),
            },
            config,
        );
    }
}

//! Shared utilities for CLI commands.

use crate::board::square::Square;
use crate::game::engine::EngineConfig;
use crate::game::input_source::InputSource;
use crate::game::r#loop::GameLoop;
use crate::game::renderer::GameRenderer;

pub(crate) fn run_game_loop<I, R>(input_source: I, renderer: R, config: EngineConfig)
where
    I: InputSource,
    R: GameRenderer,
{
    match GameLoop::new(input_source, renderer, config) {
        Ok(mut game) => game.run(),
        Err(error) => println!("error: {}", error),
    }
}

pub(crate) fn create_config(depth: u8, blocks: Vec<Square>) -> EngineConfig {
    EngineConfig {
        search_depth: depth,
        blocks,
    }
}

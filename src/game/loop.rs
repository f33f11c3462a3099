use crate::game::display::GameDisplay;
use crate::game::engine::{Engine, EngineConfig, EngineError};
use crate::game::input_source::InputSource;
use crate::game::renderer::GameRenderer;
use crate::input_handler::MoveInput;

/// Drives a session: render, read a move from the input source, apply it,
/// repeat until the game is over or the user quits.
pub struct GameLoop<I: InputSource, R: GameRenderer> {
    engine: Engine,
    ui: GameDisplay,
    input_source: I,
    renderer: R,
}

impl<I: InputSource, R: GameRenderer> GameLoop<I, R> {
    pub fn new(input_source: I, renderer: R, config: EngineConfig) -> Result<Self, EngineError> {
        Ok(Self {
            engine: Engine::with_config(config)?,
            ui: GameDisplay::new(),
            input_source,
            renderer,
        })
    }

    pub fn run(&mut self) {
        loop {
            let current_turn = self.engine.board().turn();
            let last_move = self.engine.last_move();

            self.renderer
                .render(&mut self.ui, &self.engine, current_turn, last_move.as_ref());

            if let Some(ending) = self.engine.check_game_over() {
                println!("{}", ending);
                break;
            }

            match self.input_source.get_move(current_turn) {
                Ok(Some(MoveInput::Undo)) => {
                    if let Err(error) = self.engine.take_back() {
                        println!("error: {}", error);
                    }
                }
                Ok(Some(input)) => match self.engine.make_move_from_input(input) {
                    Ok(_) => {
                        if let Some(delay) = self.renderer.frame_delay() {
                            std::thread::sleep(delay);
                        }
                    }
                    Err(error) => println!("error: {}", error),
                },
                Ok(None) => println!("Invalid input"),
                Err(_) => break, // user exit
            }
        }
    }
}

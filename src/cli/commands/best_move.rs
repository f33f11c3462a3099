//! Best-move command - analyze a position reached by a move sequence.

use structopt::StructOpt;

use crate::ataxx_move::AtaxxMove;
use crate::board::square::Square;
use crate::game::engine::Engine;

use super::util::create_config;
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short = "b", long = "block")]
    pub blocks: Vec<Square>,
    /// Moves to replay from the starting position, e.g. `-m a7-b6 -m a1-b2`.
    #[structopt(short = "m", long = "move")]
    pub moves: Vec<AtaxxMove>,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let config = create_config(self.depth, self.blocks);
        let mut engine = match Engine::with_config(config) {
            Ok(engine) => engine,
            Err(error) => {
                println!("error: {}", error);
                return;
            }
        };

        for mv in self.moves {
            if let Err(error) = engine.make_move(mv) {
                println!("error replaying {}: {}", mv, error);
                return;
            }
        }

        let best_move = engine.find_best_move();
        let stats = engine.search_stats();
        println!("{}", engine.board().to_ascii(true));
        println!();
        println!("Best move: {}", best_move);
        println!(
            "Score: {}, positions searched: {}, took: {}",
            stats.last_score.map_or("-".to_string(), |s| s.to_string()),
            stats.positions_searched,
            stats
                .last_search_duration
                .map_or("-".to_string(), |d| format!("{:?}", d))
        );
    }
}

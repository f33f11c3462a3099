use std::time::Duration;

use crate::ataxx_move::AtaxxMove;
use crate::board::color::PieceColor;
use crate::game::display::GameDisplay;
use crate::game::engine::Engine;

pub trait GameRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        engine: &Engine,
        current_turn: PieceColor,
        last_move: Option<&AtaxxMove>,
    );
    fn frame_delay(&self) -> Option<Duration>;
}

fn format_stats(engine: &Engine) -> String {
    let stats = engine.search_stats();
    format!(
        "* Score: {}\n* Positions searched: {} (depth: {})\n* Move took: {}",
        stats.last_score.map_or("-".to_string(), |s| s.to_string()),
        stats.positions_searched,
        stats.depth,
        stats
            .last_search_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}

/// Board only, with a prompt for the next player.
pub struct SimpleRenderer;

impl GameRenderer for SimpleRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        engine: &Engine,
        current_turn: PieceColor,
        last_move: Option<&AtaxxMove>,
    ) {
        ui.render_game_state(engine.board(), current_turn, last_move, None);
        println!("Enter your move:");
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

/// Board plus search statistics, for engine-vs-engine viewing.
pub struct StatsRenderer {
    pub delay_between_moves: Option<Duration>,
}

impl GameRenderer for StatsRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        engine: &Engine,
        current_turn: PieceColor,
        last_move: Option<&AtaxxMove>,
    ) {
        let stats_display = format_stats(engine);
        ui.render_game_state(engine.board(), current_turn, last_move, Some(&stats_display));
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

/// Stats plus an input prompt whenever it is the human's turn.
pub struct ConditionalStatsRenderer {
    pub human_color: PieceColor,
}

impl GameRenderer for ConditionalStatsRenderer {
    fn render(
        &self,
        ui: &mut GameDisplay,
        engine: &Engine,
        current_turn: PieceColor,
        last_move: Option<&AtaxxMove>,
    ) {
        let stats_display = format_stats(engine);
        ui.render_game_state(engine.board(), current_turn, last_move, Some(&stats_display));
        if current_turn == self.human_color {
            println!("Enter your move ('-' to pass, 'undo', 'q' to quit):");
        }
    }

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

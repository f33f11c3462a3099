pub mod display;
pub mod engine;
pub mod input_source;
pub mod r#loop;
pub mod renderer;

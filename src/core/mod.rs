mod board;
mod history;
pub mod level;
mod models;

pub use board::Board;
pub use history::History;
pub use level::LevelError;
pub use models::{Cell, Command, Direction, MoveOutcome, MoveRecord, Vec2};

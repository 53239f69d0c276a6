//! Endless runner
//!
//! Jump over obstacles on an ever-faster conveyor. Scores are kept in the
//! SQLite table from `crate::storage`.

pub mod settings;
pub mod entities;
pub mod world;
pub mod game;
pub mod ui;

pub use settings::{Palette, RunnerSettings};
pub use entities::{Obstacle, Runner};
pub use world::RunnerWorld;
pub use game::{collect_keys, RunnerCommand, RunnerGame, RunnerKey, RunnerState};
pub use ui::draw_runner;

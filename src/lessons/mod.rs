//! The lessons
//!
//! Each lesson adds one idea to the same seven-phase loop:
//!
//! | Lesson       | Adds                                             |
//! |--------------|--------------------------------------------------|
//! | Template     | the empty loop                                   |
//! | Moving       | a player position and raw arrow-key input        |
//! | Abstraction  | controller, player and camera as separate pieces |
//! | Orbit        | a world container and appearance-driven drawing  |
//! | Gravity      | thrust control and the physics step              |
//! | Platformer   | side-scrolling, jumping, platforms               |
//!
//! The endless runner lives in `crate::runner`.
//!
//! Lessons take `dt` in 60 Hz frames (1.0 at 60 fps), so tuning values are
//! "per frame" numbers.

pub mod template;
pub mod moving;
pub mod abstraction;
pub mod orbit;
pub mod gravity;
pub mod platformer;

pub use template::TemplateLesson;
pub use moving::MovingLesson;
pub use abstraction::AbstractionLesson;
pub use orbit::OrbitLesson;
pub use gravity::GravityLesson;
pub use platformer::PlatformerLesson;

/// Requests a lesson can make of the app shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LessonEvent {
    None,
    ToggleFullscreen,
}

/// Seconds to 60 Hz frames
pub fn frames(seconds: f32) -> f32 {
    seconds * 60.0
}

/// First debug text baseline, below the tab strip
pub const DEBUG_TEXT_Y: f32 = 64.0;
pub const DEBUG_TEXT_X: f32 = 20.0;

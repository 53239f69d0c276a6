//! Lesson 0: the base template
//!
//! A window and a loop that clears the screen. The seven phases every later
//! lesson fills in are listed on screen.

use macroquad::prelude::*;
use super::{DEBUG_TEXT_X, DEBUG_TEXT_Y};

pub const LOOP_PHASES: [&str; 7] = [
    "1 Time",
    "2 Controls",
    "3 Physics",
    "4 Update Coordinates",
    "5 Handle Interactions",
    "6 Camera",
    "7 Draw",
];

#[derive(Debug, Clone, Default)]
pub struct TemplateLesson {
    pub frames: u64,
    /// Total time in 60 Hz frames
    pub elapsed: f32,
}

impl TemplateLesson {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, dt: f32) {
        self.frames += 1;
        self.elapsed += dt;
    }

    pub fn draw(&self) {
        clear_background(BLACK);
        let dim = Color::new(0.4, 0.4, 0.45, 1.0);
        for (i, phase) in LOOP_PHASES.iter().enumerate() {
            draw_text(phase, DEBUG_TEXT_X, DEBUG_TEXT_Y + i as f32 * 28.0, 24.0, dim);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_frames() {
        let mut lesson = TemplateLesson::new();
        lesson.update(1.0);
        lesson.update(2.0);
        assert_eq!(lesson.frames, 2);
        assert_eq!(lesson.elapsed, 3.0);
    }
}

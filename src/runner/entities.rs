//! Runner player and obstacles
//!
//! Both are plain rectangles in logical canvas space. Collision is strict
//! AABB overlap via `Rect::intersects`.

use crate::ui::Rect;
use super::RunnerSettings;

/// The box that jumps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Runner {
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub vy: f32,
    pub on_ground: bool,
}

impl Runner {
    /// Standing on the ground at the start position
    pub fn new(settings: &RunnerSettings) -> Self {
        Self {
            x: settings.player_x,
            y: settings.player_rest_y(),
            vy: 0.0,
            on_ground: true,
        }
    }

    pub fn jump(&mut self, settings: &RunnerSettings) {
        if self.on_ground {
            self.vy = settings.jump_velocity;
            self.on_ground = false;
        }
    }

    /// Advance `frames` 60 Hz frames: gravity, move, land.
    pub fn update(&mut self, settings: &RunnerSettings, frames: f32) {
        self.vy += settings.gravity * frames;
        self.y += self.vy * frames;
        if self.y + settings.player_h >= settings.ground_y() {
            self.settle(settings);
        }
    }

    /// Snap onto the ground, at rest
    pub fn settle(&mut self, settings: &RunnerSettings) {
        self.y = settings.player_rest_y();
        self.vy = 0.0;
        self.on_ground = true;
    }

    pub fn rect(&self, settings: &RunnerSettings) -> Rect {
        Rect::new(self.x, self.y, settings.player_w, settings.player_h)
    }
}

/// A block standing on the ground, scrolling left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    pub w: f32,
    pub h: f32,
}

impl Obstacle {
    pub fn new(x: f32, w: f32, h: f32) -> Self {
        Self { x, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn rect(&self, ground_y: f32) -> Rect {
        Rect::new(self.x, ground_y - self.h, self.w, self.h)
    }

    pub fn advance(&mut self, dx: f32) {
        self.x -= dx;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jump_only_from_ground() {
        let settings = RunnerSettings::default();
        let mut runner = Runner::new(&settings);

        runner.jump(&settings);
        assert_eq!(runner.vy, -15.0);
        assert!(!runner.on_ground);

        runner.update(&settings, 1.0);
        runner.jump(&settings);
        assert!((runner.vy - (-15.0 + 0.8)).abs() < 1e-5);
    }

    #[test]
    fn test_jump_arc_lands_on_ground() {
        let settings = RunnerSettings::default();
        let mut runner = Runner::new(&settings);
        runner.jump(&settings);

        let mut peak = runner.y;
        for _ in 0..120 {
            runner.update(&settings, 1.0);
            peak = peak.min(runner.y);
        }
        assert!(peak < settings.player_rest_y() - 100.0);
        assert_eq!(runner.y, settings.player_rest_y());
        assert!(runner.on_ground);
        assert_eq!(runner.vy, 0.0);
    }

    #[test]
    fn test_obstacle_sits_on_ground() {
        let mut ob = Obstacle::new(900.0, 40.0, 70.0);
        assert_eq!(ob.rect(440.0), Rect::new(900.0, 370.0, 40.0, 70.0));
        ob.advance(7.0);
        assert_eq!(ob.x, 893.0);
        assert_eq!(ob.right(), 933.0);
    }

    #[test]
    fn test_collision_with_player() {
        let settings = RunnerSettings::default();
        let runner = Runner::new(&settings);
        let ground = settings.ground_y();

        // Player spans x 120..170
        assert!(runner.rect(&settings).intersects(&Obstacle::new(160.0, 30.0, 30.0).rect(ground)));
        // Touching the right edge is not a hit
        assert!(!runner.rect(&settings).intersects(&Obstacle::new(170.0, 30.0, 30.0).rect(ground)));
    }
}

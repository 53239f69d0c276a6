//! Movement models
//!
//! Three ways a player can move, one per lesson stage:
//! - `DirectMover`: position follows the input axis, no momentum
//! - `Thruster`: input nudges velocity, physics does the rest
//! - `Jumper`: side-scroller player with gravity and a single jump
//!
//! `dt` is frame-normalised here (1.0 at 60 fps), so per-frame tuning
//! values read the same as the numbers in settings.

use macroquad::prelude::Vec2;
use crate::input::Controller;
use super::body::PhysicsBody;

/// Moves straight along the controller axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectMover {
    pub speed: f32,
}

impl DirectMover {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    pub fn step(&self, position: &mut Vec2, controller: &Controller, dt: f32) {
        *position += controller.axis() * self.speed * dt;
    }
}

/// Thrust-based control: each held direction adds `thrust` to velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thruster {
    pub thrust: f32,
    /// Velocity multiplier per frame while braking
    pub brake: f32,
}

impl Thruster {
    pub fn new(thrust: f32, brake: f32) -> Self {
        Self { thrust, brake }
    }

    pub fn apply(&self, body: &mut PhysicsBody, controller: &Controller, dt: f32) {
        body.velocity += controller.axis() * self.thrust * dt;
        if controller.brake {
            body.velocity *= self.brake.powf(dt);
        }
    }
}

impl Default for Thruster {
    fn default() -> Self {
        Self::new(0.1, 0.92)
    }
}

/// Circle player that runs, falls and jumps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jumper {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative is up)
    pub jump_strength: f32,
    pub is_jumping: bool,
}

impl Jumper {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            radius: radius.max(0.0),
            gravity: 0.5,
            jump_strength: -10.0,
            is_jumping: false,
        }
    }

    /// Start a jump. Ignored while airborne.
    pub fn jump(&mut self) {
        if !self.is_jumping {
            self.velocity.y = self.jump_strength;
            self.is_jumping = true;
        }
    }

    /// Apply gravity, move, and land on `ground_y` if reached.
    pub fn update(&mut self, ground_y: f32, dt: f32) {
        self.velocity.y += self.gravity * dt;
        self.position += self.velocity * dt;

        if self.position.y + self.radius >= ground_y {
            self.position.y = ground_y - self.radius;
            self.velocity.y = 0.0;
            self.is_jumping = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(left: bool, right: bool, up: bool, down: bool, brake: bool) -> Controller {
        Controller { left, right, up, down, brake }
    }

    #[test]
    fn test_direct_mover() {
        let mover = DirectMover::new(3.0);
        let mut position = Vec2::ZERO;
        mover.step(&mut position, &holding(false, true, false, true, false), 1.0);
        assert_eq!(position, Vec2::new(3.0, 3.0));

        mover.step(&mut position, &holding(true, false, false, false, false), 0.5);
        assert_eq!(position, Vec2::new(1.5, 3.0));
    }

    #[test]
    fn test_thrust_adds_velocity() {
        let thruster = Thruster::default();
        let mut body = PhysicsBody::default();
        thruster.apply(&mut body, &holding(false, false, true, false, false), 1.0);
        assert!((body.velocity.y + 0.1).abs() < 1e-6);
        assert_eq!(body.velocity.x, 0.0);
    }

    #[test]
    fn test_brake_damps_velocity() {
        let thruster = Thruster::default();
        let mut body = PhysicsBody { velocity: Vec2::new(10.0, -5.0), ..PhysicsBody::default() };
        thruster.apply(&mut body, &holding(false, false, false, false, true), 1.0);
        assert!((body.velocity.x - 9.2).abs() < 1e-5);
        assert!((body.velocity.y + 4.6).abs() < 1e-5);
    }

    #[test]
    fn test_jump_only_when_grounded() {
        let mut player = Jumper::new(Vec2::new(0.0, 850.0), 10.0);
        player.jump();
        assert_eq!(player.velocity.y, -10.0);
        assert!(player.is_jumping);

        player.velocity.y = -3.0;
        player.jump();
        assert_eq!(player.velocity.y, -3.0);
    }

    #[test]
    fn test_lands_on_ground() {
        let ground = 860.0;
        let mut player = Jumper::new(Vec2::new(0.0, ground - 10.0), 10.0);
        player.jump();

        // Rises first
        player.update(ground, 1.0);
        assert!(player.position.y < ground - 10.0);

        for _ in 0..100 {
            player.update(ground, 1.0);
        }
        assert_eq!(player.position.y, ground - 10.0);
        assert_eq!(player.velocity.y, 0.0);
        assert!(!player.is_jumping);
    }

    #[test]
    fn test_horizontal_velocity_moves_player() {
        let mut player = Jumper::new(Vec2::new(0.0, 50.0), 10.0);
        player.velocity.x = 2.0;
        player.update(60.0, 1.0);
        assert_eq!(player.position.x, 2.0);
    }
}

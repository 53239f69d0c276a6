//! Intermediate organisation & physics
//!
//! The player is steered by thrust instead of moved directly. Each frame:
//! controls add velocity, `Physics::step` applies planet gravity, integrates
//! and resolves contacts, then the camera follows. Restart (R) puts a fresh
//! player back at the origin; the planets never move.

use macroquad::prelude::*;
use crate::config::PhysicsSettings;
use crate::game::{draw_world, Appearance, Camera, Entity, Physics, PhysicsBody, Thruster, World};
use crate::input::{Action, ActionSource, Controller};
use crate::ui::{draw_debug_text, position_readout};
use super::{DEBUG_TEXT_X, DEBUG_TEXT_Y};

const PLAYER_COLOR: [u8; 3] = [255, 255, 0];
const PLANET_COLOR: [u8; 3] = [0, 120, 255];
const MOON_COLOR: [u8; 3] = [200, 90, 70];

pub struct GravityLesson {
    settings: PhysicsSettings,
    pub physics: Physics,
    pub world: World,
    pub player: Entity,
    pub camera: Camera,
    controller: Controller,
}

impl GravityLesson {
    pub fn new(settings: &PhysicsSettings, screen: Vec2) -> Self {
        let mut lesson = Self {
            settings: settings.clone(),
            physics: Physics::new(settings.gravity_constant),
            world: World::new(),
            player: Entity::NULL,
            camera: Camera::new(screen.x, screen.y),
            controller: Controller::new(),
        };
        lesson.reset();
        lesson
    }

    /// Rebuild the scene: player at rest at the origin, two fixed planets.
    pub fn reset(&mut self) {
        self.world.clear();
        self.spawn_player();
        let s = &self.settings;
        self.world.spawn_planet(vec2(200.0, 150.0), s.planet_radius, s.planet_mass, PLANET_COLOR);
        self.world.spawn_planet(
            vec2(-350.0, -200.0),
            s.planet_radius * 0.6,
            s.planet_mass * 0.4,
            MOON_COLOR,
        );
        log::debug!("Gravity scene reset");
    }

    fn spawn_player(&mut self) {
        let s = &self.settings;
        self.player = self.world.spawn_player(
            PhysicsBody::new(Vec2::ZERO, s.player_mass, s.player_radius),
            Appearance::circle(PLAYER_COLOR),
        );
        self.world.thrusters.insert(self.player, Thruster::new(s.thrust, s.brake));
    }

    /// Replace the player with a new one at rest at the origin.
    pub fn respawn_player(&mut self) {
        self.world.despawn(self.player);
        self.spawn_player();
        log::debug!("Gravity player respawned");
    }

    pub fn update(&mut self, input: &impl ActionSource, dt: f32, screen: Vec2) {
        if input.action_pressed(Action::Restart) {
            self.respawn_player();
        }

        self.controller.update(input);
        self.world.apply_thrust(&self.controller, dt);
        self.world.step_physics(&self.physics, dt);

        self.camera.set_viewport(screen.x, screen.y);
        self.camera.update(self.world.position(self.player));
    }

    pub fn draw(&self) {
        clear_background(BLACK);
        draw_world(&self.world, &self.camera);

        let body = self.world.body(self.player).copied().unwrap_or_default();
        let speed = format!("Speed: {:.2}", body.velocity.length());
        let bodies = format!("Bodies: {}", self.world.entity_count());
        draw_debug_text(
            &[
                &position_readout("Player", body.position),
                &speed,
                &bodies,
                "Arrows/WASD thrust, Shift brake, R restart",
            ],
            DEBUG_TEXT_X,
            DEBUG_TEXT_Y,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FakeInput;

    const SCREEN: Vec2 = Vec2::new(1280.0, 720.0);

    fn lesson() -> GravityLesson {
        GravityLesson::new(&PhysicsSettings::default(), SCREEN)
    }

    #[test]
    fn test_player_falls_toward_planet() {
        let mut lesson = lesson();
        let start = lesson.world.position(lesson.player).unwrap_or_default();
        let planet = vec2(200.0, 150.0);

        for _ in 0..30 {
            lesson.update(&FakeInput::default(), 1.0, SCREEN);
        }
        let now = lesson.world.position(lesson.player).unwrap_or_default();
        assert!(now.distance(planet) < start.distance(planet));
    }

    #[test]
    fn test_player_rests_on_planet_surface() {
        let mut lesson = lesson();
        for _ in 0..2000 {
            lesson.update(&FakeInput::default(), 1.0, SCREEN);
        }
        let player = lesson.world.body(lesson.player).copied().unwrap_or_default();
        let gap = player.position.distance(vec2(200.0, 150.0));
        // Touching the big planet (radius 40 + 10), not inside it
        assert!((gap - 50.0).abs() < 1.0, "gap {gap}");
    }

    #[test]
    fn test_thrust_then_restart() {
        let mut lesson = lesson();
        lesson.update(&FakeInput::holding(&[Action::MoveLeft]), 1.0, SCREEN);
        let vx = lesson.world.body(lesson.player).map_or(0.0, |b| b.velocity.x);
        assert!(vx < 0.0);

        let old_player = lesson.player;
        lesson.update(&FakeInput::pressing(&[Action::Restart]), 1.0, SCREEN);
        assert!(!lesson.world.is_alive(old_player));
        assert_eq!(lesson.world.entity_count(), 3);
        assert_eq!(lesson.world.player(), Some(lesson.player));
        let body = lesson.world.body(lesson.player).copied().unwrap_or_default();
        assert!(body.position.length() < 0.5, "restarted near origin, got {:?}", body.position);
    }

    #[test]
    fn test_reset_rebuilds_whole_scene() {
        let mut lesson = lesson();
        lesson.respawn_player();
        lesson.respawn_player();
        assert_eq!(lesson.world.entity_count(), 3);

        lesson.reset();
        assert_eq!(lesson.world.entity_count(), 3);
        assert_eq!(lesson.world.player(), Some(lesson.player));
        assert_eq!(lesson.world.position(lesson.player), Some(Vec2::ZERO));
    }

    #[test]
    fn test_camera_follows_player() {
        let mut lesson = lesson();
        lesson.update(&FakeInput::default(), 1.0, SCREEN);
        let position = lesson.world.position(lesson.player).unwrap_or_default();
        assert_eq!(lesson.camera.world_to_screen(position), SCREEN / 2.0);
    }
}

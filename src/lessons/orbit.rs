//! Intermediate abstraction: a world with a planet
//!
//! The player and a planet both live in a `World`. Nothing draws itself:
//! the renderer reads each object's appearance and draws largest first.
//! Movement is direct (no physics yet).

use macroquad::prelude::*;
use crate::config::{LessonSettings, PhysicsSettings};
use crate::game::{draw_world, Appearance, Camera, DirectMover, Entity, PhysicsBody, World};
use crate::input::{ActionSource, Controller};
use crate::ui::{draw_debug_text, position_readout};
use super::{DEBUG_TEXT_X, DEBUG_TEXT_Y};

pub const PLAYER_COLOR: [u8; 3] = [255, 255, 0];
pub const PLANET_COLOR: [u8; 3] = [0, 120, 255];

pub struct OrbitLesson {
    pub world: World,
    pub player: Entity,
    pub camera: Camera,
    controller: Controller,
}

impl OrbitLesson {
    pub fn new(lessons: &LessonSettings, physics: &PhysicsSettings, screen: Vec2) -> Self {
        let mut world = World::new();
        let player = world.spawn_player(
            PhysicsBody::new(Vec2::ZERO, physics.player_mass, physics.player_radius),
            Appearance::circle(PLAYER_COLOR),
        );
        world.movers.insert(player, DirectMover::new(lessons.move_speed));
        world.spawn_planet(vec2(200.0, 150.0), physics.planet_radius, physics.planet_mass, PLANET_COLOR);

        Self {
            world,
            player,
            camera: Camera::new(screen.x, screen.y),
            controller: Controller::new(),
        }
    }

    pub fn update(&mut self, input: &impl ActionSource, dt: f32, screen: Vec2) {
        self.controller.update(input);
        self.world.apply_direct_movement(&self.controller, dt);
        self.camera.set_viewport(screen.x, screen.y);
        self.camera.update(self.world.position(self.player));
    }

    pub fn draw(&self) {
        clear_background(BLACK);
        draw_world(&self.world, &self.camera);

        let position = self.world.position(self.player).unwrap_or_default();
        draw_debug_text(&[&position_readout("Player", position)], DEBUG_TEXT_X, DEBUG_TEXT_Y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Action, FakeInput};

    fn lesson() -> OrbitLesson {
        OrbitLesson::new(&LessonSettings::default(), &PhysicsSettings::default(), vec2(1280.0, 720.0))
    }

    #[test]
    fn test_scene() {
        let lesson = lesson();
        assert_eq!(lesson.world.entity_count(), 2);
        // Planet first: larger radius is drawn underneath
        let order = lesson.world.draw_order();
        assert_eq!(order.last(), Some(&lesson.player));
    }

    #[test]
    fn test_direct_movement_and_follow() {
        let mut lesson = lesson();
        let input = FakeInput::holding(&[Action::MoveRight, Action::MoveUp]);
        lesson.update(&input, 1.0, vec2(1280.0, 720.0));
        lesson.update(&input, 1.0, vec2(1280.0, 720.0));

        let position = lesson.world.position(lesson.player).unwrap_or_default();
        assert_eq!(position, vec2(6.0, -6.0));
        assert_eq!(lesson.camera.world_to_screen(position), vec2(640.0, 360.0));
    }

    #[test]
    fn test_planet_does_not_move() {
        let mut lesson = lesson();
        lesson.update(&FakeInput::holding(&[Action::MoveLeft]), 1.0, vec2(1280.0, 720.0));
        let planet = lesson.world.draw_order()[0];
        assert_eq!(lesson.world.position(planet), Some(vec2(200.0, 150.0)));
    }
}

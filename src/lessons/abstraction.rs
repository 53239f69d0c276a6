//! Lesson 2: abstraction
//!
//! Same scene as lesson 1, split into pieces: `KeyBindings` reads the keys,
//! the player owns a position, and a `Camera` turns world positions into
//! screen positions. Movement is scaled by `dt`.

use macroquad::prelude::*;
use crate::game::{draw_appearance, rgb_color, Appearance, Camera};
use crate::input::{KeyBindings, KeySnapshot};
use crate::ui::{draw_debug_text, position_readout};
use super::{DEBUG_TEXT_X, DEBUG_TEXT_Y};

pub const SQUARE_SIZE: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct AbstractionLesson {
    pub player: Vec2,
    pub bindings: KeyBindings,
    pub camera: Camera,
    pub square: Vec2,
}

impl AbstractionLesson {
    pub fn new(speed: f32, screen: Vec2) -> Self {
        let mut bindings = KeyBindings::arrows();
        bindings.set_speed(speed);
        Self {
            player: Vec2::ZERO,
            bindings,
            camera: Camera::new(screen.x, screen.y),
            square: vec2(200.0, 150.0),
        }
    }

    pub fn update(&mut self, keys: &KeySnapshot, dt: f32, screen: Vec2) {
        self.player += self.bindings.movement(keys, dt);
        self.camera.set_viewport(screen.x, screen.y);
        self.camera.update(Some(self.player));
    }

    pub fn draw(&self) {
        clear_background(BLACK);

        let player = Appearance::Triangle { size: 20.0, color: rgb_color([50, 0, 50]) };
        draw_appearance(&player, self.camera.world_to_screen(self.player), 0.0);

        let sq = self.camera.world_to_screen(self.square);
        let square = Appearance::Rect { size: Vec2::splat(SQUARE_SIZE), color: rgb_color([0, 200, 100]) };
        draw_appearance(&square, sq + Vec2::splat(SQUARE_SIZE / 2.0), 0.0);

        draw_debug_text(&[&position_readout("Player", self.player)], DEBUG_TEXT_X, DEBUG_TEXT_Y);
    }
}

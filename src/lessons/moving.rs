//! Lesson 1: moving in the world
//!
//! The player never moves on screen. Arrow keys change the player's world
//! position, and the one other object is drawn at `object - player`, so the
//! world appears to slide. Steps are per frame, not per second: at a lower
//! frame rate the player moves slower. Lesson 2 fixes that with `dt`.

use macroquad::prelude::*;
use crate::game::{draw_appearance, rgb_color, Appearance};
use crate::input::KeySnapshot;
use crate::ui::{draw_debug_text, position_readout};
use super::{DEBUG_TEXT_X, DEBUG_TEXT_Y};

pub const OBJECT_SIZE: f32 = 20.0;

#[derive(Debug, Clone)]
pub struct MovingLesson {
    pub player: Vec2,
    pub object: Vec2,
    step: f32,
}

impl MovingLesson {
    pub fn new(step: f32) -> Self {
        Self {
            player: Vec2::ZERO,
            object: vec2(200.0, 150.0),
            step,
        }
    }

    pub fn update(&mut self, keys: &KeySnapshot) {
        if keys.is_down(KeyCode::Up) {
            self.player.y -= self.step;
        }
        if keys.is_down(KeyCode::Right) {
            self.player.x += self.step;
        }
        if keys.is_down(KeyCode::Left) {
            self.player.x -= self.step;
        }
        if keys.is_down(KeyCode::Down) {
            self.player.y += self.step;
        }
    }

    /// Top-left corner of the object on screen
    pub fn object_screen(&self) -> Vec2 {
        self.object - self.player
    }

    /// The object as the renderer draws it: a square centred on this point
    pub fn object_shape(&self) -> (Appearance, Vec2) {
        let shape = Appearance::Rect { size: Vec2::splat(OBJECT_SIZE), color: rgb_color([0, 200, 100]) };
        (shape, self.object_screen() + Vec2::splat(OBJECT_SIZE / 2.0))
    }

    pub fn draw(&self) {
        clear_background(BLACK);

        let centre = vec2(screen_width(), screen_height()) / 2.0;
        let player = Appearance::Triangle { size: 20.0, color: rgb_color([50, 0, 50]) };
        draw_appearance(&player, centre, 0.0);

        let (object, at) = self.object_shape();
        draw_appearance(&object, at, 0.0);

        draw_debug_text(&[&position_readout("Player", self.player)], DEBUG_TEXT_X, DEBUG_TEXT_Y);
    }
}

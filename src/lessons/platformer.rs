//! Playground: a tiny side-scroller
//!
//! Circle player with gravity and a single jump, flat ground and one
//! platform. The camera tracks the player horizontally only. Escape toggles
//! fullscreen; the scene is re-anchored to the new screen bottom.

use macroquad::prelude::*;
use crate::config::PlatformerSettings;
use crate::game::{draw_terrain, Camera, CameraMode, Jumper, Platform, Terrain};
use crate::input::{Action, ActionSource};
use crate::ui::draw_debug_text;
use super::{LessonEvent, DEBUG_TEXT_X, DEBUG_TEXT_Y};

const PLAYER_COLOR: Color = Color::new(0.0, 1.0, 1.0, 1.0);
const PLATFORM_COLOR: Color = Color::new(200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 1.0);
const GROUND_COLOR: Color = Color::new(0.2, 0.2, 0.25, 1.0);

/// Platform top sits this far above the bottom of the screen
const PLATFORM_MARGIN: f32 = 120.0;

pub struct PlatformerLesson {
    settings: PlatformerSettings,
    pub player: Jumper,
    pub terrain: Terrain,
    pub camera: Camera,
    /// Screen height the scene is anchored to
    anchored_height: f32,
}

impl PlatformerLesson {
    pub fn new(settings: &PlatformerSettings, screen: Vec2) -> Self {
        let ground = screen.y - settings.ground_margin;

        let mut player = Jumper::new(vec2(0.0, ground - settings.radius), settings.radius);
        player.gravity = settings.gravity;
        player.jump_strength = settings.jump_strength;

        let mut terrain = Terrain::new(ground);
        terrain.add_platform(Platform::new(
            vec2(300.0, screen.y - PLATFORM_MARGIN),
            vec2(200.0, 20.0),
            PLATFORM_COLOR,
        ));

        Self {
            settings: settings.clone(),
            player,
            terrain,
            camera: Camera::new(screen.x, screen.y).with_mode(CameraMode::FollowX),
            anchored_height: screen.y,
        }
    }

    /// Shift the scene vertically so the ground stays `ground_margin` above
    /// the screen bottom.
    fn anchor_to(&mut self, screen: Vec2) {
        let dy = screen.y - self.anchored_height;
        if dy == 0.0 {
            return;
        }
        self.terrain.ground_level += dy;
        for platform in &mut self.terrain.platforms {
            platform.position.y += dy;
        }
        self.player.position.y += dy;
        self.anchored_height = screen.y;
    }

    pub fn update(&mut self, input: &impl ActionSource, dt: f32, screen: Vec2) -> LessonEvent {
        if input.action_pressed(Action::Back) {
            return LessonEvent::ToggleFullscreen;
        }

        self.anchor_to(screen);
        self.camera.set_viewport(screen.x, screen.y);
        // Top of the world stays at the top of the screen
        self.camera.position.y = screen.y / 2.0;

        self.player.velocity.x = 0.0;
        if input.action_down(Action::MoveLeft) {
            self.player.velocity.x = -self.settings.run_speed;
        }
        if input.action_down(Action::MoveRight) {
            self.player.velocity.x = self.settings.run_speed;
        }
        if input.action_down(Action::MoveUp) || input.action_down(Action::Jump) {
            self.player.jump();
        }

        let p = self.player;
        let ground = self.terrain.ground_height_at(p.position.x, p.position.y, p.velocity.y);
        self.player.update(ground, dt);
        self.camera.update(Some(self.player.position));

        LessonEvent::None
    }

    pub fn draw(&self) {
        clear_background(BLACK);

        let ground = self.camera.world_to_screen(vec2(0.0, self.terrain.ground_level));
        draw_line(0.0, ground.y, screen_width(), ground.y, 1.0, GROUND_COLOR);
        draw_terrain(&self.terrain, &self.camera);

        let p = self.camera.world_to_screen(self.player.position);
        draw_circle(p.x, p.y, self.player.radius, PLAYER_COLOR);

        let readout = format!("Player X: {:.2}", self.player.position.x);
        draw_debug_text(&[&readout], DEBUG_TEXT_X, DEBUG_TEXT_Y);
    }
}

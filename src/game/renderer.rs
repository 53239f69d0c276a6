//! World renderer
//!
//! Reads appearance tags and bodies, transforms through the camera, draws
//! with macroquad shapes. Objects never draw themselves.

use macroquad::prelude::*;
use super::body::Appearance;
use super::camera::Camera;
use super::platform::Terrain;
use super::world::World;

/// Draw every visible entity, back to front.
pub fn draw_world(world: &World, camera: &Camera) {
    for entity in world.draw_order() {
        let (Some(body), Some(appearance)) = (world.body(entity), world.appearances.get(entity)) else {
            continue;
        };
        let screen = camera.world_to_screen(body.position);
        draw_appearance(appearance, screen, body.radius);
    }
}

/// Draw one appearance centred on `screen`.
pub fn draw_appearance(appearance: &Appearance, screen: Vec2, radius: f32) {
    match *appearance {
        Appearance::Circle { color } => {
            draw_circle(screen.x, screen.y, radius, color);
        }
        Appearance::Rect { size, color } => {
            let half = size / 2.0;
            draw_rectangle(screen.x - half.x, screen.y - half.y, size.x, size.y, color);
        }
        Appearance::Triangle { size, color } => {
            let half = size / 2.0;
            draw_triangle(
                vec2(screen.x, screen.y - half),
                vec2(screen.x - half, screen.y + half),
                vec2(screen.x + half, screen.y + half),
                color,
            );
        }
    }
}

/// Platforms as filled rectangles (ground itself is left to the caller).
pub fn draw_terrain(terrain: &Terrain, camera: &Camera) {
    for platform in &terrain.platforms {
        let screen = camera.world_to_screen(platform.position);
        draw_rectangle(screen.x, screen.y, platform.size.x, platform.size.y, platform.color);
    }
}

//! Physical state and appearance of world objects
//!
//! Objects carry data only. Drawing happens in the renderer, which reads the
//! appearance tag; the physics step reads and writes `PhysicsBody`.

use macroquad::prelude::{Color, Vec2};

/// Default body mass
pub const DEFAULT_MASS: f32 = 1.0;
/// Default body radius
pub const DEFAULT_RADIUS: f32 = 8.0;

/// Position, velocity and collision circle of an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
    /// Collision radius, never negative
    pub radius: f32,
    /// Static bodies attract others but are never moved
    pub is_static: bool,
}

impl PhysicsBody {
    /// A dynamic body at rest.
    pub fn new(position: Vec2, mass: f32, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            mass,
            radius: radius.max(0.0),
            is_static: false,
        }
    }

    /// A body pinned in place (planets).
    pub fn fixed(position: Vec2, mass: f32, radius: f32) -> Self {
        Self {
            is_static: true,
            ..Self::new(position, mass, radius)
        }
    }

    /// Do the two collision circles overlap (strictly)?
    pub fn overlaps(&self, other: &PhysicsBody) -> bool {
        let min_dist = self.radius + other.radius;
        self.position.distance_squared(other.position) < min_dist * min_dist
    }
}

impl Default for PhysicsBody {
    fn default() -> Self {
        Self::new(Vec2::ZERO, DEFAULT_MASS, DEFAULT_RADIUS)
    }
}

/// How the renderer should draw an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Appearance {
    /// Filled circle using the body radius
    Circle { color: Color },
    /// Axis-aligned rectangle centred on the body
    Rect { size: Vec2, color: Color },
    /// Upward-pointing triangle centred on the body
    Triangle { size: f32, color: Color },
}

impl Appearance {
    pub fn circle(rgb: [u8; 3]) -> Self {
        Appearance::Circle { color: rgb_color(rgb) }
    }
}

/// Convert an `[r, g, b]` triple (as stored in settings) to a macroquad colour.
pub fn rgb_color([r, g, b]: [u8; 3]) -> Color {
    Color::from_rgba(r, g, b, 255)
}

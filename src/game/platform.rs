//! Ground and platforms for the side-scroller lesson

use macroquad::prelude::{Color, Vec2};

/// A solid rectangle the player can land on from above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    /// Top-left corner in world space
    pub position: Vec2,
    pub size: Vec2,
    pub color: Color,
}

impl Platform {
    pub fn new(position: Vec2, size: Vec2, color: Color) -> Self {
        Self { position, size, color }
    }

    pub fn top(&self) -> f32 {
        self.position.y
    }

    /// Inclusive on both edges.
    pub fn spans_x(&self, x: f32) -> bool {
        self.position.x <= x && x <= self.position.x + self.size.x
    }
}

/// Flat ground plus any number of platforms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Terrain {
    pub ground_level: f32,
    pub platforms: Vec<Platform>,
}

impl Terrain {
    pub fn new(ground_level: f32) -> Self {
        Self {
            ground_level,
            platforms: Vec::new(),
        }
    }

    pub fn add_platform(&mut self, platform: Platform) {
        self.platforms.push(platform);
    }

    /// Highest surface the player at (`x`, `y`) can land on.
    ///
    /// Platforms count only while the player is above them and not rising;
    /// jumping up through a platform is allowed.
    pub fn ground_height_at(&self, x: f32, y: f32, vy: f32) -> f32 {
        let falling = vy >= 0.0;
        self.platforms
            .iter()
            .filter(|p| falling && p.spans_x(x) && y <= p.top())
            .map(Platform::top)
            .fold(self.ground_level, f32::min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::WHITE;

    fn terrain() -> Terrain {
        let mut terrain = Terrain::new(860.0);
        terrain.add_platform(Platform::new(Vec2::new(300.0, 780.0), Vec2::new(200.0, 20.0), WHITE));
        terrain
    }

    #[test]
    fn test_ground_when_no_platform_below() {
        assert_eq!(terrain().ground_height_at(100.0, 500.0, 1.0), 860.0);
    }

    #[test]
    fn test_platform_when_falling_above_it() {
        let t = terrain();
        assert_eq!(t.ground_height_at(400.0, 700.0, 2.0), 780.0);
        // Edges are inclusive
        assert_eq!(t.ground_height_at(300.0, 700.0, 0.0), 780.0);
        assert_eq!(t.ground_height_at(500.0, 700.0, 0.0), 780.0);
    }

    #[test]
    fn test_rising_passes_through() {
        assert_eq!(terrain().ground_height_at(400.0, 700.0, -5.0), 860.0);
    }

    #[test]
    fn test_below_platform_uses_ground() {
        assert_eq!(terrain().ground_height_at(400.0, 790.0, 1.0), 860.0);
    }
}

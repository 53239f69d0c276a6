//! 2D follow camera
//!
//! The camera stores the world point shown at the centre of the screen.
//! Converting a world position to screen space is a translation:
//! `screen = world - camera + viewport / 2`.

use macroquad::prelude::Vec2;

/// How the camera reacts to its target each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Centre on the target every frame
    #[default]
    Follow,
    /// Track the target horizontally only (side-scrollers)
    FollowX,
    /// Ignore the target; position is set by hand
    Free,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// World point at the centre of the screen
    pub position: Vec2,
    /// Screen size in pixels
    pub viewport: Vec2,
    pub mode: CameraMode,
}

impl Camera {
    /// A camera whose top-left corner sits on the world origin.
    pub fn new(screen_w: f32, screen_h: f32) -> Self {
        let viewport = Vec2::new(screen_w, screen_h);
        Self {
            position: viewport / 2.0,
            viewport,
            mode: CameraMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: CameraMode) -> Self {
        self.mode = mode;
        self
    }

    /// Keep the same world centre after a window resize.
    pub fn set_viewport(&mut self, screen_w: f32, screen_h: f32) {
        self.viewport = Vec2::new(screen_w, screen_h);
    }

    /// Move toward the target according to the current mode.
    pub fn update(&mut self, target: Option<Vec2>) {
        let Some(target) = target else { return };
        match self.mode {
            CameraMode::Follow => self.position = target,
            CameraMode::FollowX => self.position.x = target.x,
            CameraMode::Free => {}
        }
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.position + self.viewport / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_is_identity() {
        let camera = Camera::new(1280.0, 720.0);
        assert_eq!(camera.world_to_screen(Vec2::new(200.0, 150.0)), Vec2::new(200.0, 150.0));
        assert_eq!(camera.world_to_screen(Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn test_follow_puts_target_at_screen_centre() {
        let mut camera = Camera::new(1280.0, 720.0);
        let player = Vec2::new(-300.0, 42.0);
        camera.update(Some(player));

        assert_eq!(camera.world_to_screen(player), Vec2::new(640.0, 360.0));
        // An object 10 units right of the player lands 10 px right of centre
        assert_eq!(camera.world_to_screen(player + Vec2::new(10.0, 0.0)), Vec2::new(650.0, 360.0));
    }

    #[test]
    fn test_follow_x_keeps_vertical_position() {
        let mut camera = Camera::new(1600.0, 900.0).with_mode(CameraMode::FollowX);
        camera.update(Some(Vec2::new(500.0, 860.0)));

        assert_eq!(camera.position, Vec2::new(500.0, 450.0));
        // Ground drawn where it was before the camera moved vertically
        assert_eq!(camera.world_to_screen(Vec2::new(500.0, 860.0)).y, 860.0);
    }

    #[test]
    fn test_free_camera_ignores_target() {
        let mut camera = Camera::new(100.0, 100.0).with_mode(CameraMode::Free);
        camera.update(Some(Vec2::new(999.0, 999.0)));
        assert_eq!(camera.position, Vec2::new(50.0, 50.0));

        camera.mode = CameraMode::Follow;
        camera.update(None);
        assert_eq!(camera.position, Vec2::new(50.0, 50.0));
    }

    #[test]
    fn test_resize_keeps_world_centre() {
        let mut camera = Camera::new(1280.0, 720.0);
        camera.update(Some(Vec2::new(1000.0, 500.0)));
        camera.set_viewport(800.0, 600.0);
        assert_eq!(camera.world_to_screen(Vec2::new(1000.0, 500.0)), Vec2::new(400.0, 300.0));
    }
}

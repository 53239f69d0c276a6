//! Axis-aligned rectangle, shared by layout and the runner's hit boxes

/// A rectangle defined by top-left corner and size
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create from screen dimensions
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// A `w` x `h` rectangle horizontally centred on `center_x`
    pub fn centered_x(center_x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(center_x - w * 0.5, y, w, h)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test: rectangles that only share an edge do not
    /// intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Shrink by padding on all sides
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }

    /// Get remaining area after slicing top
    pub fn remaining_after_top(&self, height: f32) -> Self {
        let h = height.min(self.h);
        Self::new(self.x, self.y + h, self.w, self.h - h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersects() {
        let a = Rect::new(0.0, 0.0, 50.0, 60.0);
        assert!(a.intersects(&Rect::new(40.0, 50.0, 30.0, 30.0)));
        assert!(!a.intersects(&Rect::new(100.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 50.0, 60.0);
        assert!(!a.intersects(&Rect::new(50.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 60.0, 10.0, 10.0)));
    }

    #[test]
    fn test_slices() {
        let r = Rect::screen(1280.0, 720.0);
        assert_eq!(r.remaining_after_top(32.0), Rect::new(0.0, 32.0, 1280.0, 688.0));
        assert_eq!(Rect::centered_x(450.0, 230.0, 360.0, 40.0).x, 270.0);
        assert_eq!(r.pad(10.0).right(), 1270.0);
        assert_eq!(Rect::new(0.0, 0.0, 10.0, 40.0).pad(8.0), Rect::new(8.0, 8.0, 0.0, 24.0));
    }
}

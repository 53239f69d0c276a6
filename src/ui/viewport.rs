//! Letter-boxing a fixed logical canvas into the window
//!
//! The runner is laid out on a 900x520 canvas. `Viewport` scales it
//! uniformly to fit the window and centres it, leaving bars on the sides
//! that don't match.

use macroquad::prelude::*;
use super::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Logical canvas size
    pub logical: Vec2,
    /// Screen pixels per logical unit
    pub scale: f32,
    /// Screen position of the canvas origin
    pub offset: Vec2,
}

impl Viewport {
    /// Fit `logical` into `target` (a screen area).
    pub fn fit(logical: Vec2, target: Rect) -> Self {
        let scale = if logical.x > 0.0 && logical.y > 0.0 {
            (target.w / logical.x).min(target.h / logical.y).max(0.0)
        } else {
            1.0
        };
        let size = logical * scale;
        let offset = vec2(
            target.x + (target.w - size.x) * 0.5,
            target.y + (target.h - size.y) * 0.5,
        );
        Self { logical, scale, offset }
    }

    pub fn to_screen(&self, p: Vec2) -> Vec2 {
        self.offset + p * self.scale
    }

    pub fn to_screen_rect(&self, r: Rect) -> Rect {
        let p = self.to_screen(vec2(r.x, r.y));
        Rect::new(p.x, p.y, r.w * self.scale, r.h * self.scale)
    }

    // Drawing in logical units

    pub fn fill_rect(&self, r: Rect, color: Color) {
        let s = self.to_screen_rect(r);
        draw_rectangle(s.x, s.y, s.w, s.h, color);
    }

    /// `y` is the text baseline, as with `draw_text`.
    pub fn text(&self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        let p = self.to_screen(vec2(x, y));
        draw_text(text, p.x, p.y, font_size * self.scale, color);
    }

    /// Text horizontally centred on `center_x`
    pub fn text_centered(&self, text: &str, center_x: f32, y: f32, font_size: f32, color: Color) {
        let width = self.text_width(text, font_size);
        self.text(text, center_x - width * 0.5, y, font_size, color);
    }

    /// Text width in logical units
    pub fn text_width(&self, text: &str, font_size: f32) -> f32 {
        let screen_size = (font_size * self.scale).max(1.0);
        let dims = measure_text(text, None, screen_size as u16, 1.0);
        if self.scale > 0.0 {
            dims.width / self.scale
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_fit() {
        let vp = Viewport::fit(vec2(900.0, 520.0), Rect::screen(900.0, 520.0));
        assert_eq!(vp.scale, 1.0);
        assert_eq!(vp.offset, Vec2::ZERO);
    }

    #[test]
    fn test_wide_window_gets_side_bars() {
        let vp = Viewport::fit(vec2(900.0, 520.0), Rect::screen(2000.0, 1040.0));
        assert_eq!(vp.scale, 2.0);
        assert_eq!(vp.offset, vec2(100.0, 0.0));
        assert_eq!(vp.to_screen(vec2(450.0, 260.0)), vec2(1000.0, 520.0));
    }

    #[test]
    fn test_tall_area_gets_top_and_bottom_bars() {
        let vp = Viewport::fit(vec2(900.0, 520.0), Rect::new(0.0, 32.0, 450.0, 1000.0));
        assert_eq!(vp.scale, 0.5);
        assert_eq!(vp.offset, vec2(0.0, 32.0 + (1000.0 - 260.0) * 0.5));
        let canvas = vp.to_screen_rect(Rect::new(0.0, 0.0, 900.0, 520.0));
        assert_eq!(canvas.w, 450.0);
        assert_eq!(canvas.bottom(), vp.offset.y + 260.0);
    }
}

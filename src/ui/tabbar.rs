//! Lesson tab strip
//!
//! One fixed tab per lesson across the top of the window. Switching is done
//! from the keyboard (F1..F7, Tab / Shift+Tab), so the strip only draws.

use macroquad::prelude::*;
use super::Rect;

/// Visual style for the tab strip
pub mod style {
    use macroquad::prelude::Color;

    pub const BAR_BG: Color = Color::new(0.12, 0.12, 0.14, 1.0);
    pub const TAB_ACTIVE_BG: Color = Color::new(0.18, 0.18, 0.22, 1.0);
    pub const TAB_ACTIVE_TEXT: Color = Color::new(1.0, 1.0, 1.0, 1.0);
    pub const TAB_INACTIVE_TEXT: Color = Color::new(0.6, 0.6, 0.65, 1.0);
    pub const TAB_BORDER: Color = Color::new(0.08, 0.08, 0.10, 1.0);
    /// Active tab indicator
    pub const ACCENT: Color = Color::new(0.0, 0.75, 0.9, 1.0);
}

/// Layout constants
pub mod layout {
    pub const BAR_HEIGHT: f32 = 32.0;
    pub const TAB_PADDING_H: f32 = 16.0;
    pub const INDICATOR_HEIGHT: f32 = 2.0;
    pub const FONT_SIZE: f32 = 18.0;
}

/// Tab label with its function-key hint, e.g. "F3 Abstraction"
pub fn tab_caption(index: usize, label: &str) -> String {
    format!("F{} {}", index + 1, label)
}

/// Draw the strip with `active` highlighted. `status` is right-aligned
/// (FPS readout).
pub fn draw_tab_strip(rect: Rect, labels: &[&str], active: usize, status: &str) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, style::BAR_BG);
    draw_rectangle(rect.x, rect.bottom() - 1.0, rect.w, 1.0, style::TAB_BORDER);

    let mut x = rect.x.round();
    for (i, label) in labels.iter().enumerate() {
        let caption = tab_caption(i, label);
        let dims = measure_text(&caption, None, layout::FONT_SIZE as u16, 1.0);
        let tab_w = (dims.width + layout::TAB_PADDING_H * 2.0).round();
        let is_active = i == active;

        if is_active {
            draw_rectangle(x, rect.y, tab_w, rect.h, style::TAB_ACTIVE_BG);
            draw_rectangle(
                x,
                rect.bottom() - layout::INDICATOR_HEIGHT,
                tab_w,
                layout::INDICATOR_HEIGHT,
                style::ACCENT,
            );
        }
        let color = if is_active { style::TAB_ACTIVE_TEXT } else { style::TAB_INACTIVE_TEXT };
        let text_y = (rect.y + (rect.h + dims.height) * 0.5 - 1.0).round();
        draw_text(&caption, x + layout::TAB_PADDING_H, text_y, layout::FONT_SIZE, color);

        // Separator
        draw_rectangle(x + tab_w - 1.0, rect.y + 6.0, 1.0, rect.h - 12.0, style::TAB_BORDER);
        x += tab_w;
    }

    if !status.is_empty() {
        let dims = measure_text(status, None, layout::FONT_SIZE as u16, 1.0);
        let text_x = rect.right() - dims.width - layout::TAB_PADDING_H;
        let text_y = (rect.y + (rect.h + dims.height) * 0.5 - 1.0).round();
        draw_text(status, text_x.round(), text_y, layout::FONT_SIZE, style::TAB_INACTIVE_TEXT);
    }
}

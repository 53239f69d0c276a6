//! Small drawing helpers shared by the lessons

use macroquad::prelude::*;

pub const DEBUG_FONT_SIZE: f32 = 24.0;
const LINE_SPACING: f32 = 1.2;

/// Draw lines of white debug text, first baseline at (`x`, `y`).
pub fn draw_debug_text(lines: &[&str], x: f32, y: f32) {
    for (i, line) in lines.iter().enumerate() {
        let baseline = y + i as f32 * DEBUG_FONT_SIZE * LINE_SPACING;
        draw_text(line, x, baseline, DEBUG_FONT_SIZE, WHITE);
    }
}

/// Debug readout for a position, e.g. `PlayerX: 1.00  PlayerY: -2.00`
pub fn position_readout(label: &str, position: Vec2) -> String {
    format!("{label}X: {:.2}  {label}Y: {:.2}", position.x, position.y)
}

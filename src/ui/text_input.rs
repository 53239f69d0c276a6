//! Name entry field for the high-score screen
//!
//! Single line, append-only editing (typing and backspace), bounded length,
//! placeholder shown while empty.

use macroquad::prelude::*;
use super::Rect;

/// State for the name entry field
#[derive(Debug, Clone, PartialEq)]
pub struct NameEntry {
    text: String,
    /// Maximum length in characters
    max_len: usize,
    placeholder: &'static str,
    /// Blink timer for the caret
    pub blink_timer: f32,
}

impl NameEntry {
    pub fn new(max_len: usize, placeholder: &'static str) -> Self {
        Self {
            text: String::new(),
            max_len,
            placeholder,
            blink_timer: 0.0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append a printable, non-whitespace character while there is room.
    /// Returns whether it was accepted.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if ch.is_control() || ch.is_whitespace() || self.text.chars().count() >= self.max_len {
            return false;
        }
        self.text.push(ch);
        self.blink_timer = 0.0;
        true
    }

    /// Delete the last character
    pub fn backspace(&mut self) {
        self.text.pop();
        self.blink_timer = 0.0;
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.blink_timer = 0.0;
    }

    /// What to draw: the text, or the placeholder while empty
    pub fn display(&self) -> &str {
        if self.text.is_empty() {
            self.placeholder
        } else {
            &self.text
        }
    }

    /// The name to save: the text, or the placeholder while empty
    pub fn submitted(&self) -> &str {
        self.display()
    }

    pub fn tick(&mut self, dt: f32) {
        self.blink_timer += dt;
    }

    /// Caret visible for the first half of every second
    pub fn caret_visible(&self) -> bool {
        (self.blink_timer % 1.0) < 0.5
    }
}

/// Draw the entry box with its text and a blinking caret.
pub fn draw_name_entry(rect: Rect, entry: &NameEntry, font_size: f32, box_color: Color, text_color: Color) {
    draw_rectangle(rect.x, rect.y, rect.w, rect.h, box_color);

    let inner = rect.pad(8.0);
    let text_x = inner.x + 2.0;
    let baseline = rect.y + (rect.h + font_size * 0.6) * 0.5;
    let color = if entry.is_empty() {
        Color::new(text_color.r, text_color.g, text_color.b, 0.5)
    } else {
        text_color
    };
    draw_text(entry.display(), text_x, baseline, font_size, color);

    if entry.caret_visible() {
        let width = if entry.is_empty() {
            0.0
        } else {
            measure_text(entry.text(), None, font_size as u16, 1.0).width
        };
        let caret_x = text_x + width + 2.0;
        draw_line(caret_x, inner.y, caret_x, inner.bottom(), 2.0, text_color);
    }
}

//! Immediate-mode UI helpers
//!
//! Rectangle layout, the lesson tab strip, the high-score name entry and
//! the letter-box viewport used by the runner. Nothing here keeps state
//! between frames except `NameEntry`.

mod rect;
mod tabbar;
mod text_input;
mod viewport;
mod widgets;

pub use rect::*;
pub use tabbar::*;
pub use text_input::*;
pub use viewport::*;
pub use widgets::*;

//! Input handling
//!
//! Action-based input over keyboard and gamepad, plus the controllers the
//! lessons use to turn input into movement.
//!
//! Native: gilrs for gamepads. WASM: keyboard only.

mod actions;
mod controller;
mod gamepad;
mod state;

pub use actions::*;
pub use controller::{Controller, KeyBindings};
pub use gamepad::{button, Gamepad};
pub use state::*;

#[cfg(test)]
pub(crate) use controller::tests::FakeInput;

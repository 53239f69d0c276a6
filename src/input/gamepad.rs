//! Gamepad support
//!
//! Native: gilrs, first connected pad wins.
//! WASM: no gamepad backend; every query reports "nothing pressed".

use macroquad::prelude::Vec2;

/// Button bit positions (standard Xbox layout)
pub mod button {
    pub const A: u32 = 0;
    pub const B: u32 = 1;
    pub const Y: u32 = 3;
    pub const RB: u32 = 5;
    pub const SELECT: u32 = 8;
    pub const START: u32 = 9;
    pub const DPAD_UP: u32 = 12;
    pub const DPAD_DOWN: u32 = 13;
    pub const DPAD_LEFT: u32 = 14;
    pub const DPAD_RIGHT: u32 = 15;
}

// ============================================================================
// Native Implementation (gilrs)
// ============================================================================

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    use super::*;
    use gilrs::{Axis, Button as GilrsButton, Gilrs};

    pub struct Gamepad {
        gilrs: Option<Gilrs>,
        deadzone: f32,
        buttons: u32,
        last_buttons: u32,
    }

    impl Gamepad {
        pub fn new() -> Self {
            let gilrs = match Gilrs::new() {
                Ok(gilrs) => Some(gilrs),
                Err(e) => {
                    log::warn!("Gamepad support unavailable: {}", e);
                    None
                }
            };
            Self {
                gilrs,
                deadzone: 0.15,
                buttons: 0,
                last_buttons: 0,
            }
        }

        /// Drain gilrs events and latch this frame's button mask.
        pub fn poll(&mut self) {
            if let Some(gilrs) = self.gilrs.as_mut() {
                while gilrs.next_event().is_some() {}
            }
            self.last_buttons = self.buttons;
            self.buttons = self.read_button_mask();
        }

        pub fn has_gamepad(&self) -> bool {
            self.active().is_some()
        }

        fn active(&self) -> Option<gilrs::Gamepad<'_>> {
            self.gilrs.as_ref()?.gamepads().next().map(|(_, gp)| gp)
        }

        fn read_button_mask(&self) -> u32 {
            let Some(gp) = self.active() else { return 0 };
            let mapping = [
                (GilrsButton::South, button::A),
                (GilrsButton::East, button::B),
                (GilrsButton::North, button::Y),
                (GilrsButton::RightTrigger, button::RB),
                (GilrsButton::Select, button::SELECT),
                (GilrsButton::Start, button::START),
                (GilrsButton::DPadUp, button::DPAD_UP),
                (GilrsButton::DPadDown, button::DPAD_DOWN),
                (GilrsButton::DPadLeft, button::DPAD_LEFT),
                (GilrsButton::DPadRight, button::DPAD_RIGHT),
            ];
            mapping
                .iter()
                .filter(|(b, _)| gp.is_pressed(*b))
                .fold(0u32, |mask, (_, bit)| mask | (1u32 << *bit))
        }

        pub fn is_button_down(&self, button: u32) -> bool {
            self.buttons & (1 << button) != 0
        }

        /// Down this frame but not last frame
        pub fn is_button_pressed(&self, button: u32) -> bool {
            let bit = 1 << button;
            self.buttons & bit != 0 && self.last_buttons & bit == 0
        }

        /// Left stick with y pointing down (screen convention)
        pub fn left_stick(&self) -> Vec2 {
            let Some(gp) = self.active() else { return Vec2::ZERO };
            let x = gp.value(Axis::LeftStickX);
            let y = -gp.value(Axis::LeftStickY);
            apply_deadzone(x, y, self.deadzone)
        }
    }
}

// ============================================================================
// WASM Implementation (no backend)
// ============================================================================

#[cfg(target_arch = "wasm32")]
mod platform {
    use super::*;

    pub struct Gamepad;

    impl Gamepad {
        pub fn new() -> Self {
            Gamepad
        }

        pub fn poll(&mut self) {}

        pub fn has_gamepad(&self) -> bool {
            false
        }

        pub fn is_button_down(&self, _button: u32) -> bool {
            false
        }

        pub fn is_button_pressed(&self, _button: u32) -> bool {
            false
        }

        pub fn left_stick(&self) -> Vec2 {
            Vec2::ZERO
        }
    }
}

impl Default for Gamepad {
    fn default() -> Self {
        Self::new()
    }
}

/// Radial deadzone with linear rescaling
pub(crate) fn apply_deadzone(x: f32, y: f32, deadzone: f32) -> Vec2 {
    let len = (x * x + y * y).sqrt();
    if len < deadzone {
        return Vec2::ZERO;
    }
    // Rescale deadzone..1.0 to 0.0..1.0
    let scale = (len - deadzone) / (1.0 - deadzone) / len;
    Vec2::new(x * scale, y * scale)
}

pub use platform::Gamepad;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deadzone_swallows_small_input() {
        assert_eq!(apply_deadzone(0.1, 0.05, 0.15), Vec2::ZERO);
    }

    #[test]
    fn test_deadzone_rescales_full_tilt() {
        let v = apply_deadzone(1.0, 0.0, 0.15);
        assert!((v.x - 1.0).abs() < 1e-6);
        assert_eq!(v.y, 0.0);
    }
}

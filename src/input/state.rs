//! Input state management
//!
//! Polls keyboard (macroquad) and gamepad once per frame and answers
//! action queries from either source.

use std::collections::HashSet;

use macroquad::prelude::*;
use super::{button, Action, ActionSource, Gamepad};

/// Stick deflection that counts as a held direction
const STICK_THRESHOLD: f32 = 0.5;

/// The set of keys held during one frame.
///
/// Early lessons read raw keys (arrow keys, custom bindings) rather than
/// actions; they get this snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeySnapshot {
    down: HashSet<KeyCode>,
}

impl KeySnapshot {
    pub fn from_keys(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            down: keys.into_iter().collect(),
        }
    }

    pub fn is_down(&self, key: KeyCode) -> bool {
        self.down.contains(&key)
    }
}

/// Unified input state: keyboard plus the first connected gamepad
pub struct InputState {
    gamepad: Gamepad,
    keys: KeySnapshot,
}

impl InputState {
    pub fn new() -> Self {
        let gamepad = Gamepad::new();
        if gamepad.has_gamepad() {
            log::info!("Gamepad connected");
        }
        Self {
            gamepad,
            keys: KeySnapshot::default(),
        }
    }

    /// Call once per frame before any queries
    pub fn poll(&mut self) {
        self.gamepad.poll();
        self.keys = KeySnapshot::from_keys(get_keys_down());
    }

    /// Raw keys held this frame
    pub fn keys(&self) -> &KeySnapshot {
        &self.keys
    }

    /// Characters typed this frame, in order
    pub fn typed_chars(&self) -> Vec<char> {
        std::iter::from_fn(get_char_pressed).collect()
    }

    fn keyboard_down(&self, action: Action) -> bool {
        let any = |keys: &[KeyCode]| keys.iter().any(|k| self.keys.is_down(*k));
        match action {
            Action::MoveUp => any(&[KeyCode::Up, KeyCode::W]),
            Action::MoveDown => any(&[KeyCode::Down, KeyCode::S]),
            Action::MoveLeft => any(&[KeyCode::Left, KeyCode::A]),
            Action::MoveRight => any(&[KeyCode::Right, KeyCode::D]),
            Action::Brake => any(&[KeyCode::LeftShift, KeyCode::RightShift]),
            Action::Jump => any(&[KeyCode::Space, KeyCode::Up]),
            Action::Confirm => any(&[KeyCode::Enter, KeyCode::KpEnter]),
            Action::Back => any(&[KeyCode::Escape]),
            Action::Restart => any(&[KeyCode::R]),
            Action::ToggleFullscreen => any(&[KeyCode::F11]),
        }
    }

    fn keyboard_pressed(&self, action: Action) -> bool {
        let any = |keys: &[KeyCode]| keys.iter().any(|k| is_key_pressed(*k));
        match action {
            Action::MoveUp => any(&[KeyCode::Up, KeyCode::W]),
            Action::MoveDown => any(&[KeyCode::Down, KeyCode::S]),
            Action::MoveLeft => any(&[KeyCode::Left, KeyCode::A]),
            Action::MoveRight => any(&[KeyCode::Right, KeyCode::D]),
            Action::Brake => any(&[KeyCode::LeftShift, KeyCode::RightShift]),
            Action::Jump => any(&[KeyCode::Space, KeyCode::Up]),
            Action::Confirm => any(&[KeyCode::Enter, KeyCode::KpEnter]),
            Action::Back => any(&[KeyCode::Escape]),
            Action::Restart => any(&[KeyCode::R]),
            Action::ToggleFullscreen => any(&[KeyCode::F11]),
        }
    }

    fn gamepad_down(&self, action: Action) -> bool {
        let gp = &self.gamepad;
        let stick = gp.left_stick();
        match action {
            Action::MoveUp => gp.is_button_down(button::DPAD_UP) || stick.y < -STICK_THRESHOLD,
            Action::MoveDown => gp.is_button_down(button::DPAD_DOWN) || stick.y > STICK_THRESHOLD,
            Action::MoveLeft => gp.is_button_down(button::DPAD_LEFT) || stick.x < -STICK_THRESHOLD,
            Action::MoveRight => gp.is_button_down(button::DPAD_RIGHT) || stick.x > STICK_THRESHOLD,
            Action::Brake => gp.is_button_down(button::RB),
            Action::Jump => gp.is_button_down(button::A),
            Action::Confirm => gp.is_button_down(button::A) || gp.is_button_down(button::START),
            Action::Back => gp.is_button_down(button::B),
            Action::Restart => gp.is_button_down(button::Y),
            Action::ToggleFullscreen => gp.is_button_down(button::SELECT),
        }
    }

    fn gamepad_pressed(&self, action: Action) -> bool {
        let gp = &self.gamepad;
        match action {
            Action::MoveUp => gp.is_button_pressed(button::DPAD_UP),
            Action::MoveDown => gp.is_button_pressed(button::DPAD_DOWN),
            Action::MoveLeft => gp.is_button_pressed(button::DPAD_LEFT),
            Action::MoveRight => gp.is_button_pressed(button::DPAD_RIGHT),
            Action::Brake => gp.is_button_pressed(button::RB),
            Action::Jump => gp.is_button_pressed(button::A),
            Action::Confirm => gp.is_button_pressed(button::A) || gp.is_button_pressed(button::START),
            Action::Back => gp.is_button_pressed(button::B),
            Action::Restart => gp.is_button_pressed(button::Y),
            Action::ToggleFullscreen => gp.is_button_pressed(button::SELECT),
        }
    }
}

impl ActionSource for InputState {
    fn action_down(&self, action: Action) -> bool {
        self.keyboard_down(action) || self.gamepad_down(action)
    }

    fn action_pressed(&self, action: Action) -> bool {
        self.keyboard_pressed(action) || self.gamepad_pressed(action)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_snapshot() {
        let keys = KeySnapshot::from_keys([KeyCode::Left, KeyCode::W]);
        assert!(keys.is_down(KeyCode::Left));
        assert!(keys.is_down(KeyCode::W));
        assert!(!keys.is_down(KeyCode::Right));
        assert!(!KeySnapshot::default().is_down(KeyCode::Left));
    }
}

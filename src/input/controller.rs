//! Player controllers
//!
//! `Controller` turns actions into four direction flags (plus brake) once per
//! frame, so movement code never touches input devices. `KeyBindings` is the
//! simpler raw-key version: four configurable keys and a speed.

use macroquad::prelude::{KeyCode, Vec2};
use super::{Action, ActionSource, KeySnapshot};

/// Direction flags latched from input each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controller {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub brake: bool,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh all flags from the current input.
    pub fn update(&mut self, input: &impl ActionSource) {
        self.left = input.action_down(Action::MoveLeft);
        self.right = input.action_down(Action::MoveRight);
        self.up = input.action_down(Action::MoveUp);
        self.down = input.action_down(Action::MoveDown);
        self.brake = input.action_down(Action::Brake);
    }

    /// `(right - left, down - up)`, each component in -1..=1.
    /// Screen space: +y points down.
    pub fn axis(&self) -> Vec2 {
        let flag = |b: bool| if b { 1.0 } else { 0.0 };
        Vec2::new(
            flag(self.right) - flag(self.left),
            flag(self.down) - flag(self.up),
        )
    }
}

/// Four keys mapped to movement, with their own speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyBindings {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    /// Units per frame; set by whoever owns the controller
    pub speed: f32,
}

impl KeyBindings {
    pub fn arrows() -> Self {
        Self {
            up: KeyCode::Up,
            down: KeyCode::Down,
            left: KeyCode::Left,
            right: KeyCode::Right,
            speed: 0.0,
        }
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    /// Displacement for this frame. Opposite keys cancel out.
    pub fn movement(&self, keys: &KeySnapshot, dt: f32) -> Vec2 {
        let mut delta = Vec2::ZERO;
        let step = self.speed * dt;
        if keys.is_down(self.up) {
            delta.y -= step;
        }
        if keys.is_down(self.down) {
            delta.y += step;
        }
        if keys.is_down(self.left) {
            delta.x -= step;
        }
        if keys.is_down(self.right) {
            delta.x += step;
        }
        delta
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::arrows()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Scripted input for tests: a set of held and a set of just-pressed actions.
    #[derive(Default)]
    pub(crate) struct FakeInput {
        pub down: HashSet<Action>,
        pub pressed: HashSet<Action>,
    }

    impl FakeInput {
        pub fn holding(actions: &[Action]) -> Self {
            Self {
                down: actions.iter().copied().collect(),
                pressed: HashSet::new(),
            }
        }

        pub fn pressing(actions: &[Action]) -> Self {
            Self {
                down: actions.iter().copied().collect(),
                pressed: actions.iter().copied().collect(),
            }
        }
    }

    impl ActionSource for FakeInput {
        fn action_down(&self, action: Action) -> bool {
            self.down.contains(&action)
        }

        fn action_pressed(&self, action: Action) -> bool {
            self.pressed.contains(&action)
        }
    }

    #[test]
    fn test_controller_latches_flags() {
        let mut controller = Controller::new();
        controller.update(&FakeInput::holding(&[Action::MoveLeft, Action::MoveUp, Action::Brake]));

        assert!(controller.left && controller.up && controller.brake);
        assert!(!controller.right && !controller.down);
        assert_eq!(controller.axis(), Vec2::new(-1.0, -1.0));

        controller.update(&FakeInput::default());
        assert_eq!(controller, Controller::default());
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let mut controller = Controller::new();
        controller.update(&FakeInput::holding(&[Action::MoveLeft, Action::MoveRight]));
        assert_eq!(controller.axis(), Vec2::ZERO);
    }

    #[test]
    fn test_key_bindings_movement() {
        let mut bindings = KeyBindings::arrows();
        bindings.set_speed(2.0);

        let keys = KeySnapshot::from_keys([KeyCode::Right, KeyCode::Up]);
        assert_eq!(bindings.movement(&keys, 0.5), Vec2::new(1.0, -1.0));

        // WASD is not bound by default
        let keys = KeySnapshot::from_keys([KeyCode::D]);
        assert_eq!(bindings.movement(&keys, 1.0), Vec2::ZERO);
    }

    #[test]
    fn test_custom_bindings() {
        let mut bindings = KeyBindings {
            up: KeyCode::I,
            down: KeyCode::K,
            left: KeyCode::J,
            right: KeyCode::L,
            speed: 0.0,
        };
        bindings.set_speed(3.0);
        let keys = KeySnapshot::from_keys([KeyCode::K]);
        assert_eq!(bindings.movement(&keys, 1.0), Vec2::new(0.0, 3.0));
    }
}

//! Game action definitions
//!
//! Lessons ask for actions, not keys, so the same code works with the
//! keyboard and a gamepad:
//!
//! | Action           | Keyboard              | Gamepad (Xbox names) |
//! |------------------|-----------------------|----------------------|
//! | MoveUp/Down/...  | Arrows or WASD        | Left stick / D-pad   |
//! | Brake            | Left/Right Shift      | RB                   |
//! | Jump             | Space or Up           | A                    |
//! | Confirm          | Enter                 | A / Start            |
//! | Back             | Escape                | B                    |
//! | Restart          | R                     | Y                    |
//! | ToggleFullscreen | F11                   | Select               |

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    /// Damp velocity (thrust lessons)
    Brake,
    Jump,

    Confirm,
    Back,
    Restart,
    ToggleFullscreen,
}

/// Anything that can answer "is this action held / was it just pressed".
///
/// Implemented by `InputState` for live input; tests provide their own.
pub trait ActionSource {
    /// Held down this frame
    fn action_down(&self, action: Action) -> bool;

    /// Went down this frame
    fn action_pressed(&self, action: Action) -> bool;
}

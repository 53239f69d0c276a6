//! Application state and lesson management
//!
//! Fixed set of lessons, each with its own persistent state.
//! Switch with F1..F7 or Tab / Shift+Tab; all lessons stay alive in the
//! background.

use macroquad::prelude::Vec2;
use serde::{Deserialize, Serialize};
use crate::config::Settings;
use crate::input::InputState;
use crate::lessons::{
    AbstractionLesson, GravityLesson, MovingLesson, OrbitLesson, PlatformerLesson, TemplateLesson,
};
use crate::runner::RunnerGame;
use crate::storage::ScoreStore;

/// The available lessons (fixed set, one tab each)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lesson {
    Template = 0,
    Moving = 1,
    Abstraction = 2,
    Orbit = 3,
    Gravity = 4,
    Platformer = 5,
    Runner = 6,
}

impl Lesson {
    pub const ALL: [Lesson; 7] = [
        Lesson::Template,
        Lesson::Moving,
        Lesson::Abstraction,
        Lesson::Orbit,
        Lesson::Gravity,
        Lesson::Platformer,
        Lesson::Runner,
    ];

    /// Get the display label for this lesson
    pub fn label(&self) -> &'static str {
        match self {
            Lesson::Template => "Template",
            Lesson::Moving => "Moving",
            Lesson::Abstraction => "Abstraction",
            Lesson::Orbit => "Orbit",
            Lesson::Gravity => "Gravity",
            Lesson::Platformer => "Platformer",
            Lesson::Runner => "Runner",
        }
    }

    /// Get all lesson labels (for the tab strip)
    pub fn labels() -> [&'static str; 7] {
        Lesson::ALL.map(|l| l.label())
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(i: usize) -> Option<Lesson> {
        Lesson::ALL.get(i).copied()
    }

    /// Next tab, wrapping around
    pub fn next(self) -> Self {
        Lesson::ALL[(self.index() + 1) % Lesson::ALL.len()]
    }

    /// Previous tab, wrapping around
    pub fn prev(self) -> Self {
        Lesson::ALL[(self.index() + Lesson::ALL.len() - 1) % Lesson::ALL.len()]
    }
}

/// FPS limit setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FpsLimit {
    Fps30,
    /// The rate the lessons are tuned for
    #[default]
    Fps60,
    /// As fast as possible
    Unlocked,
}

impl FpsLimit {
    /// Get the target frame time in seconds (None = unlocked)
    pub fn frame_time(&self) -> Option<f64> {
        match self {
            FpsLimit::Fps30 => Some(1.0 / 30.0),
            FpsLimit::Fps60 => Some(1.0 / 60.0),
            FpsLimit::Unlocked => None,
        }
    }

    /// Cycle to next value
    pub fn next(self) -> Self {
        match self {
            FpsLimit::Fps30 => FpsLimit::Fps60,
            FpsLimit::Fps60 => FpsLimit::Unlocked,
            FpsLimit::Unlocked => FpsLimit::Fps30,
        }
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            FpsLimit::Fps30 => "30",
            FpsLimit::Fps60 => "60",
            FpsLimit::Unlocked => "Unlocked",
        }
    }
}

/// Main application state containing all lesson states
pub struct AppState {
    /// Currently active lesson
    pub active: Lesson,

    pub settings: Settings,
    pub fps_limit: FpsLimit,

    pub template: TemplateLesson,
    pub moving: MovingLesson,
    pub abstraction: AbstractionLesson,
    pub orbit: OrbitLesson,
    pub gravity: GravityLesson,
    pub platformer: PlatformerLesson,
    pub runner: RunnerGame,

    /// Unified input state (keyboard + gamepad)
    pub input: InputState,
}

impl AppState {
    pub fn new(settings: Settings, store: Option<ScoreStore>, screen: Vec2) -> Self {
        Self {
            active: Lesson::Template,
            fps_limit: settings.fps_limit,
            template: TemplateLesson::new(),
            moving: MovingLesson::new(settings.lessons.step),
            abstraction: AbstractionLesson::new(settings.lessons.abstraction_speed, screen),
            orbit: OrbitLesson::new(&settings.lessons, &settings.physics, screen),
            gravity: GravityLesson::new(&settings.physics, screen),
            platformer: PlatformerLesson::new(&settings.platformer, screen),
            runner: RunnerGame::new(settings.runner.clone(), store),
            input: InputState::new(),
            settings,
        }
    }

    /// Switch to a different lesson
    pub fn set_active(&mut self, lesson: Lesson) {
        if lesson != self.active {
            log::info!("Switched to lesson {}", lesson.label());
            self.active = lesson;
        }
    }
}

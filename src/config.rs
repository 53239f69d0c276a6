//! User settings
//!
//! Tuning values for every lesson, stored as RON in the user data dir.
//! Every section is `#[serde(default)]`: a file only needs the values it
//! changes, and keys added in later versions fall back to their defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use crate::app::FpsLimit;
use crate::runner::RunnerSettings;
use crate::storage::{user_data_dir, StorageError};

/// Settings file name inside the user data dir
pub const SETTINGS_FILE: &str = "settings.ron";

/// Error type for settings loading and saving
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

/// Movement speeds for the first lessons (units per 60 Hz frame)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonSettings {
    /// Raw arrow-key stepping in "Moving in the World"
    pub step: f32,
    /// `KeyBindings` speed in "Abstraction"
    pub abstraction_speed: f32,
    /// Direct-movement player speed in "Orbit"
    pub move_speed: f32,
}

impl Default for LessonSettings {
    fn default() -> Self {
        Self {
            step: 1.0,
            abstraction_speed: 1.0,
            move_speed: 3.0,
        }
    }
}

/// Gravity playground tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    pub gravity_constant: f32,
    pub thrust: f32,
    pub brake: f32,
    pub player_radius: f32,
    pub player_mass: f32,
    pub planet_radius: f32,
    pub planet_mass: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity_constant: 0.5,
            thrust: 0.1,
            brake: 0.92,
            player_radius: 10.0,
            player_mass: 1.0,
            planet_radius: 40.0,
            planet_mass: 5000.0,
        }
    }
}

/// Side-scroller tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformerSettings {
    pub gravity: f32,
    pub jump_strength: f32,
    pub run_speed: f32,
    pub radius: f32,
    /// Ground sits this far above the bottom of the screen
    pub ground_margin: f32,
}

impl Default for PlatformerSettings {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            jump_strength: -10.0,
            run_speed: 2.0,
            radius: 10.0,
            ground_margin: 40.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub fps_limit: FpsLimit,
    pub lessons: LessonSettings,
    pub physics: PhysicsSettings,
    pub platformer: PlatformerSettings,
    pub runner: RunnerSettings,
}

impl Settings {
    /// `settings.ron` in the user data dir
    pub fn default_path() -> Result<PathBuf, StorageError> {
        Ok(user_data_dir()?.join(SETTINGS_FILE))
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(ron::from_str(&contents)?)
    }

    /// Load, falling back to defaults when the file is missing or broken.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings.sanitized()
            }
            Err(e) => {
                log::warn!("Could not load {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Same settings with out-of-range values repaired
    pub fn sanitized(self) -> Self {
        let runner = self.runner.sanitized();
        if runner != self.runner {
            log::warn!("Runner settings had invalid ranges; repaired");
        }
        Self { runner, ..self }
    }

    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let config = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .indentor("  ".to_string());
        let contents = ron::ser::to_string_pretty(self, config)?;
        std::fs::write(path, contents)?;
        Ok(())
    }
}

//! Endless runner tuning
//!
//! All distances are in logical pixels of the 900x520 runner canvas;
//! velocities are per 60 Hz frame.

use serde::{Deserialize, Serialize};

/// Runner colours as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: [u8; 3],
    pub ground: [u8; 3],
    pub stripe: [u8; 3],
    pub player: [u8; 3],
    pub obstacle: [u8; 3],
    pub text: [u8; 3],
    pub accent: [u8; 3],
    pub game_over: [u8; 3],
    pub entry_box: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [22, 22, 28],
            ground: [40, 40, 55],
            stripe: [55, 55, 75],
            player: [240, 240, 255],
            obstacle: [90, 210, 140],
            text: [230, 233, 240],
            accent: [255, 209, 102],
            game_over: [255, 120, 120],
            entry_box: [70, 70, 95],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerSettings {
    // Canvas
    pub width: f32,
    pub height: f32,
    /// Ground sits this far above the bottom edge
    pub ground_offset: f32,

    // Player
    pub player_x: f32,
    pub player_w: f32,
    pub player_h: f32,
    pub jump_velocity: f32,
    pub gravity: f32,

    // Difficulty
    pub base_speed: f32,
    /// Seconds between spawn attempts at top speed
    pub spawn_cooldown_min: f32,
    /// Seconds between spawn attempts at base speed
    pub spawn_cooldown_max: f32,

    // Obstacles
    pub obstacle_min_w: u32,
    pub obstacle_max_w: u32,
    pub obstacle_min_h: u32,
    pub obstacle_max_h: u32,
    /// Free space wanted after the rightmost obstacle before another spawns
    pub obstacle_gap: f32,
    pub obstacle_gap_floor: f32,
    /// Gap shrink per unit of speed
    pub gap_per_speed: f32,
    /// New obstacles appear up to this far past the right edge
    pub spawn_jitter: u32,

    // Scoring
    pub name_limit: usize,
    pub top_scores: usize,
    /// Distance units per point
    pub distance_per_point: f32,

    pub palette: Palette,
}

impl RunnerSettings {
    pub fn ground_y(&self) -> f32 {
        self.height - self.ground_offset
    }

    /// Top edge of a player standing on the ground
    pub fn player_rest_y(&self) -> f32 {
        self.ground_y() - self.player_h
    }

    /// Copy with inverted ranges swapped and divisors kept positive, so a
    /// hand-edited file cannot break spawning or scoring.
    pub fn sanitized(&self) -> Self {
        let mut s = self.clone();
        fn order<T: PartialOrd>(min: &mut T, max: &mut T) {
            if *min > *max {
                std::mem::swap(min, max);
            }
        }
        order(&mut s.obstacle_min_w, &mut s.obstacle_max_w);
        order(&mut s.obstacle_min_h, &mut s.obstacle_max_h);
        order(&mut s.spawn_cooldown_min, &mut s.spawn_cooldown_max);
        if s.distance_per_point.is_nan() || s.distance_per_point <= 0.0 {
            s.distance_per_point = Self::default().distance_per_point;
        }
        s
    }
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 520.0,
            ground_offset: 80.0,

            player_x: 120.0,
            player_w: 50.0,
            player_h: 60.0,
            jump_velocity: -15.0,
            gravity: 0.8,

            base_speed: 7.0,
            spawn_cooldown_min: 0.65,
            spawn_cooldown_max: 1.4,

            obstacle_min_w: 30,
            obstacle_max_w: 60,
            obstacle_min_h: 30,
            obstacle_max_h: 80,
            obstacle_gap: 220.0,
            obstacle_gap_floor: 140.0,
            gap_per_speed: 6.0,
            spawn_jitter: 60,

            name_limit: 16,
            top_scores: 5,
            distance_per_point: 5.0,

            palette: Palette::default(),
        }
    }
}

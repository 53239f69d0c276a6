//! Runner world: scrolling, difficulty and obstacle spawning
//!
//! Speed grows with the square root of distance travelled. The spawner runs
//! on a cooldown that shortens as speed rises, and only places an obstacle
//! when the previous ones have cleared enough room at the right edge.

use rand::{rngs::StdRng, Rng, SeedableRng};
use super::entities::Obstacle;
use super::RunnerSettings;

/// Ground stripe spacing; the scroll offset wraps at this
pub const STRIPE_SPACING: f32 = 40.0;

/// Obstacles are dropped once fully past this x
const DESPAWN_X: f32 = -10.0;

pub struct RunnerWorld {
    settings: RunnerSettings,
    pub obstacles: Vec<Obstacle>,
    pub distance: f32,
    /// Ground stripe scroll, in `0..STRIPE_SPACING`
    pub stripe_offset: f32,
    pub time_since_spawn: f32,
    rng: StdRng,
}

impl RunnerWorld {
    pub fn new(settings: RunnerSettings) -> Self {
        Self::with_rng(settings, StdRng::from_entropy())
    }

    /// Deterministic spawns.
    #[cfg(test)]
    pub fn with_seed(settings: RunnerSettings, seed: u64) -> Self {
        Self::with_rng(settings, StdRng::seed_from_u64(seed))
    }

    fn with_rng(settings: RunnerSettings, rng: StdRng) -> Self {
        Self {
            settings,
            obstacles: Vec::new(),
            distance: 0.0,
            stripe_offset: 0.0,
            time_since_spawn: 0.0,
            rng,
        }
    }

    pub fn settings(&self) -> &RunnerSettings {
        &self.settings
    }

    /// Clear obstacles and distance. Stripe scroll carries on.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.distance = 0.0;
        self.time_since_spawn = 0.0;
    }

    // =========================================================================
    // Difficulty
    // =========================================================================

    /// Scroll speed in pixels per 60 Hz frame
    pub fn current_speed(&self) -> f32 {
        self.settings.base_speed + 1.5 * (self.distance.max(0.0) / 300.0).sqrt()
    }

    /// Seconds between spawn attempts: max at base speed, easing to min
    /// at base + 8.
    pub fn spawn_cooldown(&self, speed: f32) -> f32 {
        let s = &self.settings;
        let t = ((speed - s.base_speed) / 8.0).clamp(0.0, 1.0);
        s.spawn_cooldown_max * (1.0 - t) + s.spawn_cooldown_min * t
    }

    /// Free space wanted after the rightmost obstacle
    pub fn desired_gap(&self, speed: f32) -> f32 {
        let s = &self.settings;
        (s.obstacle_gap - speed * s.gap_per_speed).max(s.obstacle_gap_floor)
    }

    /// Try to place one obstacle just past the right edge. Returns whether
    /// one was placed.
    pub fn maybe_spawn(&mut self, speed: f32) -> bool {
        let s = &self.settings;
        let w = self.rng.gen_range(s.obstacle_min_w..=s.obstacle_max_w) as f32;
        let h = self.rng.gen_range(s.obstacle_min_h..=s.obstacle_max_h) as f32;

        let rightmost = self
            .obstacles
            .iter()
            .map(Obstacle::right)
            .fold(None, |acc: Option<f32>, r| Some(acc.map_or(r, |a| a.max(r))))
            .unwrap_or(0.0);

        if rightmost < s.width - self.desired_gap(speed) {
            let x = s.width + self.rng.gen_range(0..=s.spawn_jitter) as f32;
            self.obstacles.push(Obstacle::new(x, w, h));
            true
        } else {
            false
        }
    }

    // =========================================================================
    // Update loops
    // =========================================================================

    /// One playing frame. `dt` in seconds.
    pub fn update_play(&mut self, dt: f32) {
        let frames = dt * 60.0;
        let speed = self.current_speed();
        self.distance += speed * frames;

        for ob in &mut self.obstacles {
            ob.advance(speed * frames);
        }
        self.obstacles.retain(|ob| ob.right() > DESPAWN_X);

        self.time_since_spawn += dt;
        if self.time_since_spawn >= self.spawn_cooldown(speed) {
            self.maybe_spawn(speed);
            self.time_since_spawn = 0.0;
        }

        self.stripe_offset = (self.stripe_offset + speed * frames) % STRIPE_SPACING;
    }

    /// Idle menu frame: nothing spawns or moves, only the stripes drift.
    pub fn update_menu(&mut self, dt: f32) {
        self.reset();
        let frames = dt * 60.0;
        self.stripe_offset = (self.stripe_offset + self.settings.base_speed * 0.6 * frames) % STRIPE_SPACING;
    }

    pub fn score(&self) -> u32 {
        (self.distance / self.settings.distance_per_point).floor().max(0.0) as u32
    }
}

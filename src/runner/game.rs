//! Runner state machine
//!
//! ```text
//!   Menu --Jump--> Play --hit--> GameOver --Enter (save)--> Menu
//!    |              |               |  R --> Play
//!   Esc: quit     Esc: Menu        Esc: Menu (no save)
//! ```
//!
//! Input arrives as `RunnerKey`s so the machine can be driven from tests.
//! At most one state change happens per frame, which keeps a gamepad button
//! bound to two keys (A is Jump and Confirm) from skipping a screen.

use crate::input::{Action, ActionSource};
use crate::storage::{ScoreEntry, ScoreStore};
use crate::ui::NameEntry;
use super::entities::Runner;
use super::world::RunnerWorld;
use super::RunnerSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    Menu,
    Play,
    GameOver,
}

/// Key events the runner reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerKey {
    Jump,
    Confirm,
    Backspace,
    Restart,
    Escape,
    /// A typed character (name entry)
    Char(char),
}

/// What the app should do after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerCommand {
    None,
    Quit,
}

/// Turn this frame's input into runner keys, in handling order.
///
/// Name edits come before any key that can change state, so letters typed
/// in the same frame as Enter still land in the saved name. `R` typed as a
/// character is dropped: the key already means Restart.
pub fn collect_keys(input: &impl ActionSource, backspace: bool, typed: &[char]) -> Vec<RunnerKey> {
    let mut keys = Vec::new();
    if input.action_pressed(Action::Back) {
        keys.push(RunnerKey::Escape);
    }
    if backspace {
        keys.push(RunnerKey::Backspace);
    }
    keys.extend(
        typed
            .iter()
            .filter(|c| !matches!(c, 'r' | 'R'))
            .map(|&c| RunnerKey::Char(c)),
    );
    if input.action_pressed(Action::Confirm) {
        keys.push(RunnerKey::Confirm);
    }
    if input.action_pressed(Action::Restart) {
        keys.push(RunnerKey::Restart);
    }
    if input.action_pressed(Action::Jump) {
        keys.push(RunnerKey::Jump);
    }
    keys
}

pub struct RunnerGame {
    settings: RunnerSettings,
    pub world: RunnerWorld,
    pub player: Runner,
    state: RunnerState,
    pub name: NameEntry,
    game_over_score: u32,

    /// None when the database could not be opened; scores are then not kept
    store: Option<ScoreStore>,
    best: u32,
    leaderboard: Vec<ScoreEntry>,
}

impl RunnerGame {
    pub fn new(settings: RunnerSettings, store: Option<ScoreStore>) -> Self {
        let world = RunnerWorld::new(settings.clone());
        Self::with_world(settings, world, store)
    }

    pub fn with_world(settings: RunnerSettings, world: RunnerWorld, store: Option<ScoreStore>) -> Self {
        let mut game = Self {
            player: Runner::new(&settings),
            name: NameEntry::new(settings.name_limit, crate::storage::scores::DEFAULT_PLAYER),
            settings,
            world,
            state: RunnerState::Menu,
            game_over_score: 0,
            store,
            best: 0,
            leaderboard: Vec::new(),
        };
        game.refresh_leaderboard();
        game
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    pub fn settings(&self) -> &RunnerSettings {
        &self.settings
    }

    /// Score of the run that just ended
    pub fn game_over_score(&self) -> u32 {
        self.game_over_score
    }

    /// Live score of the current run
    pub fn score(&self) -> u32 {
        self.world.score()
    }

    pub fn best_score(&self) -> u32 {
        self.best
    }

    pub fn leaderboard(&self) -> &[ScoreEntry] {
        &self.leaderboard
    }

    /// Re-read best and top scores from the database.
    pub fn refresh_leaderboard(&mut self) {
        let Some(store) = &self.store else { return };
        self.best = store.best_score().unwrap_or_else(|e| {
            log::warn!("Could not read best score: {}", e);
            0
        });
        self.leaderboard = store.top_scores(self.settings.top_scores).unwrap_or_else(|e| {
            log::warn!("Could not read top scores: {}", e);
            Vec::new()
        });
    }

    fn reset_run(&mut self) {
        self.world.reset();
        self.player = Runner::new(&self.settings);
        self.game_over_score = 0;
    }

    fn start_run(&mut self) {
        self.reset_run();
        self.state = RunnerState::Play;
        log::info!("Run started");
    }

    fn to_menu(&mut self) {
        self.reset_run();
        self.state = RunnerState::Menu;
    }

    fn save_score(&mut self) {
        let Some(store) = &self.store else {
            log::warn!("No score database, score {} not saved", self.game_over_score);
            return;
        };
        if let Err(e) = store.add_score(self.name.submitted(), self.game_over_score) {
            log::warn!("Could not save score: {}", e);
        }
        self.refresh_leaderboard();
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle keys in order, stopping after the first state change.
    pub fn handle_keys(&mut self, keys: &[RunnerKey]) -> RunnerCommand {
        let before = self.state;
        for &key in keys {
            if self.handle_key(key) == RunnerCommand::Quit {
                return RunnerCommand::Quit;
            }
            if self.state != before {
                break;
            }
        }
        RunnerCommand::None
    }

    pub fn handle_key(&mut self, key: RunnerKey) -> RunnerCommand {
        match self.state {
            RunnerState::Menu => match key {
                RunnerKey::Jump => self.start_run(),
                RunnerKey::Escape => return RunnerCommand::Quit,
                _ => {}
            },
            RunnerState::Play => match key {
                RunnerKey::Jump => self.player.jump(&self.settings),
                RunnerKey::Escape => self.to_menu(),
                _ => {}
            },
            RunnerState::GameOver => match key {
                RunnerKey::Confirm => {
                    self.save_score();
                    self.to_menu();
                }
                RunnerKey::Backspace => self.name.backspace(),
                RunnerKey::Restart => self.start_run(),
                RunnerKey::Escape => self.to_menu(),
                RunnerKey::Char(c) => {
                    self.name.insert_char(c);
                }
                RunnerKey::Jump => {}
            },
        }
        RunnerCommand::None
    }

    // =========================================================================
    // Update
    // =========================================================================

    /// Advance one frame. `dt` in seconds.
    pub fn update(&mut self, dt: f32) {
        match self.state {
            RunnerState::Menu => {
                self.player.settle(&self.settings);
                self.world.update_menu(dt);
            }
            RunnerState::Play => self.update_play(dt),
            RunnerState::GameOver => self.name.tick(dt),
        }
    }

    fn update_play(&mut self, dt: f32) {
        self.player.update(&self.settings, dt * 60.0);
        self.world.update_play(dt);

        let ground_y = self.settings.ground_y();
        let player_rect = self.player.rect(&self.settings);
        let hit = self
            .world
            .obstacles
            .iter()
            .any(|ob| player_rect.intersects(&ob.rect(ground_y)));

        if hit {
            self.game_over_score = self.world.score();
            self.name.clear();
            self.state = RunnerState::GameOver;
            log::info!("Run ended with score {}", self.game_over_score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::FakeInput;
    use crate::runner::entities::Obstacle;
    use tempfile::TempDir;

    const FRAME: f32 = 1.0 / 60.0;

    fn game(store: Option<ScoreStore>) -> RunnerGame {
        let settings = RunnerSettings::default();
        let world = RunnerWorld::with_seed(settings.clone(), 42);
        RunnerGame::with_world(settings, world, store)
    }

    fn temp_store() -> (TempDir, ScoreStore) {
        let dir = TempDir::new().unwrap();
        let store = ScoreStore::open(dir.path().join("scores.db")).unwrap();
        (dir, store)
    }

    /// Start a run and crash straight into an obstacle.
    fn crash(game: &mut RunnerGame) {
        game.handle_keys(&[RunnerKey::Jump]);
        game.player.settle(&game.settings);
        game.world.obstacles.push(Obstacle::new(130.0, 30.0, 30.0));
        game.update(FRAME);
    }

    #[test]
    fn test_menu_jump_starts_run() {
        let mut g = game(None);
        assert_eq!(g.state(), RunnerState::Menu);
        assert_eq!(g.handle_keys(&[RunnerKey::Confirm, RunnerKey::Char('x')]), RunnerCommand::None);
        assert_eq!(g.state(), RunnerState::Menu);

        g.handle_keys(&[RunnerKey::Jump]);
        assert_eq!(g.state(), RunnerState::Play);
        // Starting does not also jump
        assert!(g.player.on_ground);
    }

    #[test]
    fn test_menu_escape_quits() {
        let mut g = game(None);
        assert_eq!(g.handle_keys(&[RunnerKey::Escape]), RunnerCommand::Quit);
    }

    #[test]
    fn test_play_jump_and_escape() {
        let mut g = game(None);
        g.handle_keys(&[RunnerKey::Jump]);
        g.handle_keys(&[RunnerKey::Jump]);
        assert!(!g.player.on_ground);

        g.update(FRAME);
        assert!(g.world.distance > 0.0);

        g.handle_keys(&[RunnerKey::Escape]);
        assert_eq!(g.state(), RunnerState::Menu);
        assert_eq!(g.world.distance, 0.0);
        assert!(g.player.on_ground);
    }

    #[test]
    fn test_collision_ends_run() {
        let mut g = game(None);
        crash(&mut g);

        assert_eq!(g.state(), RunnerState::GameOver);
        // distance 0 at start, one frame at speed 7
        assert_eq!(g.game_over_score(), 1);
        assert!(g.name.is_empty());
    }

    #[test]
    fn test_game_over_is_frozen() {
        let mut g = game(None);
        crash(&mut g);
        let distance = g.world.distance;
        let obstacles = g.world.obstacles.clone();

        g.update(FRAME);
        g.update(FRAME);
        assert_eq!(g.world.distance, distance);
        assert_eq!(g.world.obstacles, obstacles);
    }

    #[test]
    fn test_name_entry_on_game_over() {
        let mut g = game(None);
        crash(&mut g);

        let keys: Vec<RunnerKey> = "ana bo".chars().map(RunnerKey::Char).collect();
        g.handle_keys(&keys);
        assert_eq!(g.name.text(), "anabo");

        g.handle_keys(&[RunnerKey::Backspace]);
        assert_eq!(g.name.text(), "anab");

        let long: Vec<RunnerKey> = std::iter::repeat(RunnerKey::Char('z')).take(30).collect();
        g.handle_keys(&long);
        assert_eq!(g.name.text().chars().count(), 16);
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut g = game(None);
        crash(&mut g);
        g.handle_keys(&[RunnerKey::Restart]);
        assert_eq!(g.state(), RunnerState::Play);
        assert!(g.world.obstacles.is_empty());
        assert_eq!(g.game_over_score(), 0);
    }

    #[test]
    fn test_escape_from_game_over_does_not_save() {
        let (_dir, store) = temp_store();
        let mut g = game(Some(store.clone()));
        crash(&mut g);
        g.handle_keys(&[RunnerKey::Escape]);

        assert_eq!(g.state(), RunnerState::Menu);
        assert!(store.top_scores(5).unwrap().is_empty());
    }

    #[test]
    fn test_confirm_saves_and_refreshes_leaderboard() {
        let (_dir, store) = temp_store();
        store.add_score("old", 0).unwrap();

        let mut g = game(Some(store.clone()));
        assert_eq!(g.leaderboard().len(), 1);
        crash(&mut g);

        g.handle_keys(&[RunnerKey::Char('a'), RunnerKey::Char('n'), RunnerKey::Char('a')]);
        g.handle_keys(&[RunnerKey::Confirm]);

        assert_eq!(g.state(), RunnerState::Menu);
        assert_eq!(g.best_score(), 1);
        assert_eq!(g.leaderboard()[0], ScoreEntry { player: "ana".into(), points: 1 });
        assert_eq!(store.best_score().unwrap(), 1);
    }

    #[test]
    fn test_empty_name_saved_as_player() {
        let (_dir, store) = temp_store();
        let mut g = game(Some(store.clone()));
        crash(&mut g);
        g.handle_keys(&[RunnerKey::Confirm]);
        assert_eq!(store.top_scores(1).unwrap()[0].player, "Player");
    }

    #[test]
    fn test_one_state_change_per_frame() {
        let (_dir, store) = temp_store();
        let mut g = game(Some(store));
        crash(&mut g);

        // Gamepad A arrives as Confirm and Jump together
        g.handle_keys(&[RunnerKey::Confirm, RunnerKey::Jump]);
        assert_eq!(g.state(), RunnerState::Menu);
    }

    #[test]
    fn test_collect_keys() {
        let input = FakeInput::pressing(&[Action::Jump, Action::Back]);
        let keys = collect_keys(&input, true, &['a', 'r', 'R', 'b']);
        assert_eq!(
            keys,
            vec![
                RunnerKey::Escape,
                RunnerKey::Backspace,
                RunnerKey::Char('a'),
                RunnerKey::Char('b'),
                RunnerKey::Jump,
            ]
        );
    }

    #[test]
    fn test_letter_typed_with_enter_is_saved() {
        let (_dir, store) = temp_store();
        let mut g = game(Some(store.clone()));
        crash(&mut g);
        g.handle_keys(&[RunnerKey::Char('j'), RunnerKey::Char('o')]);

        // Last letter and Enter land in the same frame
        let input = FakeInput::pressing(&[Action::Confirm]);
        let keys = collect_keys(&input, false, &['e']);
        g.handle_keys(&keys);

        assert_eq!(g.state(), RunnerState::Menu);
        assert_eq!(store.top_scores(1).unwrap()[0].player, "joe");
    }

    #[test]
    fn test_held_keys_are_not_repeated() {
        let input = FakeInput::holding(&[Action::Jump]);
        assert!(collect_keys(&input, false, &[]).is_empty());
    }
}

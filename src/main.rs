//! Engine Lessons: small 2D game-engine prototypes, one idea at a time
//!
//! - A bare game loop, then raw keyboard movement in world space
//! - Controller / player / camera as separate pieces
//! - A world of objects, a renderer, gravity and circle collisions
//! - A side-scrolling platformer
//! - An endless runner with persistent high scores

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod game;
mod input;
mod lessons;
mod runner;
mod storage;
mod ui;

use macroquad::prelude::*;
use app::{AppState, Lesson};
use config::Settings;
use input::{Action, ActionSource};
use lessons::{frames, LessonEvent};
use runner::{collect_keys, draw_runner, RunnerCommand};
use storage::ScoreStore;
use ui::{draw_tab_strip, layout as tab_layout, Rect};

const FUNCTION_KEYS: [KeyCode; 7] = [
    KeyCode::F1,
    KeyCode::F2,
    KeyCode::F3,
    KeyCode::F4,
    KeyCode::F5,
    KeyCode::F6,
    KeyCode::F7,
];

fn window_conf() -> Conf {
    Conf {
        window_title: format!("Engine Lessons v{}", VERSION),
        window_width: 1280,
        window_height: 720,
        window_resizable: true,
        high_dpi: true,
        #[cfg(not(target_arch = "wasm32"))]
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Crash logging before anything else can panic
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    let settings_path = match Settings::default_path() {
        Ok(path) => Some(path),
        Err(e) => {
            log::warn!("Settings unavailable, using defaults: {}", e);
            None
        }
    };
    let settings = settings_path
        .as_deref()
        .map(Settings::load_or_default)
        .unwrap_or_default();

    let store = match ScoreStore::open_default() {
        Ok(store) => {
            log::info!("High scores at {}", store.path().display());
            Some(store)
        }
        Err(e) => {
            log::warn!("High scores disabled: {}", e);
            None
        }
    };

    let mut app = AppState::new(settings, store, vec2(screen_width(), screen_height()));
    let mut fullscreen = false;
    let labels = Lesson::labels();

    log::info!("=== Engine Lessons v{} ===", VERSION);

    loop {
        // 1. Time
        let frame_start = get_time();
        let seconds = get_frame_time();
        let dt = frames(seconds);
        let screen = vec2(screen_width(), screen_height());

        // 2. Controls
        app.input.poll();

        for (i, key) in FUNCTION_KEYS.iter().enumerate() {
            if is_key_pressed(*key) {
                if let Some(lesson) = Lesson::from_index(i) {
                    app.set_active(lesson);
                }
            }
        }
        if is_key_pressed(KeyCode::Tab) {
            let shift = is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift);
            let lesson = if shift { app.active.prev() } else { app.active.next() };
            app.set_active(lesson);
        }

        if is_key_pressed(KeyCode::F10) {
            app.fps_limit = app.fps_limit.next();
            app.settings.fps_limit = app.fps_limit;
            log::info!("FPS limit: {}", app.fps_limit.label());
            if let Some(path) = &settings_path {
                if let Err(e) = app.settings.save(path) {
                    log::warn!("Could not save settings: {}", e);
                }
            }
        }

        let mut toggle_fullscreen = app.input.action_pressed(Action::ToggleFullscreen);

        // 3..6. Per-lesson update
        match app.active {
            Lesson::Template => app.template.update(dt),
            Lesson::Moving => app.moving.update(app.input.keys()),
            Lesson::Abstraction => app.abstraction.update(app.input.keys(), dt, screen),
            Lesson::Orbit => app.orbit.update(&app.input, dt, screen),
            Lesson::Gravity => app.gravity.update(&app.input, dt, screen),
            Lesson::Platformer => {
                if app.platformer.update(&app.input, dt, screen) == LessonEvent::ToggleFullscreen {
                    toggle_fullscreen = true;
                }
            }
            Lesson::Runner => {
                let typed = app.input.typed_chars();
                let keys = collect_keys(&app.input, is_key_pressed(KeyCode::Backspace), &typed);
                if app.runner.handle_keys(&keys) == RunnerCommand::Quit {
                    log::info!("Quit from runner menu");
                    break;
                }
                app.runner.update(seconds);
            }
        }

        if toggle_fullscreen {
            fullscreen = !fullscreen;
            set_fullscreen(fullscreen);
            log::debug!("Fullscreen: {}", fullscreen);
        }

        // 7. Draw
        let tab_rect = Rect::new(0.0, 0.0, screen.x, tab_layout::BAR_HEIGHT);
        match app.active {
            Lesson::Template => app.template.draw(),
            Lesson::Moving => app.moving.draw(),
            Lesson::Abstraction => app.abstraction.draw(),
            Lesson::Orbit => app.orbit.draw(),
            Lesson::Gravity => app.gravity.draw(),
            Lesson::Platformer => app.platformer.draw(),
            Lesson::Runner => {
                clear_background(BLACK);
                let area = Rect::screen(screen.x, screen.y).remaining_after_top(tab_layout::BAR_HEIGHT);
                draw_runner(&app.runner, area);
            }
        }

        // Tab strip last so it covers lesson content
        let status = format!("{} fps (F10: {})", get_fps(), app.fps_limit.label());
        draw_tab_strip(tab_rect, &labels, app.active.index(), &status);

        // FPS limiting
        if let Some(target_frame_time) = app.fps_limit.frame_time() {
            let elapsed = get_time() - frame_start;
            let remaining = target_frame_time - elapsed;

            if remaining > 0.0 {
                // Native: sleep for the bulk, then spin for precision
                #[cfg(not(target_arch = "wasm32"))]
                {
                    let spin_margin = 0.002; // 2ms
                    while get_time() - frame_start + spin_margin < target_frame_time {
                        std::thread::sleep(std::time::Duration::from_millis(1));
                    }
                    while get_time() - frame_start < target_frame_time {
                        std::hint::spin_loop();
                    }
                }
                // WASM: no thread::sleep
                #[cfg(target_arch = "wasm32")]
                {
                    while get_time() - frame_start < target_frame_time {
                        std::hint::spin_loop();
                    }
                }
            }
        }

        next_frame().await;
    }
}

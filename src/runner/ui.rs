//! Runner drawing
//!
//! Everything is laid out on the logical canvas and scaled into the given
//! screen area through a `Viewport`.

use macroquad::prelude::*;
use crate::game::rgb_color;
use crate::ui::{draw_name_entry, Rect, Viewport};
use super::game::{RunnerGame, RunnerState};
use super::world::STRIPE_SPACING;

const FONT_SIZE: f32 = 28.0;
const FONT_BIG: f32 = 44.0;

const TITLE_Y: f32 = 90.0;
const SCORES_Y: f32 = 220.0;
const SCORE_LINE_H: f32 = 28.0;

/// Draw the whole runner into `area` (screen pixels).
pub fn draw_runner(game: &RunnerGame, area: Rect) {
    let settings = game.settings();
    let vp = Viewport::fit(vec2(settings.width, settings.height), area);

    // Letter-box bars
    draw_rectangle(area.x, area.y, area.w, area.h, BLACK);

    draw_background(game, &vp);
    draw_obstacles(game, &vp);
    draw_player(game, &vp);

    match game.state() {
        RunnerState::Menu => draw_menu(game, &vp),
        RunnerState::Play => draw_hud(game, &vp),
        RunnerState::GameOver => draw_game_over(game, &vp),
    }
}

fn draw_background(game: &RunnerGame, vp: &Viewport) {
    let s = game.settings();
    let palette = &s.palette;
    let ground_y = s.ground_y();

    vp.fill_rect(Rect::new(0.0, 0.0, s.width, s.height), rgb_color(palette.background));
    vp.fill_rect(Rect::new(0.0, ground_y, s.width, s.height - ground_y), rgb_color(palette.ground));

    // Stripes wrap across the canvas plus a margin so they slide in smoothly
    let wrap = s.width + 160.0;
    let count = (s.width / STRIPE_SPACING) as usize + 4;
    let offset = game.world.stripe_offset.floor();
    for i in 0..count {
        let x = (i as f32 * STRIPE_SPACING - offset).rem_euclid(wrap);
        vp.fill_rect(Rect::new(x, ground_y + 30.0, 30.0, 5.0), rgb_color(palette.stripe));
    }
}

fn draw_obstacles(game: &RunnerGame, vp: &Viewport) {
    let s = game.settings();
    let color = rgb_color(s.palette.obstacle);
    for ob in &game.world.obstacles {
        vp.fill_rect(ob.rect(s.ground_y()), color);
    }
}

fn draw_player(game: &RunnerGame, vp: &Viewport) {
    let s = game.settings();
    vp.fill_rect(game.player.rect(s), rgb_color(s.palette.player));
}

fn draw_hud(game: &RunnerGame, vp: &Viewport) {
    let palette = &game.settings().palette;
    vp.text(&format!("Score: {}", game.score()), 20.0, 40.0, FONT_SIZE, rgb_color(palette.text));
    vp.text(&format!("Best: {}", game.best_score()), 20.0, 70.0, FONT_SIZE, rgb_color(palette.accent));
}

/// One leaderboard line, e.g. ` 1. ana           120`
pub fn score_line(rank: usize, player: &str, points: u32) -> String {
    format!("{:>2}. {:<12}  {}", rank, player, points)
}

fn draw_menu(game: &RunnerGame, vp: &Viewport) {
    let s = game.settings();
    let text = rgb_color(s.palette.text);
    let center = s.width * 0.5;

    vp.text_centered("ENDLESS RUNNER", center, TITLE_Y + FONT_BIG, FONT_BIG, rgb_color(s.palette.accent));
    vp.text_centered("Press SPACE to Start - Esc to Quit", center, TITLE_Y + 60.0 + FONT_SIZE, FONT_SIZE, text);

    vp.text("Top Scores:", center - 80.0, SCORES_Y - 8.0, FONT_SIZE, text);
    for (i, entry) in game.leaderboard().iter().enumerate() {
        let y = SCORES_Y + i as f32 * SCORE_LINE_H + FONT_SIZE;
        vp.text(&score_line(i + 1, &entry.player, entry.points), center - 120.0, y, FONT_SIZE, text);
    }
}

fn draw_game_over(game: &RunnerGame, vp: &Viewport) {
    let s = game.settings();
    let text = rgb_color(s.palette.text);
    let center = s.width * 0.5;

    vp.text_centered("GAME OVER", center, 90.0 + FONT_BIG, FONT_BIG, rgb_color(s.palette.game_over));
    vp.text_centered(&format!("Your Score: {}", game.game_over_score()), center, 150.0 + FONT_SIZE, FONT_SIZE, text);
    vp.text_centered("Enter Name & Press ENTER to Save", center, 190.0 + FONT_SIZE, FONT_SIZE, text);

    let entry_box = vp.to_screen_rect(Rect::centered_x(center, 230.0, 360.0, 40.0));
    draw_name_entry(entry_box, &game.name, FONT_SIZE * vp.scale, rgb_color(s.palette.entry_box), WHITE);

    vp.text_centered("Press R to restart - Esc for menu", center, 290.0 + FONT_SIZE, FONT_SIZE, text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_line() {
        assert_eq!(score_line(1, "ana", 120), " 1. ana           120");
        assert_eq!(score_line(10, "abcdefghijklmnop", 5), "10. abcdefghijklmnop  5");
    }
}

//! Frame drawing for each session phase

use std::f32::consts::{FRAC_PI_2, TAU};

use super::{Color, Surface, colors};
use crate::sim::{GamePhase, GameState, Track};

const TITLE_FONT: &str = "30px Arial";
const BODY_FONT: &str = "20px Arial";

/// Draw one frame for the current phase
///
/// Paused draws its message over whatever the surface already shows;
/// game over clears first.
pub fn draw_frame<S: Surface + ?Sized>(surface: &mut S, state: &GameState, now_ms: f64) {
    match state.phase {
        GamePhase::Playing => draw_scene(surface, state, now_ms),
        GamePhase::Paused => draw_pause_screen(surface, state),
        GamePhase::GameOver => draw_game_over_screen(surface, state),
    }
}

/// Full playfield: tracks, player, traffic, score, bonus
pub fn draw_scene<S: Surface + ?Sized>(surface: &mut S, state: &GameState, now_ms: f64) {
    surface.clear_rect(0.0, 0.0, state.width, state.height);

    draw_track(surface, state, &state.traffic_track, colors::TRAFFIC_TRACK);
    draw_track(surface, state, &state.player_track, colors::PLAYER_TRACK);

    // Player, drawn in its own frame facing along the orbit
    let pos = state.player_pos();
    let color = if state.bonus_held {
        colors::PLAYER_ARMED
    } else {
        colors::PLAYER
    };
    surface.save();
    surface.translate(pos.x, pos.y);
    surface.rotate(state.player.angle + FRAC_PI_2);
    fill_circle(surface, 0.0, 0.0, state.player.size / 2.0, color);
    surface.restore();

    for unit in &state.traffic {
        let p = state.traffic_pos(unit);
        fill_circle(surface, p.x, p.y, unit.size / 2.0, colors::TRAFFIC);
    }

    surface.set_fill_color(colors::TEXT);
    surface.set_font(BODY_FONT);
    surface.fill_text(&format!("Score: {}", state.score), 10.0, 20.0);

    if let Some(bonus) = state.active_bonus(now_ms) {
        let p = state.bonus_pos(bonus);
        fill_circle(surface, p.x, p.y, bonus.diameter / 2.0, colors::BONUS);
    }
}

pub fn draw_pause_screen<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    let (cx, cy) = (state.width / 2.0, state.height / 2.0);
    surface.set_fill_color(colors::TEXT);
    surface.set_font(TITLE_FONT);
    surface.fill_text("Game Paused", cx - 80.0, cy);
    surface.set_font(BODY_FONT);
    surface.fill_text("Press P to Resume", cx - 100.0, cy + 40.0);
}

pub fn draw_game_over_screen<S: Surface + ?Sized>(surface: &mut S, state: &GameState) {
    let (cx, cy) = (state.width / 2.0, state.height / 2.0);
    surface.clear_rect(0.0, 0.0, state.width, state.height);
    surface.set_fill_color(colors::TEXT);
    surface.set_font(TITLE_FONT);
    surface.fill_text("Game Over", cx - 80.0, cy);
    surface.set_font(BODY_FONT);
    surface.fill_text(&format!("Final Score: {}", state.score), cx - 80.0, cy + 40.0);
    surface.fill_text("Press R to Restart", cx - 100.0, cy + 80.0);
}

/// Outer and inner lane circles
fn draw_track<S: Surface + ?Sized>(surface: &mut S, state: &GameState, track: &Track, color: Color) {
    surface.set_stroke_color(color);
    surface.set_line_width(state.tuning.track_line_width);
    for radius in [track.radius, track.radius - state.tuning.track_lane_width] {
        surface.begin_path();
        surface.arc(track.center.x, track.center.y, radius, 0.0, TAU);
        surface.stroke();
    }
}

fn fill_circle<S: Surface + ?Sized>(surface: &mut S, x: f32, y: f32, radius: f32, color: Color) {
    surface.set_fill_color(color);
    surface.begin_path();
    surface.arc(x, y, radius, 0.0, TAU);
    surface.fill();
}

//! Per-frame simulation step
//!
//! Advances orbital motion, detects collisions and bonus pickup. Runs only
//! while the session is `Playing`; one call per rendered frame.

use super::collision::circles_overlap;
use super::state::{GamePhase, GameState};

/// What happened during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The tick ran (session was playing)
    pub advanced: bool,
    /// At least one traffic unit hit the player this tick
    pub collided: bool,
    pub bonus_collected: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, now_ms: f64) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if state.phase != GamePhase::Playing {
        return outcome;
    }
    outcome.advanced = true;

    // Traffic moves first, then is tested against the player's current spot.
    // All units are checked; game over is sticky.
    let player_pos = state.player_pos();
    let player_size = state.player.size;
    for unit in &mut state.traffic {
        unit.angle += state.traffic_speed;
    }
    for unit in &state.traffic {
        let hit = circles_overlap(state.traffic_pos(unit), unit.size, player_pos, player_size);
        if hit.hit {
            outcome.collided = true;
        }
    }
    if outcome.collided {
        state.phase = GamePhase::GameOver;
    }

    state.player.angle += state.player.angular_speed();
    state.score += 1;
    state.traffic_speed += state.tuning.traffic_speed_ramp;

    let collected = state.active_bonus(now_ms).is_some_and(|bonus| {
        circles_overlap(
            state.player_pos(),
            state.player.size,
            state.bonus_pos(bonus),
            bonus.diameter,
        )
        .hit
    });
    if collected {
        state.bonus_held = true;
        state.bonus = None;
        outcome.bonus_collected = true;
        log::info!("Bonus collected at score {}", state.score);
    }

    if outcome.collided {
        log::info!("Game over! Final score: {}", state.score);
    }

    outcome
}

//! Session control: input handling and phase transitions
//!
//! ```text
//!            Pause                 collision
//!   Paused <-------> Playing ------------------> GameOver
//!                       ^                            |
//!                       +------- Restart (any) ------+
//! ```
//!
//! Boost and UseBonus never change the phase.

use super::state::{GamePhase, GameState};

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Hold to drive faster
    Boost,
    /// Full reset from any phase
    Restart,
    /// Toggle pause while playing
    Pause,
    /// Spend a held bonus to clear all traffic
    UseBonus,
}

/// A discrete key notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Down(Key),
    Up(Key),
}

/// How the frame loop must react to an input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum InputOutcome {
    /// Nothing changed
    Ignored,
    /// State changed, the loop keeps its current schedule
    Handled,
    /// The loop was halted and must be restarted by the caller
    ResumeLoop,
}

/// Apply one input event to the session
pub fn handle_input(state: &mut GameState, event: InputEvent) -> InputOutcome {
    match event {
        InputEvent::Down(Key::Boost) => {
            state.player.boosting = true;
            InputOutcome::Handled
        }
        InputEvent::Up(Key::Boost) => {
            state.player.boosting = false;
            InputOutcome::Handled
        }
        InputEvent::Down(Key::Restart) => {
            restart(state);
            InputOutcome::ResumeLoop
        }
        InputEvent::Down(Key::Pause) => toggle_pause(state),
        InputEvent::Down(Key::UseBonus) => {
            if use_bonus(state) {
                InputOutcome::Handled
            } else {
                InputOutcome::Ignored
            }
        }
        InputEvent::Up(_) => InputOutcome::Ignored,
    }
}

/// Full reset back to `Playing`
pub fn restart(state: &mut GameState) {
    let previous = state.phase;
    state.reset();
    log::info!("Game restarted (was {:?})", previous);
}

/// Playing <-> Paused. No effect after game over.
pub fn toggle_pause(state: &mut GameState) -> InputOutcome {
    match state.phase {
        GamePhase::Playing => {
            state.phase = GamePhase::Paused;
            log::info!("Paused at score {}", state.score);
            InputOutcome::Handled
        }
        GamePhase::Paused => {
            state.phase = GamePhase::Playing;
            log::info!("Resumed");
            InputOutcome::ResumeLoop
        }
        GamePhase::GameOver => InputOutcome::Ignored,
    }
}

/// Clear all traffic if a bonus is held. Returns true if the bonus was spent.
pub fn use_bonus(state: &mut GameState) -> bool {
    if !state.bonus_held {
        return false;
    }
    let cleared = state.traffic.len();
    state.traffic.clear();
    state.bonus_held = false;
    log::info!("Bonus used, cleared {} traffic units", cleared);
    true
}

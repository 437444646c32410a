//! Headless driver
//!
//! Runs the game against a [`RecordingSurface`] on a simulated clock: a
//! display refresh every [`FRAME_MS`], spawner timers polled before each
//! refresh, and the frame loop rescheduled only while playing, exactly like
//! the browser driver.

use crate::consts::MAX_PLAY_AREA;
use crate::game::{FrameOutcome, Game};
use crate::platform::IntervalTimer;
use crate::renderer::RecordingSurface;
use crate::sim::{GamePhase, InputEvent, InputOutcome};
use crate::tuning::Tuning;

/// Simulated display refresh interval (60 Hz)
pub const FRAME_MS: f64 = 1000.0 / 60.0;

/// Result of [`HeadlessRun::run`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Display refreshes simulated
    pub refreshes: u64,
    pub score: u64,
    pub game_over: bool,
    pub elapsed_ms: f64,
}

pub struct HeadlessRun {
    game: Game,
    surface: RecordingSurface,
    now_ms: f64,
    refreshes: u64,
    traffic_timer: IntervalTimer,
    bonus_timer: IntervalTimer,
}

impl HeadlessRun {
    /// Start a run on a full-size play area with the first frame scheduled
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        let traffic_timer = IntervalTimer::new(tuning.traffic_spawn_period_ms, 0.0);
        let bonus_timer = IntervalTimer::new(tuning.bonus_refresh_period_ms, 0.0);
        let mut game = Game::new(MAX_PLAY_AREA, MAX_PLAY_AREA, tuning, seed);
        game.claim_frame();
        Self {
            game,
            surface: RecordingSurface::new(),
            now_ms: 0.0,
            refreshes: 0,
            traffic_timer,
            bonus_timer,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut Game {
        &mut self.game
    }

    /// Commands drawn by the most recent frame
    pub fn surface(&self) -> &RecordingSurface {
        &self.surface
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Advance one display refresh: fire due timers, then run the pending frame
    pub fn step(&mut self) {
        self.now_ms += FRAME_MS;
        self.refreshes += 1;

        for _ in 0..self.traffic_timer.poll(self.now_ms) {
            self.game.spawn_traffic();
        }
        for _ in 0..self.bonus_timer.poll(self.now_ms) {
            self.game.refresh_bonus(self.now_ms);
        }

        if self.game.frame_pending() {
            self.run_frame();
        }
    }

    /// Deliver a key event. A resumed loop runs its first frame immediately.
    pub fn send(&mut self, event: InputEvent) -> InputOutcome {
        let outcome = self.game.input(event);
        if outcome == InputOutcome::ResumeLoop && self.game.claim_frame() {
            self.run_frame();
        }
        outcome
    }

    /// Step until game over or `max_refreshes`, whichever comes first
    pub fn run(&mut self, max_refreshes: u64) -> RunSummary {
        let mut budget = max_refreshes;
        while budget > 0 && self.game.state().phase != GamePhase::GameOver {
            self.step();
            budget -= 1;
        }
        RunSummary {
            refreshes: self.refreshes,
            score: self.game.state().score,
            game_over: self.game.state().phase == GamePhase::GameOver,
            elapsed_ms: self.now_ms,
        }
    }

    fn run_frame(&mut self) {
        // Paused frames draw over the previous picture; keep it for them
        if self.game.state().phase != GamePhase::Paused {
            self.surface.clear();
        }
        if self.game.frame(&mut self.surface, self.now_ms) == FrameOutcome::Continue {
            self.game.claim_frame();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Key;

    #[test]
    fn test_traffic_spawns_on_cadence() {
        let mut run = HeadlessRun::new(Tuning::default(), 1);
        // Just before the first 3 s tick
        while run.now_ms() + FRAME_MS < 3_000.0 {
            run.step();
        }
        assert!(run.game().state().traffic.is_empty());
        run.step();
        run.step();
        assert_eq!(run.game().state().traffic.len(), 1);
    }

    #[test]
    fn test_halted_loop_stays_halted() {
        let mut run = HeadlessRun::new(Tuning::default(), 1);
        run.step();
        let _ = run.send(InputEvent::Down(Key::Pause));
        // The pending frame shows the pause screen and does not reschedule
        run.step();
        assert!(!run.game().frame_pending());
        let frames = run.game().frames();
        for _ in 0..30 {
            run.step();
        }
        assert_eq!(run.game().frames(), frames);
    }

    #[test]
    fn test_restart_while_playing_keeps_one_frame_chain() {
        let mut run = HeadlessRun::new(Tuning::default(), 1);
        run.step();
        let _ = run.send(InputEvent::Down(Key::Restart));
        let frames = run.game().frames();
        run.step();
        assert_eq!(run.game().frames(), frames + 1);
        assert_eq!(run.game().state().score, 1);
    }
}

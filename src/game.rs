//! Loop controller
//!
//! `Game` owns the session and exposes the entry points the platform calls:
//! one per rendered frame, one per key event and one per spawner timer. Each
//! call runs to completion before the next one starts.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::renderer::{Surface, draw_frame};
use crate::sim::{self, GamePhase, GameState, InputEvent, InputOutcome, handle_input};
use crate::tuning::Tuning;

/// Whether the frame loop keeps running after a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Still playing; schedule the next frame
    Continue,
    /// Paused or over; the static screen stays until an input resumes the loop
    Halt,
}

/// Game instance holding all state
pub struct Game {
    state: GameState,
    rng: Pcg32,
    /// A frame callback is already scheduled
    frame_pending: bool,
    frames: u64,
}

impl Game {
    pub fn new(width: f32, height: f32, tuning: Tuning, seed: u64) -> Self {
        log::info!("New game {}x{} with seed {}", width, height, seed);
        Self {
            state: GameState::new(width, height, tuning),
            rng: Pcg32::seed_from_u64(seed),
            frame_pending: false,
            frames: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.state.tuning
    }

    /// Frames run since start (including halted ones)
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frame entry point: update, then draw
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S, now_ms: f64) -> FrameOutcome {
        self.frame_pending = false;
        self.frames += 1;

        let outcome = sim::tick(&mut self.state, now_ms);
        if outcome.collided {
            log::debug!("Collision on frame {}", self.frames);
        }
        draw_frame(surface, &self.state, now_ms);

        match self.state.phase {
            GamePhase::Playing => FrameOutcome::Continue,
            GamePhase::Paused | GamePhase::GameOver => FrameOutcome::Halt,
        }
    }

    /// Key entry point
    pub fn input(&mut self, event: InputEvent) -> InputOutcome {
        handle_input(&mut self.state, event)
    }

    /// Record that a frame callback has been requested.
    ///
    /// Returns false if one was already pending, in which case the caller
    /// must not request another.
    pub fn claim_frame(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Traffic timer entry point
    pub fn spawn_traffic(&mut self) -> bool {
        sim::spawn_traffic(&mut self.state, &mut self.rng)
    }

    /// Bonus timer entry point
    pub fn refresh_bonus(&mut self, now_ms: f64) -> bool {
        sim::refresh_bonus(&mut self.state, &mut self.rng, now_ms)
    }
}

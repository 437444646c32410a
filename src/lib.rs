//! Orbit Dodge - A two-track orbital dodging arcade game
//!
//! Core modules:
//! - `sim`: Simulation (orbital motion, collisions, spawning, session control)
//! - `renderer`: Canvas-style drawing surface and frame rendering
//! - `platform`: Browser/native platform abstraction (keys, timers)
//! - `tuning`: Data-driven game balance
//! - `game`: Loop controller tying state, input, spawners and rendering together
//! - `headless`: Native driver on a simulated clock

pub mod game;
pub mod headless;
pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use game::{FrameOutcome, Game};
pub use tuning::{Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Largest play area edge (pixels)
    pub const MAX_PLAY_AREA: f32 = 800.0;

    /// Track geometry
    pub const TRACK_RADIUS: f32 = 200.0;
    /// Distance between a track's outer and inner circle
    pub const TRACK_LANE_WIDTH: f32 = 40.0;
    /// Entities orbit this far inside the outer circle
    pub const ORBIT_INSET: f32 = 20.0;
    pub const TRACK_LINE_WIDTH: f32 = 4.0;

    /// Player defaults (angular speeds in radians per frame)
    pub const PLAYER_SIZE: f32 = 20.0;
    pub const PLAYER_SPEED: f32 = 0.02;
    pub const PLAYER_BOOST_SPEED: f32 = 0.04;

    /// Traffic defaults
    pub const TRAFFIC_SIZE: f32 = 20.0;
    pub const TRAFFIC_BASE_SPEED: f32 = 0.01;
    /// Added to traffic speed every playing frame
    pub const TRAFFIC_SPEED_RAMP: f32 = 0.000_01;
    pub const MAX_TRAFFIC: usize = 5;

    /// Bonus (bomb) defaults
    pub const BONUS_DIAMETER: f32 = 40.0;
    pub const BONUS_LIFETIME_MS: f64 = 2_000.0;

    /// Spawner cadence
    pub const TRAFFIC_SPAWN_PERIOD_MS: f64 = 3_000.0;
    pub const BONUS_REFRESH_PERIOD_MS: f64 = 10_000.0;
}

/// Clamp a viewport dimension to the play area cap
#[inline]
pub fn play_area_extent(viewport: f32) -> f32 {
    viewport.min(consts::MAX_PLAY_AREA)
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

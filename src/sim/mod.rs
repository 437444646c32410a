//! Simulation module
//!
//! All gameplay logic lives here. No rendering or platform dependencies:
//! - Time comes in as a millisecond timestamp argument
//! - Randomness comes in as a caller-owned RNG
//! - One tick per rendered frame

pub mod collision;
pub mod control;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, circles_overlap, distance};
pub use control::{InputEvent, InputOutcome, Key, handle_input, restart, toggle_pause, use_bonus};
pub use spawn::{refresh_bonus, spawn_traffic};
pub use state::{BonusItem, GamePhase, GameState, Track, TrafficUnit, Vehicle};
pub use tick::{TickOutcome, tick};

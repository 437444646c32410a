//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (DOM key codes)
//! - Periodic timers on a simulated clock

pub mod input;
pub mod timer;

pub use input::{event_from_code, key_from_code};
pub use timer::IntervalTimer;

//! Data-driven game balance
//!
//! Every number the simulation uses lives here so a run can be tuned from a
//! JSON file without recompiling. Missing fields fall back to [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating a [`Tuning`]
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be positive (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("`{field}` must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("orbit inset {inset} must lie inside the track radius {radius}")]
    OrbitOutsideTrack { inset: f32, radius: f32 },
}

/// Game balance parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Tracks ===
    /// Outer radius shared by both tracks
    pub track_radius: f32,
    /// Gap between outer and inner track circle (drawing only)
    pub track_lane_width: f32,
    /// Entities orbit at `track_radius - orbit_inset`
    pub orbit_inset: f32,
    /// Stroke width of the track circles
    pub track_line_width: f32,

    // === Player ===
    pub player_size: f32,
    /// Radians per frame
    pub player_speed: f32,
    /// Radians per frame while boosting
    pub player_boost_speed: f32,

    // === Traffic ===
    pub traffic_size: f32,
    pub traffic_base_speed: f32,
    pub traffic_speed_ramp: f32,
    pub max_traffic: usize,

    // === Bonus ===
    pub bonus_diameter: f32,
    pub bonus_lifetime_ms: f64,

    // === Spawner cadence ===
    pub traffic_spawn_period_ms: f64,
    pub bonus_refresh_period_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            track_radius: TRACK_RADIUS,
            track_lane_width: TRACK_LANE_WIDTH,
            orbit_inset: ORBIT_INSET,
            track_line_width: TRACK_LINE_WIDTH,

            player_size: PLAYER_SIZE,
            player_speed: PLAYER_SPEED,
            player_boost_speed: PLAYER_BOOST_SPEED,

            traffic_size: TRAFFIC_SIZE,
            traffic_base_speed: TRAFFIC_BASE_SPEED,
            traffic_speed_ramp: TRAFFIC_SPEED_RAMP,
            max_traffic: MAX_TRAFFIC,

            bonus_diameter: BONUS_DIAMETER,
            bonus_lifetime_ms: BONUS_LIFETIME_MS,

            traffic_spawn_period_ms: TRAFFIC_SPAWN_PERIOD_MS,
            bonus_refresh_period_ms: BONUS_REFRESH_PERIOD_MS,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file on disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Radius at which every entity orbits its track
    #[inline]
    pub fn orbit_radius(&self) -> f32 {
        self.track_radius - self.orbit_inset
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("track_radius", self.track_radius as f64),
            ("track_line_width", self.track_line_width as f64),
            ("player_size", self.player_size as f64),
            ("traffic_size", self.traffic_size as f64),
            ("bonus_diameter", self.bonus_diameter as f64),
            ("bonus_lifetime_ms", self.bonus_lifetime_ms),
            ("traffic_spawn_period_ms", self.traffic_spawn_period_ms),
            ("bonus_refresh_period_ms", self.bonus_refresh_period_ms),
            ("max_traffic", self.max_traffic as f64),
        ];
        for (field, value) in positive {
            if value.is_nan() || value <= 0.0 {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("track_lane_width", self.track_lane_width),
            ("player_speed", self.player_speed),
            ("player_boost_speed", self.player_boost_speed),
            ("traffic_base_speed", self.traffic_base_speed),
            ("traffic_speed_ramp", self.traffic_speed_ramp),
        ];
        for (field, value) in non_negative {
            if value.is_nan() || value < 0.0 {
                return Err(TuningError::Negative {
                    field,
                    value: value as f64,
                });
            }
        }

        if self.orbit_inset < 0.0 || self.orbit_inset >= self.track_radius {
            return Err(TuningError::OrbitOutsideTrack {
                inset: self.orbit_inset,
                radius: self.track_radius,
            });
        }

        Ok(())
    }
}

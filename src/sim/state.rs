//! Game state and core simulation types
//!
//! One `GameState` is the single authority for a session; it is owned by the
//! loop controller and mutated by the frame update, input and spawners.

use glam::Vec2;

use crate::polar_to_cartesian;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Active gameplay, the frame loop is running
    #[default]
    Playing,
    /// Frozen; spawners still fire
    Paused,
    /// Player collided with traffic
    GameOver,
}

/// Fixed circular track geometry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub center: Vec2,
    /// Outer circle radius
    pub radius: f32,
}

impl Track {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Cartesian position of something orbiting this track
    #[inline]
    pub fn point_at(&self, orbit_radius: f32, angle: f32) -> Vec2 {
        self.center + polar_to_cartesian(orbit_radius, angle)
    }
}

/// The player's vehicle
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    /// Angular position (radians, unbounded)
    pub angle: f32,
    pub orbit_radius: f32,
    /// Diameter
    pub size: f32,
    /// Radians per frame
    pub speed: f32,
    /// Radians per frame while boosting
    pub boost_speed: f32,
    pub boosting: bool,
}

impl Vehicle {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            angle: 0.0,
            orbit_radius: tuning.orbit_radius(),
            size: tuning.player_size,
            speed: tuning.player_speed,
            boost_speed: tuning.player_boost_speed,
            boosting: false,
        }
    }

    /// Speed for the current frame
    #[inline]
    pub fn angular_speed(&self) -> f32 {
        if self.boosting { self.boost_speed } else { self.speed }
    }
}

/// A traffic car on the traffic track
#[derive(Debug, Clone, PartialEq)]
pub struct TrafficUnit {
    pub angle: f32,
    pub orbit_radius: f32,
    /// Diameter
    pub size: f32,
}

/// The collectible bomb, orbiting the player track
#[derive(Debug, Clone, PartialEq)]
pub struct BonusItem {
    pub angle: f32,
    pub orbit_radius: f32,
    pub diameter: f32,
    /// Wall-clock time (ms) after which the bonus is stale
    pub expires_at_ms: f64,
}

impl BonusItem {
    /// Visible and collectible
    #[inline]
    pub fn is_active(&self, now_ms: f64) -> bool {
        self.expires_at_ms > now_ms
    }

    /// Eligible for replacement by the refresher
    #[inline]
    pub fn is_expired(&self, now_ms: f64) -> bool {
        self.expires_at_ms < now_ms
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    pub tuning: Tuning,
    /// Play area size in pixels
    pub width: f32,
    pub height: f32,
    /// Track the player drives on (left)
    pub player_track: Track,
    /// Track the traffic drives on (right)
    pub traffic_track: Track,
    pub player: Vehicle,
    /// Live traffic, never longer than `tuning.max_traffic`
    pub traffic: Vec<TrafficUnit>,
    /// Single bonus slot
    pub bonus: Option<BonusItem>,
    /// Bonus collected and not yet used
    pub bonus_held: bool,
    pub score: u64,
    /// Current traffic angular speed (radians per frame)
    pub traffic_speed: f32,
}

impl GameState {
    /// Create a fresh session for a play area of the given size
    pub fn new(width: f32, height: f32, tuning: Tuning) -> Self {
        let mid_y = height / 2.0;
        let player_track = Track::new(Vec2::new(width / 3.0, mid_y), tuning.track_radius);
        let traffic_track = Track::new(Vec2::new(2.0 * width / 3.0, mid_y), tuning.track_radius);

        Self {
            phase: GamePhase::Playing,
            player: Vehicle::new(&tuning),
            traffic: Vec::with_capacity(tuning.max_traffic),
            bonus: None,
            bonus_held: false,
            score: 0,
            traffic_speed: tuning.traffic_base_speed,
            width,
            height,
            player_track,
            traffic_track,
            tuning,
        }
    }

    /// Return to the initial session; track geometry and tuning are kept
    pub fn reset(&mut self) {
        self.phase = GamePhase::Playing;
        self.player = Vehicle::new(&self.tuning);
        self.traffic.clear();
        self.bonus = None;
        self.bonus_held = false;
        self.score = 0;
        self.traffic_speed = self.tuning.traffic_base_speed;
    }

    #[inline]
    pub fn player_pos(&self) -> Vec2 {
        self.player_track
            .point_at(self.player.orbit_radius, self.player.angle)
    }

    #[inline]
    pub fn traffic_pos(&self, unit: &TrafficUnit) -> Vec2 {
        self.traffic_track.point_at(unit.orbit_radius, unit.angle)
    }

    #[inline]
    pub fn bonus_pos(&self, bonus: &BonusItem) -> Vec2 {
        self.player_track.point_at(bonus.orbit_radius, bonus.angle)
    }

    /// The bonus slot if it holds an unexpired item
    pub fn active_bonus(&self, now_ms: f64) -> Option<&BonusItem> {
        self.bonus.as_ref().filter(|b| b.is_active(now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_layout() {
        let state = GameState::new(800.0, 800.0, Tuning::default());
        assert_eq!(state.phase, GamePhase::Playing);
        assert!((state.player_track.center.x - 800.0 / 3.0).abs() < 1e-4);
        assert!((state.traffic_track.center.x - 1600.0 / 3.0).abs() < 1e-4);
        assert_eq!(state.player_track.center.y, 400.0);
        assert_eq!(state.player_track.radius, state.traffic_track.radius);
        assert_eq!(state.player.orbit_radius, 180.0);
        assert!(state.traffic.is_empty());
        assert!(state.bonus.is_none());
    }

    #[test]
    fn test_player_starts_at_angle_zero() {
        let state = GameState::new(800.0, 800.0, Tuning::default());
        let pos = state.player_pos();
        assert!((pos.x - (800.0 / 3.0 + 180.0)).abs() < 1e-3);
        assert!((pos.y - 400.0).abs() < 1e-3);
    }

    #[test]
    fn test_boost_selects_speed() {
        let mut player = Vehicle::new(&Tuning::default());
        assert_eq!(player.angular_speed(), 0.02);
        player.boosting = true;
        assert_eq!(player.angular_speed(), 0.04);
    }

    #[test]
    fn test_bonus_expiry_boundary() {
        let bonus = BonusItem {
            angle: 0.0,
            orbit_radius: 180.0,
            diameter: 40.0,
            expires_at_ms: 1_000.0,
        };
        assert!(bonus.is_active(999.0));
        assert!(!bonus.is_expired(999.0));
        // Exactly at expiry: neither drawable nor replaceable
        assert!(!bonus.is_active(1_000.0));
        assert!(!bonus.is_expired(1_000.0));
        assert!(bonus.is_expired(1_000.5));
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut state = GameState::new(800.0, 600.0, Tuning::default());
        state.phase = GamePhase::GameOver;
        state.score = 99;
        state.traffic_speed = 0.5;
        state.bonus_held = true;
        state.player.angle = 3.0;
        state.player.boosting = true;
        state.traffic.push(TrafficUnit {
            angle: 1.0,
            orbit_radius: 180.0,
            size: 20.0,
        });

        state.reset();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.traffic_speed, state.tuning.traffic_base_speed);
        assert!(!state.bonus_held);
        assert!(!state.player.boosting);
        assert_eq!(state.player.angle, 0.0);
        assert!(state.traffic.is_empty());
        assert_eq!(state.height, 600.0);
    }
}

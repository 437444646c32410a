//! Timer-driven entity spawners
//!
//! Both run on their own cadence, independent of the frame loop and of the
//! session phase. Traffic accumulates until the cap and is only ever removed
//! in bulk (restart or bonus use).

use std::f32::consts::TAU;

use rand::Rng;

use super::state::{BonusItem, GameState, TrafficUnit};

/// Add one traffic unit at a random angle if below the cap.
///
/// Returns true if a unit was added.
pub fn spawn_traffic<R: Rng>(state: &mut GameState, rng: &mut R) -> bool {
    if state.traffic.len() >= state.tuning.max_traffic {
        return false;
    }

    let angle = rng.random_range(0.0..TAU);
    state.traffic.push(TrafficUnit {
        angle,
        orbit_radius: state.tuning.orbit_radius(),
        size: state.tuning.traffic_size,
    });
    log::debug!(
        "Traffic spawned at {:.3} rad ({}/{})",
        angle,
        state.traffic.len(),
        state.tuning.max_traffic
    );
    true
}

/// Replace the bonus if the slot is empty or its item has expired.
///
/// Returns true if a new bonus was placed.
pub fn refresh_bonus<R: Rng>(state: &mut GameState, rng: &mut R, now_ms: f64) -> bool {
    if state.bonus.as_ref().is_some_and(|b| !b.is_expired(now_ms)) {
        return false;
    }

    let angle = rng.random_range(0.0..TAU);
    state.bonus = Some(BonusItem {
        angle,
        orbit_radius: state.tuning.orbit_radius(),
        diameter: state.tuning.bonus_diameter,
        expires_at_ms: now_ms + state.tuning.bonus_lifetime_ms,
    });
    log::debug!("Bonus placed at {:.3} rad", angle);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn new_state() -> GameState {
        GameState::new(800.0, 800.0, Tuning::default())
    }

    #[test]
    fn test_six_spawns_cap_at_five() {
        let mut state = new_state();
        let mut rng = Pcg32::seed_from_u64(7);
        let added: Vec<bool> = (0..6).map(|_| spawn_traffic(&mut state, &mut rng)).collect();
        assert_eq!(added, [true, true, true, true, true, false]);
        assert_eq!(state.traffic.len(), 5);
    }

    #[test]
    fn test_spawned_traffic_geometry() {
        let mut state = new_state();
        let mut rng = Pcg32::seed_from_u64(42);
        spawn_traffic(&mut state, &mut rng);
        let unit = &state.traffic[0];
        assert!((0.0..TAU).contains(&unit.angle));
        assert_eq!(unit.orbit_radius, 180.0);
        assert_eq!(unit.size, 20.0);
    }

    #[test]
    fn test_bonus_fills_empty_slot() {
        let mut state = new_state();
        let mut rng = Pcg32::seed_from_u64(1);
        assert!(refresh_bonus(&mut state, &mut rng, 5_000.0));
        let bonus = state.bonus.as_ref().expect("bonus placed");
        assert_eq!(bonus.expires_at_ms, 7_000.0);
        assert_eq!(bonus.diameter, 40.0);
        assert_eq!(bonus.orbit_radius, 180.0);
    }

    #[test]
    fn test_live_bonus_is_kept() {
        let mut state = new_state();
        let mut rng = Pcg32::seed_from_u64(1);
        refresh_bonus(&mut state, &mut rng, 0.0);
        let before = state.bonus.clone();
        assert!(!refresh_bonus(&mut state, &mut rng, 1_500.0));
        assert_eq!(state.bonus, before);
    }

    #[test]
    fn test_expired_bonus_is_replaced() {
        let mut state = new_state();
        let mut rng = Pcg32::seed_from_u64(1);
        refresh_bonus(&mut state, &mut rng, 0.0);
        assert!(refresh_bonus(&mut state, &mut rng, 10_000.0));
        assert_eq!(
            state.bonus.as_ref().map(|b| b.expires_at_ms),
            Some(12_000.0)
        );
    }

    proptest! {
        #[test]
        fn prop_traffic_never_exceeds_cap(seed in any::<u64>(), calls in 0usize..50) {
            let mut state = new_state();
            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..calls {
                spawn_traffic(&mut state, &mut rng);
                prop_assert!(state.traffic.len() <= state.tuning.max_traffic);
            }
            prop_assert_eq!(state.traffic.len(), calls.min(state.tuning.max_traffic));
        }
    }
}

//! Collision detection between orbiting circles
//!
//! Every entity is drawn as a filled circle, so overlap is a plain
//! center-distance test against the mean of the two diameters.

use glam::Vec2;

/// Result of a circle-circle check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    pub hit: bool,
    /// Center-to-center distance
    pub distance: f32,
}

/// Euclidean distance between two points. Order-independent.
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    let d = a - b;
    (d.x * d.x + d.y * d.y).sqrt()
}

/// Check whether two circles given by center and diameter overlap
///
/// Touching exactly (distance equal to the mean diameter) is not a hit.
pub fn circles_overlap(a: Vec2, a_size: f32, b: Vec2, b_size: f32) -> CollisionResult {
    let distance = distance(a, b);
    CollisionResult {
        hit: distance < (a_size + b_size) / 2.0,
        distance,
    }
}

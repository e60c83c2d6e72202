//! Movement primitives shared by AI-driven and player-driven agents
//!
//! One resolver: step toward the target at a bounded speed, snapping exactly
//! onto the target when within reach so positions never oscillate around it.

use crate::core::types::Vec2;

/// Scale applied to simultaneous-axis manual input
pub const DIAGONAL_SCALE: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Advance `position` toward `target` by at most `speed` units.
///
/// When the remaining distance exceeds `speed`, moves exactly `speed` along
/// the normalized direction; otherwise lands exactly on the target.
pub fn step_toward(position: Vec2, target: Vec2, speed: f32) -> Vec2 {
    let delta = target - position;
    let dist = delta.length();
    if dist > speed {
        position + delta.normalize() * speed
    } else {
        target
    }
}

/// Apply one frame of manual axis input.
///
/// `dx`/`dy` are in {-1, 0, 1}. Diagonal input is scaled by 1/sqrt(2) so the
/// travelled distance per frame is direction-independent.
pub fn manual_step(position: Vec2, dx: i8, dy: i8, speed: f32) -> Vec2 {
    let mut effective = speed;
    if dx != 0 && dy != 0 {
        effective *= DIAGONAL_SCALE;
    }
    Vec2::new(
        position.x + f32::from(dx) * effective,
        position.y + f32::from(dy) * effective,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_moves_exactly_speed_when_far() {
        let start = Vec2::new(0.0, 0.0);
        let target = Vec2::new(100.0, 0.0);
        let next = step_toward(start, target, 2.0);
        assert!((next.x - 2.0).abs() < 1e-5);
        assert!(next.y.abs() < 1e-5);
    }

    #[test]
    fn test_step_along_direction() {
        let start = Vec2::new(0.0, 0.0);
        let target = Vec2::new(30.0, 40.0);
        let next = step_toward(start, target, 5.0);
        // 5 units along the (0.6, 0.8) direction
        assert!((next.x - 3.0).abs() < 1e-4);
        assert!((next.y - 4.0).abs() < 1e-4);
    }

    #[test]
    fn test_step_snaps_within_reach() {
        let start = Vec2::new(99.0, 0.0);
        let target = Vec2::new(100.0, 0.0);
        let next = step_toward(start, target, 2.0);
        assert_eq!(next, target);
        // Idempotent once arrived
        assert_eq!(step_toward(next, target, 2.0), target);
    }

    #[test]
    fn test_manual_diagonal_normalized() {
        let next = manual_step(Vec2::default(), 1, 1, 2.0);
        let travelled = next.length();
        assert!((travelled - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_manual_single_axis_full_speed() {
        let next = manual_step(Vec2::default(), 0, -1, 2.0);
        assert_eq!(next, Vec2::new(0.0, -2.0));
    }
}

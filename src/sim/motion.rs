//! Card motion model
//!
//! Pure functions: a released card travels in a straight line back to its
//! rest position, and its tilt is derived from how far it sits from rest.

use glam::Vec2;

use crate::consts::*;
use crate::sign;

/// Move `current` toward `rest` at `speed` units/second for `elapsed` seconds.
///
/// Within [`SNAP_EPSILON`] of rest the result is exactly `rest`. The step is
/// clamped so the card never passes its rest position, whatever `elapsed` is.
pub fn spring_return(current: Vec2, rest: Vec2, elapsed: f32, speed: f32) -> Vec2 {
    let to_rest = rest - current;
    let distance = to_rest.length();
    if distance <= SNAP_EPSILON {
        return rest;
    }

    let step = speed.max(0.0) * elapsed.max(0.0);
    if step >= distance {
        return rest;
    }

    current + to_rest / distance * step
}

/// Tilt in whole degrees for a card at `position` resting at `rest`.
///
/// Cards right of rest lean counter-clockwise (negative), cards left of rest
/// lean clockwise. The magnitude ramps linearly up to [`MAX_TILT`] at
/// [`TILT_FULL_DISTANCE`] and stays there.
pub fn tilt_angle(position: Vec2, rest: Vec2) -> i32 {
    let offset = position - rest;
    let distance = offset.length();
    let factor = (distance / TILT_FULL_DISTANCE).min(1.0) * sign(offset.x) * -1.0;
    (MAX_TILT * factor).round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const REST: Vec2 = Vec2::new(240.0, 410.0);

    #[test]
    fn test_snap_within_epsilon() {
        let near = REST + Vec2::new(2.0, -2.0);
        assert_eq!(spring_return(near, REST, 0.0, RETURN_SPEED), REST);
        assert_eq!(spring_return(REST, REST, 1.0 / 60.0, RETURN_SPEED), REST);
    }

    #[test]
    fn test_moves_along_straight_line() {
        let start = REST + Vec2::new(120.0, 0.0);
        let next = spring_return(start, REST, 0.1, 600.0);
        assert!((next.x - (REST.x + 60.0)).abs() < 0.001);
        assert_eq!(next.y, REST.y);
    }

    #[test]
    fn test_large_step_clamps_to_rest() {
        let start = REST + Vec2::new(-30.0, 40.0);
        assert_eq!(spring_return(start, REST, 10.0, 600.0), REST);
    }

    #[test]
    fn test_tilt_direction_and_saturation() {
        assert_eq!(tilt_angle(REST, REST), 0);
        assert_eq!(tilt_angle(REST + Vec2::new(120.0, 0.0), REST), -15);
        assert_eq!(tilt_angle(REST + Vec2::new(-120.0, 0.0), REST), 15);
        // Halfway to full tilt: 7.5 rounds away from zero
        assert_eq!(tilt_angle(REST + Vec2::new(25.0, 0.0), REST), -8);
    }

    #[test]
    fn test_tilt_zero_on_vertical_axis() {
        // Straight above rest there is no horizontal sign, so no tilt
        assert_eq!(tilt_angle(REST + Vec2::new(0.0, -200.0), REST), 0);
    }

    proptest! {
        #[test]
        fn prop_return_never_moves_away(
            dx in -2000.0f32..2000.0,
            dy in -2000.0f32..2000.0,
            elapsed in 0.0f32..5.0,
        ) {
            let start = REST + Vec2::new(dx, dy);
            let before = start.distance(REST);
            let after = spring_return(start, REST, elapsed, RETURN_SPEED).distance(REST);
            prop_assert!(after <= before + 1e-3);
        }

        #[test]
        fn prop_snap_is_exact(dx in -2.1f32..2.1, dy in -2.1f32..2.1, elapsed in 0.0f32..1.0) {
            prop_assert_eq!(spring_return(REST + Vec2::new(dx, dy), REST, elapsed, RETURN_SPEED), REST);
        }

        #[test]
        fn prop_tilt_is_bounded(dx in -5000.0f32..5000.0, dy in -5000.0f32..5000.0) {
            let tilt = tilt_angle(REST + Vec2::new(dx, dy), REST);
            prop_assert!(tilt.abs() <= MAX_TILT as i32);
        }

        #[test]
        fn prop_tilt_mirror_symmetry(dx in -500.0f32..500.0, dy in -500.0f32..500.0) {
            let right = tilt_angle(REST + Vec2::new(dx, dy), REST);
            let left = tilt_angle(REST + Vec2::new(-dx, dy), REST);
            prop_assert_eq!(right, -left);
        }
    }
}

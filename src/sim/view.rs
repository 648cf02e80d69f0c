//! State-to-screen projection helpers
//!
//! Pure functions of simulation state so renderers stay headless-testable.
//! Screen space is y-down pixels; the caller supplies the scale and the
//! pivot height (top of the cart body).

use glam::Vec2;

use super::state::{PhysicsParams, SimState};

/// Pendulum pivot in screen space: the cart position scaled to pixels at the
/// caller-supplied pivot height. Horizontal origin is the track center; the
/// caller offsets by half the screen width if it wants screen coordinates.
#[inline]
pub fn cart_pivot(cart_x: f32, pixels_per_meter: f32, pivot_y: f32) -> Vec2 {
    Vec2::new(cart_x * pixels_per_meter, pivot_y)
}

/// Pendulum tip position from a pivot point and pole length (same units as
/// the pivot):
///
/// `tip_x = pivot_x + len * sin(angle)`, `tip_y = pivot_y - len * cos(angle)`
#[inline]
pub fn pole_tip(pivot: Vec2, pole_length: f32, pole_angle: f32) -> Vec2 {
    Vec2::new(
        pivot.x + pole_length * pole_angle.sin(),
        pivot.y - pole_length * pole_angle.cos(),
    )
}

/// Pendulum tip in screen space for the current state
pub fn tip_screen_position(
    state: &SimState,
    params: &PhysicsParams,
    pixels_per_meter: f32,
    pivot_y: f32,
) -> Vec2 {
    let pivot = cart_pivot(state.cart_x, pixels_per_meter, pivot_y);
    pole_tip(pivot, params.pole_length * pixels_per_meter, state.pole_angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_upright_tip_is_directly_above_pivot() {
        let tip = pole_tip(Vec2::new(100.0, 300.0), 150.0, 0.0);
        assert_eq!(tip.x, 100.0);
        assert_eq!(tip.y, 150.0);
    }

    #[test]
    fn test_horizontal_tip_at_pivot_height() {
        let tip = pole_tip(Vec2::new(0.0, 300.0), 150.0, FRAC_PI_2);
        assert!((tip.x - 150.0).abs() < 1e-3);
        assert!((tip.y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_inverted_tip_hangs_below() {
        let tip = pole_tip(Vec2::new(0.0, 300.0), 150.0, PI);
        assert!(tip.x.abs() < 1e-3);
        assert!((tip.y - 450.0).abs() < 1e-3);
    }

    #[test]
    fn test_tip_screen_position_scales_cart() {
        let mut state = SimState::upright();
        state.cart_x = 2.0;
        let params = PhysicsParams::default();

        let tip = tip_screen_position(&state, &params, 150.0, 445.0);
        assert_eq!(tip.x, 300.0);
        assert_eq!(tip.y, 445.0 - 150.0);
    }
}

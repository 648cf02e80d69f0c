//! Simulation state and physical constants
//!
//! All state that must be snapshotted for rendering/replay lives here.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Immutable physical constants for a run
///
/// Values are in "game units" (meters-ish), not exact SI. Defaults reproduce
/// the original tuning; override through [`crate::SimConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsParams {
    /// Gravitational acceleration
    pub gravity: f32,
    /// Pendulum length from pivot to tip
    pub pole_length: f32,
    /// Fraction of angular velocity removed each step
    pub angular_damping: f32,
    /// Force magnitude applied per held direction input
    pub cart_accel: f32,
    /// Fraction of cart velocity retained each step
    pub cart_damping: f32,
    /// Hard clamp on cart position (left limit)
    pub cart_min_x: f32,
    /// Hard clamp on cart position (right limit)
    pub cart_max_x: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            pole_length: POLE_LENGTH,
            angular_damping: ANGULAR_DAMPING,
            cart_accel: CART_ACCEL,
            cart_damping: CART_DAMPING,
            cart_min_x: -CART_BOUND,
            cart_max_x: CART_BOUND,
        }
    }
}

/// Complete simulation state (deterministic, serializable)
///
/// Exclusively owned by the driving loop; mutated only by [`super::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    /// Horizontal cart position, meters from track center
    pub cart_x: f32,
    /// Horizontal cart velocity
    pub cart_vel: f32,
    /// Pole angle from vertical upright (radians, 0 = balanced).
    /// Unbounded: accumulates over time, never normalized.
    pub pole_angle: f32,
    /// Rate of change of `pole_angle`
    pub pole_angular_vel: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl SimState {
    /// Create a state at rest with the given initial pole lean
    pub fn new(initial_pole_angle: f32) -> Self {
        Self {
            cart_x: 0.0,
            cart_vel: 0.0,
            pole_angle: initial_pole_angle,
            pole_angular_vel: 0.0,
            time_ticks: 0,
        }
    }

    /// State balanced exactly upright at rest (unstable equilibrium)
    pub fn upright() -> Self {
        Self::new(0.0)
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(INITIAL_POLE_ANGLE)
    }
}

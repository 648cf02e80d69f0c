//! Fixed timestep simulation step
//!
//! Explicit Euler integration of an inverted pendulum on a driven cart,
//! single substep per call. Deterministic: identical `(state, dt, force)`
//! always produces identical results.

use super::control::TickInput;
use super::state::{PhysicsParams, SimState};

/// Advance the physics by one timestep under the given cart force.
///
/// Pure integrator: no allocation, no failure modes. `dt` is trusted as-is;
/// callers must keep it small (nominally 1/60 s) for the explicit-Euler
/// scheme to stay stable. Large deltas visibly destabilize the pendulum,
/// which is modeled behavior, not something to clamp away here.
///
/// The cart position intentionally accumulates raw velocity each step
/// (`cart_x += cart_vel`, no `dt` factor), reproducing the original tuning.
/// Cart travel is therefore proportional to step count, not simulated time.
pub fn step(state: &mut SimState, params: &PhysicsParams, dt: f32, force: f32) {
    // Cart: force impulse, then horizontal drag, then position
    state.cart_vel += force * dt;
    state.cart_vel *= params.cart_damping;
    state.cart_x += state.cart_vel;

    // Pole: gravity torque destabilizes, cart acceleration corrects.
    // Linearized-base-motion approximation; pole_angle = 0 is the unstable
    // upright equilibrium.
    let angular_accel = (params.gravity / params.pole_length) * state.pole_angle.sin()
        - (force / params.pole_length) * state.pole_angle.cos();
    state.pole_angular_vel += angular_accel * dt;
    state.pole_angular_vel *= 1.0 - params.angular_damping;
    state.pole_angle += state.pole_angular_vel * dt;

    // Track limits absorb, they don't bounce
    if state.cart_x < params.cart_min_x {
        state.cart_x = params.cart_min_x;
        state.cart_vel = 0.0;
    }
    if state.cart_x > params.cart_max_x {
        state.cart_x = params.cart_max_x;
        state.cart_vel = 0.0;
    }
}

/// Bang-bang balance policy: push the cart toward the side the pole is
/// falling to. Leads the angle with a fraction of the angular velocity so it
/// reacts before the lean grows.
fn autopilot_input(state: &SimState) -> TickInput {
    let lean = state.pole_angle + 0.35 * state.pole_angular_vel;
    let deadband = 0.002;
    TickInput {
        left: lean < -deadband,
        right: lean > deadband,
        autopilot: true,
    }
}

/// Advance the simulation by one fixed timestep.
///
/// Resolves input to a force (autopilot substitutes its own directions),
/// integrates, and advances the tick counter.
pub fn tick(state: &mut SimState, params: &PhysicsParams, input: &TickInput, dt: f32) {
    let input = if input.autopilot {
        autopilot_input(state)
    } else {
        *input
    };

    let force = input.applied_force(params.cart_accel);
    step(state, params, dt, force);
    state.time_ticks += 1;
}

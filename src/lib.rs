//! Cart-Pole - an inverted pendulum balancing on a moving cart
//!
//! Core modules:
//! - `sim`: Deterministic simulation (cart/pendulum physics, control mapping)
//! - `config`: Overridable physical constants and timestep
//! - `runner`: Fixed-timestep driving loop
//!
//! The `sim` module has no rendering or platform dependencies; a renderer
//! consumes read-only state snapshots plus the projection helpers in
//! [`sim::view`].

pub mod config;
pub mod runner;
pub mod sim;

pub use config::SimConfig;
pub use runner::Runner;

/// Simulation constants and rendering hints
pub mod consts {
    /// Fixed simulation timestep (60 Hz frame clock)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Physics defaults ("game units", not exact SI)
    pub const GRAVITY: f32 = 9.81;
    pub const POLE_LENGTH: f32 = 1.0;
    /// Fraction of angular velocity removed each step (pivot friction)
    pub const ANGULAR_DAMPING: f32 = 0.01;
    /// Force magnitude applied while a direction key is held
    pub const CART_ACCEL: f32 = 8.0;
    /// Fraction of cart velocity retained each step (horizontal drag)
    pub const CART_DAMPING: f32 = 0.98;
    /// Cart travel limit either side of center (meters)
    pub const CART_BOUND: f32 = 350.0 / PIXELS_PER_METER;
    /// Initial pole lean (radians, 5 degrees off vertical)
    pub const INITIAL_POLE_ANGLE: f32 = 5.0 * std::f32::consts::PI / 180.0;

    /// World scale for rendering: 1 m = 150 px
    pub const PIXELS_PER_METER: f32 = 150.0;

    /// Screen geometry hints (presentation only, unused by the integrator)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Ground line height above the bottom edge
    pub const GROUND_MARGIN: f32 = 100.0;

    /// Cart body rendering hints (pixels)
    pub const CART_WIDTH: f32 = 100.0;
    pub const CART_HEIGHT: f32 = 40.0;
    pub const WHEEL_RADIUS: f32 = 15.0;
}

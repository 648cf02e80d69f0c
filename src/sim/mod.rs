//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - State mutated only through [`tick::step`] / [`tick::tick`]
//! - No rendering or platform dependencies

pub mod control;
pub mod state;
pub mod tick;
pub mod view;

pub use control::TickInput;
pub use state::{PhysicsParams, SimState};
pub use tick::{step, tick};
pub use view::{cart_pivot, pole_tip, tip_screen_position};

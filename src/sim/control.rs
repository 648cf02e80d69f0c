//! Input commands and control-to-force mapping
//!
//! Decouples the input device (keyboard, script, balance controller) from the
//! integrator: whatever sets the direction flags, the integrator only ever
//! sees a scalar force.

/// Input commands for a single tick (deterministic)
///
/// Direction flags mirror held arrow keys, sampled once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Push the cart left
    pub left: bool,
    /// Push the cart right
    pub right: bool,
    /// Autopilot mode - a bang-bang controller balances the pole
    pub autopilot: bool,
}

impl TickInput {
    /// Map held directions to a signed cart force.
    ///
    /// Left wins when both directions are held (left is evaluated first).
    /// Pure and stateless; any force-producing policy can stand in for it.
    pub fn applied_force(&self, cart_accel: f32) -> f32 {
        if self.left {
            -cart_accel
        } else if self.right {
            cart_accel
        } else {
            0.0
        }
    }
}

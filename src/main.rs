//! Cart-Pole entry point
//!
//! Headless demo driver: loads the config, runs the simulation under the
//! autopilot at a fixed 60 Hz, and logs state once per simulated second.
//! A graphical front end would use the same [`Runner`], feeding it real
//! frame deltas and keyboard state instead.

use cart_pole::consts::{GROUND_MARGIN, PIXELS_PER_METER, SCREEN_HEIGHT, SIM_DT};
use cart_pole::sim::tip_screen_position;
use cart_pole::{Runner, SimConfig};

const CONFIG_PATH: &str = "cartpole.json";
const DEMO_SECONDS: u32 = 30;

fn main() {
    env_logger::init();
    log::info!("Cart-Pole starting...");

    let config = SimConfig::load(CONFIG_PATH);
    let mut runner = Runner::new(config);
    runner.input.autopilot = true;

    let pivot_y = SCREEN_HEIGHT - GROUND_MARGIN - cart_pole::consts::CART_HEIGHT
        - cart_pole::consts::WHEEL_RADIUS;

    for frame in 0..(DEMO_SECONDS * 60) {
        runner.update(SIM_DT);

        if frame % 60 == 0 {
            let state = &runner.state;
            let tip = tip_screen_position(state, &config.physics, PIXELS_PER_METER, pivot_y);
            log::info!(
                "t={:>3}s cart_x={:+.3} m cart_vel={:+.3} angle={:+.4} rad tip=({:.0}, {:.0}) px",
                frame / 60,
                state.cart_x,
                state.cart_vel,
                state.pole_angle,
                tip.x,
                tip.y,
            );
        }
    }

    let state = &runner.state;
    log::info!(
        "Done after {} ticks: angle={:+.4} rad, cart_x={:+.3} m",
        state.time_ticks,
        state.pole_angle,
        state.cart_x,
    );
}

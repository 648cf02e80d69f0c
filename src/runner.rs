//! Fixed-timestep driving loop
//!
//! Owns the simulation state exclusively and feeds it fixed deltas through
//! a frame-time accumulator: variable frame times in, a whole number of
//! fixed-size ticks out. Input polling, rendering, and quit handling stay
//! with the caller; per tick it only needs `update` and read access to
//! `state`.

use crate::config::SimConfig;
use crate::consts::MAX_SUBSTEPS;
use crate::sim::{self, SimState, TickInput};

/// Hosts the simulation between frames
#[derive(Debug, Clone)]
pub struct Runner {
    pub state: SimState,
    pub config: SimConfig,
    /// Direction flags for the next ticks; the caller refreshes these from
    /// its input device once per frame.
    pub input: TickInput,
    accumulator: f32,
}

impl Runner {
    pub fn new(config: SimConfig) -> Self {
        Self {
            state: config.initial_state(),
            config,
            input: TickInput::default(),
            accumulator: 0.0,
        }
    }

    /// Run simulation ticks for one rendered frame.
    ///
    /// `frame_dt` is the wall-clock frame time in seconds; it is capped so a
    /// stalled frame cannot queue an unbounded amount of catch-up work.
    /// Returns the number of ticks executed.
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = frame_dt.min(0.1);
        self.accumulator += frame_dt;

        let dt = self.config.fixed_dt;
        let mut substeps = 0;
        while self.accumulator >= dt && substeps < MAX_SUBSTEPS {
            sim::tick(&mut self.state, &self.config.physics, &self.input, dt);
            self.accumulator -= dt;
            substeps += 1;
        }
        substeps
    }

    /// Reset to the configured initial state
    pub fn restart(&mut self) {
        self.state = self.config.initial_state();
        self.input = TickInput::default();
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_frame_one_tick() {
        let config = SimConfig::default();
        let mut runner = Runner::new(config);

        assert_eq!(runner.update(config.fixed_dt), 1);
        assert_eq!(runner.state.time_ticks, 1);
    }

    #[test]
    fn test_short_frames_accumulate() {
        let config = SimConfig::default();
        let mut runner = Runner::new(config);

        // Half a timestep: no tick yet, carried into the next frame
        assert_eq!(runner.update(config.fixed_dt * 0.5), 0);
        assert_eq!(runner.update(config.fixed_dt * 0.5), 1);
    }

    #[test]
    fn test_stalled_frame_caps_substeps() {
        let config = SimConfig::default();
        let mut runner = Runner::new(config);

        // A 10 s stall is capped to 0.1 s of catch-up, then the substep
        // limit applies
        let ticks = runner.update(10.0);
        assert!(ticks <= MAX_SUBSTEPS);
    }

    #[test]
    fn test_restart_restores_initial_state() {
        let config = SimConfig::default();
        let mut runner = Runner::new(config);
        runner.input.right = true;

        for _ in 0..120 {
            runner.update(config.fixed_dt);
        }
        assert_ne!(runner.state, config.initial_state());

        runner.restart();
        assert_eq!(runner.state, config.initial_state());
        assert_eq!(runner.input, TickInput::default());
    }

    #[test]
    fn test_two_runners_replay_identically() {
        let config = SimConfig::default();
        let mut a = Runner::new(config);
        let mut b = Runner::new(config);
        a.input.autopilot = true;
        b.input.autopilot = true;

        for _ in 0..600 {
            a.update(config.fixed_dt);
            b.update(config.fixed_dt);
        }

        assert_eq!(a.state.pole_angle.to_bits(), b.state.pole_angle.to_bits());
        assert_eq!(a.state.cart_x.to_bits(), b.state.cart_x.to_bits());
    }
}

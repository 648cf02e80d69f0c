//! Simulation configuration
//!
//! The only configuration surface of the core: default physical constants
//! plus the fixed timestep and the initial pole lean, overridable from a
//! JSON file. Malformed or missing files fall back to defaults with a log
//! message rather than failing the run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{INITIAL_POLE_ANGLE, SIM_DT};
use crate::sim::{PhysicsParams, SimState};

/// Overridable run configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Physical constants for the integrator
    pub physics: PhysicsParams,
    /// Fixed timestep the runner integrates at (seconds)
    pub fixed_dt: f32,
    /// Pole lean at start/restart (radians)
    pub initial_pole_angle: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsParams::default(),
            fixed_dt: SIM_DT,
            initial_pole_angle: INITIAL_POLE_ANGLE,
        }
    }
}

impl SimConfig {
    /// Fresh simulation state for this configuration
    pub fn initial_state(&self) -> SimState {
        SimState::new(self.initial_pole_angle)
    }

    /// Load from a JSON file, falling back to defaults if the file is
    /// missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring malformed config {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write the configuration as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_consts() {
        let config = SimConfig::default();
        assert_eq!(config.fixed_dt, 1.0 / 60.0);
        assert_eq!(config.initial_pole_angle, INITIAL_POLE_ANGLE);
        assert_eq!(config.physics, PhysicsParams::default());
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let config = SimConfig::load("/nonexistent/cartpole.json");
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config: SimConfig = serde_json::from_str(r#"{"fixed_dt": 0.01}"#).unwrap();
        assert_eq!(config.fixed_dt, 0.01);
        assert_eq!(config.physics, PhysicsParams::default());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let mut config = SimConfig::default();
        config.physics.gravity = 3.71;
        config.initial_pole_angle = 0.2;

        let path = std::env::temp_dir().join("cart_pole_config_roundtrip.json");
        config.save(&path).unwrap();
        let back = SimConfig::load(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(config, back);
    }
}

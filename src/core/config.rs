//! Tunable constants for the simulation, loadable from JSON
//!
//! Every field has a default, so an empty object (or no config at all)
//! yields the stock look.

use std::f32::consts::PI;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Failure to load or validate a [`Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Simulation and presentation settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Age (ms) at which a particle is pruned
    pub max_particle_life: f32,
    /// Particles closer than this are connected by a line
    pub max_particle_range: f32,
    /// Per-step velocity multiplier, must lie in (0, 1)
    pub dampening: f32,
    /// Wall-clock period of the spawn timer
    pub spawn_interval_ms: u32,
    /// Particles created per spawn tick
    pub spawn_batch: usize,
    /// Distance below the bottom edge at which particles appear
    pub spawn_depth: f32,
    pub min_speed: f32,
    pub max_speed: f32,
    /// Launch angle range in radians
    pub min_angle: f32,
    pub max_angle: f32,
    /// Re-query the viewport on spawn ticks while unmeasured
    pub retry_measure_on_tick: bool,
    /// Fixed RNG seed; entropy when absent
    pub seed: Option<u64>,
    /// Banner text shown over the mesh
    pub banner: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_particle_life: 5000.0,
            max_particle_range: 200.0,
            dampening: 0.99,
            spawn_interval_ms: 500,
            spawn_batch: 2,
            spawn_depth: 50.0,
            min_speed: 0.075,
            max_speed: 0.5,
            min_angle: PI / 6.0,
            max_angle: 5.0 * PI / 6.0,
            retry_measure_on_tick: false,
            seed: None,
            banner: "ember mesh".to_string(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        debug!(?config, "Config loaded");
        Ok(config)
    }

    /// Read a JSON file from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dampening > 0.0 && self.dampening < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "dampening must be in (0, 1), got {}",
                self.dampening
            )));
        }
        if self.max_particle_life <= 0.0 {
            return Err(ConfigError::Invalid("max_particle_life must be > 0".into()));
        }
        if self.max_particle_range <= 0.0 {
            return Err(ConfigError::Invalid("max_particle_range must be > 0".into()));
        }
        if self.spawn_batch == 0 {
            return Err(ConfigError::Invalid("spawn_batch must be > 0".into()));
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::Invalid("spawn_interval_ms must be > 0".into()));
        }
        if self.min_speed < 0.0 || self.min_speed > self.max_speed {
            return Err(ConfigError::Invalid(format!(
                "speed range [{}, {}] is empty or negative",
                self.min_speed, self.max_speed
            )));
        }
        if self.min_angle > self.max_angle {
            return Err(ConfigError::Invalid(format!(
                "angle range [{}, {}] is inverted",
                self.min_angle, self.max_angle
            )));
        }
        Ok(())
    }
}

//! Layered configuration.
//!
//! Built-in defaults, then an optional config file, then `SORTSCOPE_*`
//! environment variables. Command-line flags are applied on top by the binary.
//!
//! ```toml
//! # sortscope.toml
//! array_len = 80
//! max_value = 120
//! speed = 0.05
//! algorithm = "merge"
//! ```

use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::data::ValueRange;
use crate::sort::Algorithm;

/// Prefix for environment overrides (e.g. `SORTSCOPE_SPEED=0.02`).
pub const ENV_PREFIX: &str = "SORTSCOPE";

/// Runtime settings for data generation and playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Number of values generated by "Generate Data".
    pub array_len: usize,
    /// Smallest generated value.
    pub min_value: u32,
    /// Largest generated value; also the chart's full height.
    pub max_value: u32,
    /// Initial step delay in seconds.
    pub speed: f64,
    /// Lower bound of the speed control, in seconds.
    pub min_speed: f64,
    /// Upper bound of the speed control, in seconds.
    pub max_speed: f64,
    /// Amount one `+`/`-` key press changes the speed by, in seconds.
    pub speed_step: f64,
    /// Algorithm selected at startup.
    pub algorithm: Algorithm,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            array_len: 60,
            min_value: 5,
            max_value: 100,
            speed: 0.1,
            min_speed: 0.001,
            max_speed: 0.5,
            speed_step: 0.01,
            algorithm: Algorithm::Bubble,
        }
    }
}

impl Settings {
    /// Load settings from an optional file plus the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with(path, Environment::with_prefix(ENV_PREFIX))
    }

    fn load_with(path: Option<&Path>, environment: Environment) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let settings: Settings = builder
            .add_source(environment.try_parsing(true))
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    /// Reject ranges the UI could not honor.
    pub fn validate(&self) -> Result<()> {
        if self.min_value > self.max_value {
            bail!(
                "min_value ({}) must not exceed max_value ({})",
                self.min_value,
                self.max_value
            );
        }
        if self.max_value == 0 {
            bail!("max_value must be positive");
        }
        for (name, value) in [
            ("speed", self.speed),
            ("min_speed", self.min_speed),
            ("max_speed", self.max_speed),
            ("speed_step", self.speed_step),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("{} must be a non-negative number of seconds, got {}", name, value);
            }
            if Duration::try_from_secs_f64(value).is_err() {
                bail!("{} must be a representable number of seconds, got {}", name, value);
            }
        }
        if self.min_speed > self.max_speed {
            bail!(
                "min_speed ({}) must not exceed max_speed ({})",
                self.min_speed,
                self.max_speed
            );
        }
        if self.speed < self.min_speed || self.speed > self.max_speed {
            bail!(
                "speed ({}) must lie within [{}, {}]",
                self.speed,
                self.min_speed,
                self.max_speed
            );
        }
        if self.speed_step == 0.0 {
            bail!("speed_step must be positive");
        }
        Ok(())
    }

    pub fn value_range(&self) -> ValueRange {
        ValueRange {
            min: self.min_value,
            max: self.max_value,
        }
    }

    /// The initial step delay.
    ///
    /// Saturates at [`Duration::MAX`] for values [`Settings::validate`] rejects.
    pub fn speed(&self) -> Duration {
        Duration::try_from_secs_f64(self.speed).unwrap_or(Duration::MAX)
    }

    /// Clamp a requested speed (in seconds) into the configured bounds.
    pub fn clamp_speed(&self, secs: f64) -> f64 {
        secs.clamp(self.min_speed, self.max_speed)
    }
}

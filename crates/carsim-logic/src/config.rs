//! Simulation tuning - resource maxima and per-turn depletion.
//!
//! `SimulationConfig::default()` is the standard game: 20 energy, 20 gas,
//! starvation at 16 hunger, 1-5 points of energy and gas lost per turn and
//! 2 points of hunger gained. A JSON file may override any subset of fields.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const MAX_ENERGY: i32 = 20;
pub const MAX_GAS: i32 = 20;
/// Hunger at which the driver starves.
pub const MAX_HUNGER: i32 = 16;
pub const MIN_DEPLETION: i32 = 1;
pub const MAX_DEPLETION: i32 = 5;
pub const HUNGER_PER_TURN: i32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Energy after resting.
    pub max_energy: i32,
    /// Gas after refueling.
    pub max_gas: i32,
    /// Upper clamp for hunger.
    pub max_hunger: i32,
    /// Smallest random energy/gas loss per turn (inclusive).
    pub min_depletion: i32,
    /// Largest random energy/gas loss per turn (inclusive).
    pub max_depletion: i32,
    /// Hunger added by every turn that isn't spent eating.
    pub hunger_per_turn: i32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_energy: MAX_ENERGY,
            max_gas: MAX_GAS,
            max_hunger: MAX_HUNGER,
            min_depletion: MIN_DEPLETION,
            max_depletion: MAX_DEPLETION,
            hunger_per_turn: HUNGER_PER_TURN,
        }
    }
}

impl SimulationConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimulationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = match Self::from_json_str(&json) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("rejecting config {}: {}", path.display(), e);
                return Err(e);
            }
        };
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Check the ranges the dispatcher and evolution function rely on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_energy <= 0 || self.max_gas <= 0 || self.max_hunger <= 0 {
            return Err(ConfigError::Invalid(format!(
                "maxima must be positive (energy {}, gas {}, hunger {})",
                self.max_energy, self.max_gas, self.max_hunger
            )));
        }
        if self.min_depletion < 1 {
            return Err(ConfigError::Invalid(format!(
                "min_depletion must be at least 1, got {}",
                self.min_depletion
            )));
        }
        if self.min_depletion > self.max_depletion {
            return Err(ConfigError::Invalid(format!(
                "min_depletion {} exceeds max_depletion {}",
                self.min_depletion, self.max_depletion
            )));
        }
        if self.hunger_per_turn < 0 {
            return Err(ConfigError::Invalid(format!(
                "hunger_per_turn must not be negative, got {}",
                self.hunger_per_turn
            )));
        }
        Ok(())
    }

    /// A fresh status with every resource at its best value.
    pub fn full_status(&self) -> crate::status::Status {
        crate::status::Status::new(self.max_energy, self.max_gas, 0)
    }
}

/// Errors that can occur while loading a config
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "Config parse error: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

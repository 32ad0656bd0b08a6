//! Encounter configuration
//!
//! Loaded from TOML; every field has a default so an empty file is valid.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{Result, SimError};
use crate::core::rng::INSTANT_KILL_CHANCE;
use crate::core::types::{ID_RANGE_MAX, ID_RANGE_MIN};
use crate::engagement::EngagementRules;

/// Configuration for an encounter run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncounterConfig {
    /// Seed for the encounter RNG; a random seed is drawn when absent
    pub seed: Option<u64>,

    /// Number of full rounds to run over the roster
    pub rounds: u32,

    /// Probability that the first creature of an engagement is instantly
    /// reduced to zero life before the weapon comparison
    pub instant_kill_chance: f64,

    /// Inclusive lower bound for generated ids
    pub id_min: u32,

    /// Inclusive upper bound for generated ids
    pub id_max: u32,
}

impl Default for EncounterConfig {
    fn default() -> Self {
        Self {
            seed: None,
            rounds: 3,
            instant_kill_chance: INSTANT_KILL_CHANCE,
            id_min: ID_RANGE_MIN,
            id_max: ID_RANGE_MAX,
        }
    }
}

impl EncounterConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: EncounterConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!("Loaded encounter config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.instant_kill_chance) {
            return Err(SimError::InvalidConfig(format!(
                "instant_kill_chance ({}) must be within [0, 1]",
                self.instant_kill_chance
            )));
        }

        if self.id_min == 0 {
            return Err(SimError::InvalidConfig("id_min must be positive".into()));
        }

        if self.id_min > self.id_max {
            return Err(SimError::InvalidConfig(format!(
                "id_min ({}) should be <= id_max ({})",
                self.id_min, self.id_max
            )));
        }

        Ok(())
    }

    /// Engagement rules derived from this config
    pub fn rules(&self) -> EngagementRules {
        EngagementRules {
            instant_kill_chance: self.instant_kill_chance,
        }
    }
}

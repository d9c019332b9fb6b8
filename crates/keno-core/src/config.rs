//! Keno engine configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::paytable::PrizeTable;
use crate::timing::TimingConfig;

/// Engine configuration
///
/// Every field has a default, so a config file only needs the parts it
/// changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KenoConfig {
    /// Game name
    pub name: String,
    /// Prize table used for every round
    pub prize_table: PrizeTable,
    /// Reveal pacing
    pub timing: TimingConfig,
    /// Start sessions with cheat mode on
    pub cheat_mode: bool,
    /// Fixed RNG seed for reproducible draws
    pub seed: Option<u64>,
}

impl Default for KenoConfig {
    fn default() -> Self {
        Self {
            name: "Keno".into(),
            prize_table: PrizeTable::standard(),
            timing: TimingConfig::normal(),
            cheat_mode: false,
            seed: None,
        }
    }
}

impl KenoConfig {
    /// Deterministic config with instant timing, for tests and simulations
    pub fn headless(seed: u64) -> Self {
        Self {
            name: "Headless Keno".into(),
            timing: TimingConfig::instant(),
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; `.yaml`/`.yml` are read as YAML, anything else as JSON
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        if is_yaml {
            Self::from_yaml(&text)
        } else {
            Self::from_json(&text)
        }
    }

    /// Export as pretty JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject negative or non-finite timings
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.timing;
        let delays = [t.reveal_interval_ms, t.settle_delay_ms, t.result_delay_ms];
        if delays.iter().any(|ms| !ms.is_finite() || *ms < 0.0) {
            return Err(ConfigError::Invalid(
                "timing values must be finite and not negative".into(),
            ));
        }
        Ok(())
    }
}

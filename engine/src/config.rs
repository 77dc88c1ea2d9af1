//! Configuration
//!
//! Defaults for the helpers that take tunable numbers. `Default` matches the
//! values the helpers were tuned with; a JSON file can override any subset.
//!
//! ```json
//! { "gravity": 9.81, "facing_speed": 5.0, "pulse_strength": 0.1, "pulse_duration": 0.1 }
//! ```

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineExtConfig {
    /// Downward gravity magnitude for trajectory solving (m/s²)
    pub gravity: f32,
    /// Slerp rate used when facing the pointer (per second)
    pub facing_speed: f32,
    /// Time scale held during a pulse
    pub pulse_strength: f32,
    /// Real seconds a pulse lasts
    pub pulse_duration: f32,
}

impl Default for EngineExtConfig {
    fn default() -> Self {
        Self {
            gravity: 9.81,
            facing_speed: 5.0,
            pulse_strength: 0.1,
            pulse_duration: 0.1,
        }
    }
}

impl EngineExtConfig {
    /// Parse and validate a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        info!("[EngineExtConfig] Loaded {}", path.display());
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every value must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("gravity", self.gravity),
            ("facing_speed", self.facing_speed),
            ("pulse_strength", self.pulse_strength),
            ("pulse_duration", self.pulse_duration),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidConfig(format!("{name} = {value}")));
            }
        }
        Ok(())
    }
}

//! Engine configuration
//!
//! Loaded from YAML:
//!
//! ```yaml
//! max_input_digits: 12
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Engine settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Maximum number of digits a typed number may hold (`None` = unbounded)
    pub max_input_digits: Option<usize>,
}

impl EngineConfig {
    /// Creates the default configuration (no input cap)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input cap
    #[must_use]
    pub const fn with_max_input_digits(mut self, max: Option<usize>) -> Self {
        self.max_input_digits = max;
        self
    }

    /// Parses a YAML document
    pub fn from_yaml_str(yaml: &str) -> CalcResult<Self> {
        let config: Self =
            serde_yaml_ng::from_str(yaml).map_err(|e| CalcError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a YAML file
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| CalcError::Config(format!("{}: {e}", path.display())))?;
        let config = Self::from_yaml_str(&text)?;
        tracing::info!(path = %path.display(), ?config, "loaded engine config");
        Ok(config)
    }

    /// Rejects settings the engine cannot honour
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_input_digits == Some(0) {
            return Err(CalcError::Config(
                "max_input_digits must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

//! Engine configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all)
//! yields the stock behavior: a 100px floor and scroll suppression while a
//! drag is in progress.

use crate::constants::MIN_PANEL_HEIGHT;
use crate::error::{ResizeError, ResizeResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResizeConfig {
    /// Hard floor for panel height in pixels. There is no ceiling.
    pub min_height: f32,
    /// Mark move events as default-prevented while a session consumes them,
    /// so the host can suppress page scrolling during a touch drag.
    pub prevent_default_on_move: bool,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            min_height: MIN_PANEL_HEIGHT,
            prevent_default_on_move: true,
        }
    }
}

impl ResizeConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json_str(json: &str) -> ResizeResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> ResizeResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::debug!(path = %path.display(), min_height = config.min_height, "loaded resize config");
        Ok(config)
    }

    pub fn validate(&self) -> ResizeResult<()> {
        if !self.min_height.is_finite() {
            return Err(ResizeError::InvalidConfig(format!(
                "min_height must be finite, got {}",
                self.min_height
            )));
        }
        if self.min_height < 0.0 {
            return Err(ResizeError::InvalidConfig(format!(
                "min_height must not be negative, got {}",
                self.min_height
            )));
        }
        Ok(())
    }
}

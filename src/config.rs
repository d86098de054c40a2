// src/config.rs

//! JSON configuration for the demo binary.
//!
//! Every field is optional; missing fields fall back to the defaults of
//! [`DemoConfig`] and [`GeneratorConfig`]. Example:
//!
//! ```json
//! { "variant": "player", "generator": { "tile_size": 20, "seed": 42 } }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::demo::Variant;
use crate::generator::{GeneratorConfig, GeneratorError};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] GeneratorError),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub variant: Variant,
    pub generator: GeneratorConfig,
    /// Overrides the variant's own window title.
    pub window_title: Option<String>,
}

impl DemoConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: DemoConfig = serde_json::from_str(json)?;
        config.generator.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn title(&self) -> &str {
        self.window_title.as_deref().unwrap_or_else(|| self.variant.title())
    }
}

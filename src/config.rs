//! CLI configuration.

use std::path::Path;

use audit_engine::EngineParams;
use common::{Error, Result};
use serde::Deserialize;

/// Top-level configuration for the audit CLI.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Overrides for the engine's benchmark constants.
    pub engine: EngineParams,

    /// Rendering options for the text report.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Width of the widest forecast bar, in characters.
    pub chart_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { chart_width: 40 }
    }
}

impl AppConfig {
    /// Load from `path`. A missing file falls back to defaults; a present but
    /// malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }
}

//! Typed view of the merged configuration.

use std::fmt;
use std::path::PathBuf;

use biome_engine::EngineOptions;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::effective::ConfigError;

/// File name of the project config looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "terra-biome-colors.toml";

/// Renderer output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Flat `biomes.json` map for BlueMap
    BluemapJson,
    /// BlueMap resource pack zip wrapping `biomes.json`
    BluemapZip,
    /// squaremap `color-overrides` YAML
    Squaremap,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::BluemapJson => "bluemap-json",
            OutputFormat::BluemapZip => "bluemap-zip",
            OutputFormat::Squaremap => "squaremap",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    pub dir: PathBuf,
    pub formats: Vec<OutputFormat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSettings {
    pub level: String,
}

/// Settings consumed by the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub namespace: String,
    pub engine: EngineOptions,
    pub output: OutputSettings,
    pub log: LogSettings,
}

impl Settings {
    /// Deserialize and validate a merged configuration value
    pub fn from_value(value: &Value) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_value(value.clone())
            .map_err(|e| ConfigError::ValidationError(e.to_string()))?;

        if settings.namespace.is_empty()
            || settings.namespace.contains(':')
            || settings.namespace.contains('/')
        {
            return Err(ConfigError::ValidationError(format!(
                "namespace must be non-empty and contain no ':' or '/': {:?}",
                settings.namespace
            )));
        }

        if settings.output.formats.is_empty() {
            return Err(ConfigError::ValidationError(
                "output.formats must list at least one format".to_string(),
            ));
        }

        if settings.output.dir.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError(
                "output.dir must not be empty".to_string(),
            ));
        }

        Ok(settings)
    }

    pub fn wants(&self, format: OutputFormat) -> bool {
        self.output.formats.contains(&format)
    }
}

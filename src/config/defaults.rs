//! Built-in defaults (layer 1)

use serde::{Deserialize, Serialize};

/// Built-in default configuration values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltinDefaults {
    /// Namespace prefix of composite biome keys (default: "terra")
    pub namespace: String,

    /// Duplicate biome id policy (default: "replace")
    pub duplicate_ids: String,

    /// Malformed biome document policy (default: "skip")
    pub malformed_biomes: String,

    /// Output directory (default: "out")
    pub output_dir: String,

    /// Output formats to write (default: all)
    pub output_formats: Vec<String>,

    /// Log filter (default: "info")
    pub log_level: String,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            namespace: "terra".to_string(),
            duplicate_ids: "replace".to_string(),
            malformed_biomes: "skip".to_string(),
            output_dir: "out".to_string(),
            output_formats: vec![
                "bluemap-json".to_string(),
                "bluemap-zip".to_string(),
                "squaremap".to_string(),
            ],
            log_level: "info".to_string(),
        }
    }
}

impl BuiltinDefaults {
    /// Convert to JSON Value for merging
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "namespace": self.namespace,
            "engine": {
                "duplicate_ids": self.duplicate_ids,
                "malformed_biomes": self.malformed_biomes
            },
            "output": {
                "dir": self.output_dir,
                "formats": self.output_formats
            },
            "log": {
                "level": self.log_level
            }
        })
    }
}

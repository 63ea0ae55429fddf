//! Run summary written next to the outputs and printed by the CLI

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

use crate::output::WrittenOutput;

/// Schema version for run_summary.json
pub const RUN_SUMMARY_SCHEMA_VERSION: u32 = 1;

/// Schema identifier for run_summary.json
pub const RUN_SUMMARY_SCHEMA_ID: &str = "terra-biome-colors/run_summary@1";

/// Outcome of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    pub schema_version: u32,
    pub schema_id: String,

    /// When the summary was created
    pub created_at: DateTime<Utc>,

    pub status: RunStatus,

    /// Process exit code for this run
    pub exit_code: i32,

    /// Lower-cased pack id (absent when the run failed)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_id: Option<String>,

    pub namespace: String,

    /// Number of concrete biomes emitted
    pub biome_count: usize,

    #[serde(default)]
    pub outputs: Vec<WrittenOutput>,

    /// Wall-clock duration of the run in milliseconds
    pub duration_ms: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub human_summary: String,
}

impl RunSummary {
    /// Summary of a completed run
    pub fn succeeded(
        config_id: &str,
        namespace: &str,
        biome_count: usize,
        outputs: Vec<WrittenOutput>,
        duration_ms: u64,
    ) -> Self {
        let human_summary = format!(
            "Parsed {} biome{} for pack {} in {}ms, wrote {} file{}",
            biome_count,
            if biome_count == 1 { "" } else { "s" },
            config_id,
            duration_ms,
            outputs.len(),
            if outputs.len() == 1 { "" } else { "s" },
        );

        Self {
            schema_version: RUN_SUMMARY_SCHEMA_VERSION,
            schema_id: RUN_SUMMARY_SCHEMA_ID.to_string(),
            created_at: Utc::now(),
            status: RunStatus::Success,
            exit_code: 0,
            config_id: Some(config_id.to_string()),
            namespace: namespace.to_string(),
            biome_count,
            outputs,
            duration_ms,
            error: None,
            human_summary,
        }
    }

    /// Summary of a run that aborted
    pub fn failed(namespace: &str, error: String, exit_code: i32, duration_ms: u64) -> Self {
        Self {
            schema_version: RUN_SUMMARY_SCHEMA_VERSION,
            schema_id: RUN_SUMMARY_SCHEMA_ID.to_string(),
            created_at: Utc::now(),
            status: RunStatus::Failed,
            exit_code,
            config_id: None,
            namespace: namespace.to_string(),
            biome_count: 0,
            outputs: Vec::new(),
            duration_ms,
            human_summary: format!("Run failed: {}", error),
            error: Some(error),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn write_to_file(&self, path: &Path) -> io::Result<()> {
        let json = self.to_json().map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidData, format!("JSON error: {}", e))
        })?;
        fs::write(path, json)
    }

    pub fn from_file(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("JSON error: {}", e)))
    }
}

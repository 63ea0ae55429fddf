//! Engine strictness options.

use serde::{Deserialize, Serialize};

/// What to do when two biome documents declare the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicateIdPolicy {
    /// The later document replaces the earlier one, keeping its build position
    #[default]
    Replace,
    /// Abort the run with `DuplicateBiomeId`
    Reject,
}

/// What to do with a `type: BIOME` document that fails the shape check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedBiomePolicy {
    /// Drop the document
    #[default]
    Skip,
    /// Abort the run with `MalformedBiome`
    Reject,
}

/// Options for a single conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EngineOptions {
    #[serde(default)]
    pub duplicate_ids: DuplicateIdPolicy,
    #[serde(default)]
    pub malformed_biomes: MalformedBiomePolicy,
}

impl EngineOptions {
    /// Options that turn both lenient policies into errors.
    pub fn strict() -> Self {
        Self {
            duplicate_ids: DuplicateIdPolicy::Reject,
            malformed_biomes: MalformedBiomePolicy::Reject,
        }
    }
}

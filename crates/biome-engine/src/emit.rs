//! Biome table emission.

use serde::{Deserialize, Serialize};

use crate::attributes::BiomeAttributes;
use crate::error::EngineResult;
use crate::graph::BiomeGraph;

/// One concrete biome in the output table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedBiome {
    /// Lower-cased biome id
    pub id: String,
    #[serde(flatten)]
    pub attributes: BiomeAttributes,
}

/// The result of a run: every concrete biome, in build order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BiomeTable {
    /// Lower-cased pack id
    pub config_id: String,
    pub biomes: Vec<ResolvedBiome>,
}

impl BiomeTable {
    pub fn len(&self) -> usize {
        self.biomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty()
    }

    /// First biome with the given (lower-cased) id.
    pub fn get(&self, id: &str) -> Option<&ResolvedBiome> {
        self.biomes.iter().find(|biome| biome.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedBiome> {
        self.biomes.iter()
    }
}

impl BiomeGraph {
    /// Resolve every concrete node and produce the output table.
    ///
    /// Abstract nodes are resolved only as far as their children need them
    /// and never appear in the table. Ids that collide after lower-casing are
    /// both emitted.
    pub fn emit(&mut self, config_id: &str) -> EngineResult<BiomeTable> {
        let mut biomes = Vec::with_capacity(self.nodes.len());

        for slot in 0..self.nodes.len() {
            if self.nodes[slot].is_abstract {
                continue;
            }
            let attributes = self.resolve_slot(slot)?;
            biomes.push(ResolvedBiome {
                id: self.nodes[slot].id.to_lowercase(),
                attributes,
            });
        }

        Ok(BiomeTable {
            config_id: config_id.to_string(),
            biomes,
        })
    }
}

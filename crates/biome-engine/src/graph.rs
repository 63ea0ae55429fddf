//! Biome graph construction
//!
//! Nodes live in an arena in build order; `index` maps ids to arena slots.
//! Each node starts from its built-in defaults (if it names one) with its own
//! declared colors layered on top. Climate values only ever come from the
//! built-in table or from parents.

use std::collections::HashMap;

use tracing::debug;

use crate::attributes::BiomeAttributes;
use crate::defaults::builtin_biome;
use crate::document::{classify, BiomeDocument, DocumentKind, RawDocument};
use crate::error::{EngineError, EngineResult, ReferenceKind};
use crate::options::{DuplicateIdPolicy, EngineOptions, MalformedBiomePolicy};

/// Resolution progress of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionState {
    Unvisited,
    InProgress,
    Resolved,
}

/// A biome in the inheritance graph.
#[derive(Debug, Clone, PartialEq)]
pub struct BiomeNode {
    pub id: String,
    pub is_abstract: bool,
    /// Parent ids in declaration order (first has highest precedence)
    pub extends: Vec<String>,
    /// Seeded attributes until resolved, final attributes afterwards
    pub attributes: BiomeAttributes,
    pub state: ResolutionState,
}

impl BiomeNode {
    /// Build a node from a validated document, seeding built-in defaults.
    pub fn from_document(doc: BiomeDocument) -> EngineResult<Self> {
        let seed = match &doc.vanilla {
            Some(key) => builtin_biome(key)
                .map(|builtin| builtin.to_attributes())
                .ok_or_else(|| EngineError::UnresolvedBiomeReference {
                    biome: doc.id.clone(),
                    reference: key.clone(),
                    kind: ReferenceKind::BuiltIn,
                })?,
            None => BiomeAttributes::default(),
        };

        let declared = BiomeAttributes {
            watercolor: doc.colors.water,
            foliagecolor: doc.colors.foliage,
            grasscolor: doc.colors.grass,
            temperature: None,
            humidity: None,
        };

        Ok(Self {
            id: doc.id,
            is_abstract: doc.is_abstract,
            extends: doc.extends,
            attributes: declared.overlay(seed),
            state: ResolutionState::Unvisited,
        })
    }
}

/// Counters describing what the builder did with its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub biomes: usize,
    pub replaced: usize,
    pub malformed: usize,
    pub ignored: usize,
}

/// The inheritance graph for one run.
#[derive(Debug, Default)]
pub struct BiomeGraph {
    pub(crate) nodes: Vec<BiomeNode>,
    pub(crate) index: HashMap<String, usize>,
    stats: BuildStats,
}

impl BiomeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from scoped documents.
    pub fn build(docs: &[RawDocument], options: &EngineOptions) -> EngineResult<Self> {
        let mut graph = Self::new();

        for doc in docs {
            match classify(doc) {
                DocumentKind::Biome(biome) => graph.insert(biome, options)?,
                DocumentKind::Malformed { reason } => {
                    if options.malformed_biomes == MalformedBiomePolicy::Reject {
                        return Err(EngineError::MalformedBiome {
                            path: doc.path.clone(),
                            reason,
                        });
                    }
                    debug!(path = %doc.path, %reason, "dropping malformed biome");
                    graph.stats.malformed += 1;
                }
                DocumentKind::PackManifest(_) | DocumentKind::Unrecognized => {
                    graph.stats.ignored += 1;
                }
            }
        }

        Ok(graph)
    }

    /// Add a biome, applying the duplicate-id policy.
    pub fn insert(&mut self, doc: BiomeDocument, options: &EngineOptions) -> EngineResult<()> {
        let node = BiomeNode::from_document(doc)?;

        match self.index.get(&node.id) {
            Some(&slot) => {
                if options.duplicate_ids == DuplicateIdPolicy::Reject {
                    return Err(EngineError::DuplicateBiomeId { id: node.id });
                }
                debug!(id = %node.id, "replacing earlier biome with the same id");
                self.nodes[slot] = node;
                self.stats.replaced += 1;
            }
            None => {
                self.index.insert(node.id.clone(), self.nodes.len());
                self.nodes.push(node);
                self.stats.biomes += 1;
            }
        }

        Ok(())
    }

    pub fn node(&self, id: &str) -> Option<&BiomeNode> {
        self.index.get(id).map(|&slot| &self.nodes[slot])
    }

    /// Nodes in build order.
    pub fn nodes(&self) -> impl Iterator<Item = &BiomeNode> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }
}

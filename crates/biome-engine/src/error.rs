//! Engine error types.
//!
//! Every variant aborts the whole run: the engine never returns a partial
//! table alongside an error.

use std::fmt;

/// Which relation a dangling reference came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// An entry of a biome's `extends` list.
    Parent,
    /// A biome's `vanilla` key into the built-in defaults table.
    BuiltIn,
}

impl fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferenceKind::Parent => write!(f, "parent biome"),
            ReferenceKind::BuiltIn => write!(f, "built-in biome"),
        }
    }
}

/// Errors produced while turning documents into a biome table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid Terra config: no pack.yml file found")]
    NoPackManifest,

    #[error("invalid Terra config: found multiple pack.yml files ({})", paths.join(", "))]
    MultiplePackManifests { paths: Vec<String> },

    #[error("invalid Terra config: pack manifest {path} has no id")]
    MissingConfigId { path: String },

    #[error("biome {biome} references unknown {kind} {reference}")]
    UnresolvedBiomeReference {
        biome: String,
        reference: String,
        kind: ReferenceKind,
    },

    #[error("cyclic inheritance detected at biome {id}")]
    CyclicInheritance { id: String },

    #[error("duplicate biome id: {id}")]
    DuplicateBiomeId { id: String },

    #[error("malformed biome document {path}: {reason}")]
    MalformedBiome { path: String, reason: String },
}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

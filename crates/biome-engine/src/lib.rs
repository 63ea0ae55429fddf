//! Inheritance resolution engine for Terra biome packs.
//!
//! Turns a set of raw YAML entries into a flat table of per-biome colors and
//! climate values:
//!
//! 1. parse every entry best-effort ([`parse_documents`]),
//! 2. find the single pack manifest and scope to its directory ([`PackScope`]),
//! 3. build the inheritance graph ([`BiomeGraph::build`]),
//! 4. resolve and emit every concrete biome ([`BiomeGraph::emit`]).

mod attributes;
mod defaults;
mod document;
mod emit;
mod error;
mod graph;
mod options;
mod resolve;
mod scope;

pub use attributes::{format_hex_color, BiomeAttributes};
pub use defaults::{builtin_biome, builtin_biomes, BuiltinBiome};
pub use document::{
    classify, is_pack_path, is_yaml_path, normalize_path, parse_document, parse_documents,
    BiomeColors, BiomeDocument, DocumentKind, PackManifest, RawDocument, SourceFile, BIOME_TYPE,
};
pub use emit::{BiomeTable, ResolvedBiome};
pub use error::{EngineError, EngineResult, ReferenceKind};
pub use graph::{BiomeGraph, BiomeNode, BuildStats, ResolutionState};
pub use options::{DuplicateIdPolicy, EngineOptions, MalformedBiomePolicy};
pub use scope::PackScope;

use tracing::{info, warn};

/// Run the whole engine over one batch of input entries.
pub fn convert(files: &[SourceFile], options: &EngineOptions) -> EngineResult<BiomeTable> {
    if files.is_empty() {
        return Err(EngineError::InvalidInput("no files".to_string()));
    }

    let docs = parse_documents(files);
    let scope = PackScope::locate(&docs)?;
    let scoped = scope.apply(docs);

    let mut graph = BiomeGraph::build(&scoped, options)?;
    let stats = graph.stats();
    info!(
        config_id = %scope.config_id,
        base_path = %scope.base_path,
        biomes = stats.biomes,
        replaced = stats.replaced,
        malformed = stats.malformed,
        "built biome graph"
    );

    let table = graph.emit(&scope.config_id)?;
    if table.is_empty() {
        warn!(config_id = %table.config_id, "pack contains no concrete biomes");
    }

    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_rejects_empty_input() {
        assert_eq!(
            convert(&[], &EngineOptions::default()),
            Err(EngineError::InvalidInput("no files".to_string()))
        );
    }

    #[test]
    fn test_convert_scopes_to_pack() {
        let files = vec![
            SourceFile::new("cfg/pack.yml", "id: Example"),
            SourceFile::new("cfg/biomes/a.yml", "type: BIOME\nid: a\nvanilla: minecraft:beach"),
            SourceFile::new("stray/b.yml", "type: BIOME\nid: b"),
        ];

        let table = convert(&files, &EngineOptions::default()).unwrap();

        assert_eq!(table.config_id, "example");
        assert_eq!(table.len(), 1);
        assert_eq!(table.biomes[0].id, "a");
    }
}

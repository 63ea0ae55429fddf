//! Document parsing and classification
//!
//! Raw text entries are parsed independently and best-effort: an entry that
//! is not valid UTF-8 or not valid YAML is dropped without surfacing an error.
//! Parsed documents are then classified into pack manifests, biome documents,
//! malformed biome documents, or documents the engine does not care about.

use rayon::prelude::*;
use serde_yaml::Value;
use tracing::debug;

use crate::attributes::format_hex_color;

/// Discriminator value marking a biome document.
pub const BIOME_TYPE: &str = "BIOME";

/// Path suffix (after normalization) identifying the pack manifest.
pub const PACK_SUFFIX: &str = "/pack";

const YAML_EXTENSIONS: &[&str] = &[".yml", ".yaml"];

/// One input entry as handed over by the input collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path of the entry inside the archive or file list
    pub path: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            bytes: bytes.into(),
        }
    }
}

/// A parsed but not yet validated document.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    /// Normalized path: forward slashes, no extension, leading slash
    pub path: String,
    pub content: Value,
}

/// Whether a path names a YAML file (`.yml`/`.yaml`, any case).
pub fn is_yaml_path(path: &str) -> bool {
    yaml_extension_len(path).is_some()
}

fn yaml_extension_len(path: &str) -> Option<usize> {
    let lower = path.to_ascii_lowercase();
    YAML_EXTENSIONS
        .iter()
        .find(|ext| lower.ends_with(*ext))
        .map(|ext| ext.len())
}

/// Normalize an entry path: backslashes become forward slashes, the YAML
/// extension is stripped and a leading slash is enforced.
pub fn normalize_path(path: &str) -> String {
    let mut normalized = path.replace('\\', "/");
    if let Some(len) = yaml_extension_len(&normalized) {
        normalized.truncate(normalized.len() - len);
    }
    if normalized.starts_with('/') {
        normalized
    } else {
        format!("/{}", normalized)
    }
}

/// Parse a single entry, or `None` if it cannot be read as YAML.
pub fn parse_document(file: &SourceFile) -> Option<RawDocument> {
    let text = match std::str::from_utf8(&file.bytes) {
        Ok(text) => text,
        Err(e) => {
            debug!(path = %file.path, error = %e, "dropping non-UTF-8 document");
            return None;
        }
    };

    match serde_yaml::from_str::<Value>(text) {
        Ok(content) => Some(RawDocument {
            path: normalize_path(&file.path),
            content,
        }),
        Err(e) => {
            debug!(path = %file.path, error = %e, "dropping unparseable document");
            None
        }
    }
}

/// Parse every YAML entry in parallel, keeping input order.
pub fn parse_documents(files: &[SourceFile]) -> Vec<RawDocument> {
    files
        .par_iter()
        .filter(|file| is_yaml_path(&file.path))
        .filter_map(parse_document)
        .collect()
}

/// Pack manifest contents the engine cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackManifest {
    /// Declared `id`, if it is a string
    pub id: Option<String>,
}

/// Declared colors of a biome document, already formatted as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BiomeColors {
    pub foliage: Option<String>,
    pub grass: Option<String>,
    pub water: Option<String>,
}

/// A biome document that passed the shape check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BiomeDocument {
    pub id: String,
    pub is_abstract: bool,
    /// Key into the built-in defaults table
    pub vanilla: Option<String>,
    /// Parent ids in declaration order
    pub extends: Vec<String>,
    pub colors: BiomeColors,
}

/// Result of classifying a parsed document.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentKind {
    PackManifest(PackManifest),
    Biome(BiomeDocument),
    /// Declares `type: BIOME` but fails the shape check
    Malformed { reason: String },
    Unrecognized,
}

/// Whether a normalized path names a pack manifest.
pub fn is_pack_path(path: &str) -> bool {
    path.ends_with(PACK_SUFFIX)
}

/// Classify a parsed document by path and shape.
pub fn classify(doc: &RawDocument) -> DocumentKind {
    if is_pack_path(&doc.path) {
        let id = doc
            .content
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_string);
        return DocumentKind::PackManifest(PackManifest { id });
    }

    if doc.content.get("type").and_then(Value::as_str) != Some(BIOME_TYPE) {
        return DocumentKind::Unrecognized;
    }

    match validate_biome(&doc.content) {
        Ok(biome) => DocumentKind::Biome(biome),
        Err(reason) => DocumentKind::Malformed { reason },
    }
}

fn validate_biome(content: &Value) -> Result<BiomeDocument, String> {
    let id = match content.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        _ => return Err("id must be a non-empty string".to_string()),
    };

    let is_abstract = match content.get("abstract") {
        None => false,
        Some(Value::Bool(b)) => *b,
        Some(_) => return Err("abstract must be a boolean".to_string()),
    };

    let vanilla = match content.get("vanilla") {
        None => None,
        Some(Value::String(key)) if !key.is_empty() => Some(key.clone()),
        Some(_) => return Err("vanilla must be a non-empty string".to_string()),
    };

    let extends = match content.get("extends") {
        None => Vec::new(),
        Some(Value::String(parent)) if !parent.is_empty() => vec![parent.clone()],
        Some(Value::Sequence(parents)) => parents
            .iter()
            .map(|parent| match parent {
                Value::String(parent) => Ok(parent.clone()),
                _ => Err("extends entries must be strings".to_string()),
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err("extends must be a string or a list of strings".to_string()),
    };

    let colors = match content.get("colors") {
        None => BiomeColors::default(),
        Some(colors @ Value::Mapping(_)) => BiomeColors {
            foliage: parse_color(colors.get("foliage"), "foliage")?,
            grass: parse_color(colors.get("grass"), "grass")?,
            water: parse_color(colors.get("water"), "water")?,
        },
        Some(_) => return Err("colors must be a mapping".to_string()),
    };

    Ok(BiomeDocument {
        id,
        is_abstract,
        vanilla,
        extends,
        colors,
    })
}

fn parse_color(value: Option<&Value>, field: &str) -> Result<Option<String>, String> {
    match value {
        None => Ok(None),
        Some(Value::String(color)) => Ok(Some(color.clone())),
        Some(Value::Number(n)) => n
            .as_u64()
            .map(|v| Some(format_hex_color(v)))
            .ok_or_else(|| format!("colors.{} must be a non-negative integer", field)),
        Some(_) => Err(format!("colors.{} must be a string or an integer", field)),
    }
}

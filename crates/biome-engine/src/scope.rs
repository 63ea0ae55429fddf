//! Pack scoping
//!
//! A run processes exactly one pack. The pack manifest's location defines the
//! base path; every document outside it is dropped and the prefix is stripped
//! from the ones that remain.

use tracing::debug;

use crate::document::{classify, DocumentKind, RawDocument, PACK_SUFFIX};
use crate::error::{EngineError, EngineResult};

/// Identity and location of the pack being processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackScope {
    /// Lower-cased pack id
    pub config_id: String,
    /// Manifest path with the trailing `/pack` removed (may be empty)
    pub base_path: String,
}

impl PackScope {
    /// Locate the single pack manifest among `docs`.
    pub fn locate(docs: &[RawDocument]) -> EngineResult<Self> {
        let manifests: Vec<_> = docs
            .iter()
            .filter_map(|doc| match classify(doc) {
                DocumentKind::PackManifest(manifest) => Some((doc.path.as_str(), manifest)),
                _ => None,
            })
            .collect();

        let (path, manifest) = match manifests.as_slice() {
            [] => return Err(EngineError::NoPackManifest),
            [single] => single.clone(),
            many => {
                return Err(EngineError::MultiplePackManifests {
                    paths: many.iter().map(|(path, _)| path.to_string()).collect(),
                })
            }
        };

        let config_id = manifest
            .id
            .map(|id| id.to_lowercase())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| EngineError::MissingConfigId {
                path: path.to_string(),
            })?;

        let base_path = path
            .strip_suffix(PACK_SUFFIX)
            .unwrap_or(path)
            .to_string();

        Ok(Self {
            config_id,
            base_path,
        })
    }

    /// Keep the documents under the base path, with the prefix stripped.
    pub fn apply(&self, docs: Vec<RawDocument>) -> Vec<RawDocument> {
        docs.into_iter()
            .filter_map(|doc| match doc.path.strip_prefix(self.base_path.as_str()) {
                Some(rest) => Some(RawDocument {
                    path: rest.to_string(),
                    content: doc.content,
                }),
                None => {
                    debug!(path = %doc.path, base = %self.base_path, "document outside pack scope");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(path: &str, yaml: &str) -> RawDocument {
        RawDocument {
            path: path.to_string(),
            content: serde_yaml::from_str(yaml).unwrap(),
        }
    }

    #[test]
    fn test_locate_nested_manifest() {
        let docs = vec![
            doc("/export/overworld/pack", "id: OVERWORLD"),
            doc("/export/overworld/biomes/plains", "type: BIOME\nid: plains"),
        ];

        let scope = PackScope::locate(&docs).unwrap();

        assert_eq!(scope.config_id, "overworld");
        assert_eq!(scope.base_path, "/export/overworld");
    }

    #[test]
    fn test_locate_root_manifest() {
        let scope = PackScope::locate(&[doc("/pack", "id: Example")]).unwrap();
        assert_eq!(scope.base_path, "");
        assert_eq!(scope.config_id, "example");
    }

    #[test]
    fn test_no_manifest() {
        let docs = vec![doc("/biomes/plains", "type: BIOME\nid: plains")];
        assert_eq!(PackScope::locate(&docs), Err(EngineError::NoPackManifest));
    }

    #[test]
    fn test_multiple_manifests() {
        let docs = vec![doc("/a/pack", "id: a"), doc("/b/pack", "id: b")];
        let err = PackScope::locate(&docs).unwrap_err();
        assert_eq!(
            err,
            EngineError::MultiplePackManifests {
                paths: vec!["/a/pack".to_string(), "/b/pack".to_string()]
            }
        );
    }

    #[test]
    fn test_missing_or_empty_id() {
        for yaml in ["name: nothing", "id: ''", "id: 7", "plain scalar"] {
            let err = PackScope::locate(&[doc("/cfg/pack", yaml)]).unwrap_err();
            assert_eq!(
                err,
                EngineError::MissingConfigId {
                    path: "/cfg/pack".to_string()
                },
                "for manifest {:?}",
                yaml
            );
        }
    }

    #[test]
    fn test_apply_strips_prefix_and_drops_outsiders() {
        let scope = PackScope {
            config_id: "example".to_string(),
            base_path: "/cfg".to_string(),
        };
        let docs = vec![
            doc("/cfg/pack", "id: Example"),
            doc("/cfg/biomes/plains", "id: plains"),
            doc("/other/biomes/desert", "id: desert"),
        ];

        let scoped = scope.apply(docs);

        let paths: Vec<_> = scoped.iter().map(|d| d.path.as_str()).collect();
        assert_eq!(paths, vec!["/pack", "/biomes/plains"]);
    }

    #[test]
    fn test_apply_is_a_plain_prefix_match() {
        let scope = PackScope {
            config_id: "example".to_string(),
            base_path: "/cfg".to_string(),
        };
        let scoped = scope.apply(vec![doc("/cfg-extra/biome", "id: x")]);
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].path, "-extra/biome");
    }
}

//! Inheritance resolution
//!
//! A node's final attributes are its own seeded attributes with every parent
//! folded over them, last-declared parent first. The net precedence is:
//! first parent > later parents > the node's own values. A parent that
//! defines a field therefore overrides the node's own declaration.
//!
//! Nodes move `Unvisited -> InProgress -> Resolved`. Meeting an `InProgress`
//! node again means the `extends` relation loops back on itself.

use crate::attributes::BiomeAttributes;
use crate::error::{EngineError, EngineResult, ReferenceKind};
use crate::graph::{BiomeGraph, ResolutionState};

impl BiomeGraph {
    /// Resolve the biome with the given id and return its final attributes.
    ///
    /// Resolving an already-resolved node is a lookup.
    pub fn resolve(&mut self, id: &str) -> EngineResult<BiomeAttributes> {
        let slot = self.slot_of(id, id)?;
        self.resolve_slot(slot)
    }

    fn slot_of(&self, referrer: &str, id: &str) -> EngineResult<usize> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| EngineError::UnresolvedBiomeReference {
                biome: referrer.to_string(),
                reference: id.to_string(),
                kind: ReferenceKind::Parent,
            })
    }

    /// Resolve a node and all its ancestors.
    ///
    /// Walks the `extends` relation with an explicit stack of
    /// `(slot, next parent index)` frames, so chain depth is bounded by heap
    /// rather than thread stack.
    pub(crate) fn resolve_slot(&mut self, root: usize) -> EngineResult<BiomeAttributes> {
        self.enter(root)?;
        if self.nodes[root].state == ResolutionState::Resolved {
            return Ok(self.nodes[root].attributes.clone());
        }

        let mut stack: Vec<(usize, usize)> = vec![(root, 0)];
        while let Some(frame) = stack.last_mut() {
            let (slot, next) = *frame;

            if next < self.nodes[slot].extends.len() {
                frame.1 += 1;
                let node = &self.nodes[slot];
                let parent = self.slot_of(&node.id, &node.extends[next])?;
                let unvisited = self.nodes[parent].state == ResolutionState::Unvisited;
                // Resolved parents are reused; in-progress ones close a loop
                self.enter(parent)?;
                if unvisited {
                    stack.push((parent, 0));
                }
                continue;
            }

            stack.pop();
            self.finish(slot);
        }

        Ok(self.nodes[root].attributes.clone())
    }

    /// Mark an unvisited node in progress. Meeting an in-progress node is a cycle.
    fn enter(&mut self, slot: usize) -> EngineResult<()> {
        let node = &mut self.nodes[slot];
        match node.state {
            ResolutionState::Unvisited => {
                node.state = ResolutionState::InProgress;
                Ok(())
            }
            ResolutionState::InProgress => Err(EngineError::CyclicInheritance {
                id: node.id.clone(),
            }),
            ResolutionState::Resolved => Ok(()),
        }
    }

    /// Fold the (already resolved) parents over a node's own attributes.
    fn finish(&mut self, slot: usize) {
        let node = &self.nodes[slot];
        let merged = node
            .extends
            .iter()
            .rev()
            .filter_map(|parent| self.index.get(parent))
            .fold(node.attributes.clone(), |base, &parent| {
                self.nodes[parent].attributes.overlay(base)
            });

        let node = &mut self.nodes[slot];
        node.attributes = merged;
        node.state = ResolutionState::Resolved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RawDocument;
    use crate::options::EngineOptions;

    fn graph(docs: &[(&str, &str)]) -> BiomeGraph {
        let docs: Vec<_> = docs
            .iter()
            .map(|(path, yaml)| RawDocument {
                path: path.to_string(),
                content: serde_yaml::from_str(yaml).unwrap(),
            })
            .collect();
        BiomeGraph::build(&docs, &EngineOptions::default()).unwrap()
    }

    #[test]
    fn test_first_parent_wins() {
        let mut g = graph(&[
            ("/p0", "type: BIOME\nid: p0\ncolors:\n  water: '#000001'"),
            ("/p1", "type: BIOME\nid: p1\ncolors:\n  water: '#000002'\n  grass: '#000003'"),
            ("/c", "type: BIOME\nid: c\nextends: [p0, p1]"),
        ]);

        let attrs = g.resolve("c").unwrap();

        assert_eq!(attrs.watercolor.as_deref(), Some("#000001"));
        assert_eq!(attrs.grasscolor.as_deref(), Some("#000003"));
    }

    #[test]
    fn test_parent_beats_own_declaration() {
        let mut g = graph(&[
            ("/p0", "type: BIOME\nid: p0\ncolors:\n  water: '#0000aa'"),
            ("/p1", "type: BIOME\nid: p1"),
            ("/c", "type: BIOME\nid: c\nextends: [p0, p1]\ncolors:\n  water: '#ffffff'\n  foliage: '#123456'"),
        ]);

        let attrs = g.resolve("c").unwrap();

        assert_eq!(attrs.watercolor.as_deref(), Some("#0000aa"));
        // parents leave foliage undefined, so the node's own value survives
        assert_eq!(attrs.foliagecolor.as_deref(), Some("#123456"));
    }

    #[test]
    fn test_climate_inherited_through_chain() {
        let mut g = graph(&[
            ("/base", "type: BIOME\nid: base\nabstract: true\nvanilla: minecraft:desert"),
            ("/mid", "type: BIOME\nid: mid\nextends: base"),
            ("/leaf", "type: BIOME\nid: leaf\nextends: mid\nvanilla: minecraft:snowy_taiga"),
        ]);

        let attrs = g.resolve("leaf").unwrap();

        // desert climate arrives through mid and overrides the leaf's own seed
        assert_eq!(attrs.temperature, Some(2.0));
        assert_eq!(attrs.humidity, Some(0.0));
        assert_eq!(attrs.watercolor.as_deref(), Some("#3f76e4"));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let mut g = graph(&[
            ("/p", "type: BIOME\nid: p\nvanilla: minecraft:swamp"),
            ("/c", "type: BIOME\nid: c\nextends: p"),
        ]);

        let first = g.resolve("c").unwrap();
        let parent_before = g.node("p").unwrap().attributes.clone();
        let second = g.resolve("c").unwrap();

        assert_eq!(first, second);
        assert_eq!(g.node("p").unwrap().attributes, parent_before);
        assert_eq!(g.node("c").unwrap().state, ResolutionState::Resolved);
    }

    #[test]
    fn test_two_node_cycle() {
        let mut g = graph(&[
            ("/a", "type: BIOME\nid: a\nextends: b"),
            ("/b", "type: BIOME\nid: b\nextends: a"),
        ]);

        let err = g.resolve("a").unwrap_err();
        assert_eq!(err, EngineError::CyclicInheritance { id: "a".to_string() });
    }

    #[test]
    fn test_self_extension_is_a_cycle() {
        let mut g = graph(&[("/a", "type: BIOME\nid: a\nextends: a")]);
        assert!(matches!(
            g.resolve("a"),
            Err(EngineError::CyclicInheritance { .. })
        ));
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let mut g = graph(&[
            ("/root", "type: BIOME\nid: root\nvanilla: minecraft:jungle"),
            ("/l", "type: BIOME\nid: l\nextends: root"),
            ("/r", "type: BIOME\nid: r\nextends: root"),
            ("/d", "type: BIOME\nid: d\nextends: [l, r]"),
        ]);

        let attrs = g.resolve("d").unwrap();
        assert_eq!(attrs.temperature, Some(0.95));
    }

    #[test]
    fn test_deep_chain_resolves() {
        let mut docs = vec![(
            "/b0".to_string(),
            "type: BIOME\nid: b0\nvanilla: minecraft:plains".to_string(),
        )];
        for i in 1..5000 {
            docs.push((
                format!("/b{}", i),
                format!("type: BIOME\nid: b{}\nextends: b{}", i, i - 1),
            ));
        }
        let docs: Vec<_> = docs.iter().map(|(p, y)| (p.as_str(), y.as_str())).collect();

        // Default test thread stack; depth must not translate into recursion
        let mut g = graph(&docs);
        let attrs = g.resolve("b4999").unwrap();

        assert_eq!(attrs.temperature, Some(0.8));
        assert_eq!(g.node("b2500").unwrap().state, ResolutionState::Resolved);
    }

    #[test]
    fn test_long_cycle_reports_revisited_node() {
        let mut docs = Vec::new();
        for i in 0..1000 {
            docs.push((
                format!("/c{}", i),
                format!("type: BIOME\nid: c{}\nextends: c{}", i, (i + 1) % 1000),
            ));
        }
        let docs: Vec<_> = docs.iter().map(|(p, y)| (p.as_str(), y.as_str())).collect();

        let mut g = graph(&docs);
        assert_eq!(
            g.resolve("c0").unwrap_err(),
            EngineError::CyclicInheritance { id: "c0".to_string() }
        );
    }

    #[test]
    fn test_repeated_parent_is_not_a_cycle() {
        let mut g = graph(&[
            ("/p", "type: BIOME\nid: p\ncolors:\n  grass: '#010101'"),
            ("/c", "type: BIOME\nid: c\nextends: [p, p]"),
        ]);

        let attrs = g.resolve("c").unwrap();
        assert_eq!(attrs.grasscolor.as_deref(), Some("#010101"));
    }

    #[test]
    fn test_missing_parent() {
        let mut g = graph(&[("/c", "type: BIOME\nid: c\nextends: [ghost]")]);
        let err = g.resolve("c").unwrap_err();
        assert_eq!(
            err,
            EngineError::UnresolvedBiomeReference {
                biome: "c".to_string(),
                reference: "ghost".to_string(),
                kind: ReferenceKind::Parent,
            }
        );
    }
}

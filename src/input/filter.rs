//! YAML entry filter

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// Patterns for entries handed to the engine
const YAML_PATTERNS: &[&str] = &["**/*.yml", "**/*.yaml", "*.yml", "*.yaml"];

/// Matches entry paths that look like YAML documents, ignoring case
#[derive(Debug)]
pub struct YamlFilter {
    glob_set: GlobSet,
}

impl YamlFilter {
    pub fn new() -> Result<Self, globset::Error> {
        let mut builder = GlobSetBuilder::new();
        for pattern in YAML_PATTERNS {
            builder.add(GlobBuilder::new(pattern).case_insensitive(true).build()?);
        }
        Ok(Self {
            glob_set: builder.build()?,
        })
    }

    /// Check an entry path; backslashes are treated as separators
    pub fn matches(&self, path: &str) -> bool {
        self.glob_set.is_match(path.replace('\\', "/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_yaml_extensions() {
        let filter = YamlFilter::new().unwrap();

        assert!(filter.matches("pack.yml"));
        assert!(filter.matches("biomes/land/plains.yaml"));
        assert!(filter.matches("BIOMES\\OCEAN.YML"));
        assert!(!filter.matches("biomes/plains.json"));
        assert!(!filter.matches("structures/tree.tesf"));
        assert!(!filter.matches("yml"));
    }
}

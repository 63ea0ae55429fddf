//! squaremap output: the `color-overrides` block for `advanced.yml`.

use biome_engine::BiomeTable;
use serde_json::{json, Map, Value};

use super::biome_key;

/// Render the table as a squaremap `color-overrides` document.
///
/// A biome appears in a color bucket only if that color is set and non-empty.
pub fn squaremap_yaml(table: &BiomeTable, namespace: &str) -> Result<String, serde_yaml::Error> {
    let mut grass = Map::new();
    let mut foliage = Map::new();
    let mut water = Map::new();

    for biome in table.iter() {
        let key = biome_key(namespace, &table.config_id, &biome.id);
        let attrs = &biome.attributes;
        for (bucket, color) in [
            (&mut grass, &attrs.grasscolor),
            (&mut foliage, &attrs.foliagecolor),
            (&mut water, &attrs.watercolor),
        ] {
            if let Some(color) = color.as_deref().filter(|c| !c.is_empty()) {
                bucket.insert(key.clone(), Value::String(color.to_string()));
            }
        }
    }

    let document = json!({
        "color-overrides": {
            "biomes": {
                "grass": Value::Object(grass),
                "foliage": Value::Object(foliage),
                "water": Value::Object(water),
            }
        }
    });
    serde_yaml::to_string(&document)
}

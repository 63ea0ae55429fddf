//! BlueMap output: a flat `biomes.json` map, optionally packaged as a
//! resource pack zip.

use std::io::{Cursor, Write};

use biome_engine::{BiomeAttributes, BiomeTable};
use serde_json::{Map, Value};
use zip::write::SimpleFileOptions;

use super::biome_key;

/// Render the table as BlueMap's `biomes.json`.
///
/// Keys are composite biome keys in table order; unset attributes are
/// omitted. A later biome whose key collides replaces the earlier value in
/// place.
pub fn bluemap_json(table: &BiomeTable, namespace: &str) -> Result<String, serde_json::Error> {
    let mut root = Map::new();
    for biome in table.iter() {
        root.insert(
            biome_key(namespace, &table.config_id, &biome.id),
            attributes_value(&biome.attributes),
        );
    }
    serde_json::to_string_pretty(&Value::Object(root))
}

fn attributes_value(attributes: &BiomeAttributes) -> Value {
    let mut object = Map::new();
    let colors = [
        ("watercolor", &attributes.watercolor),
        ("foliagecolor", &attributes.foliagecolor),
        ("grasscolor", &attributes.grasscolor),
    ];
    for (name, color) in colors {
        if let Some(color) = color {
            object.insert(name.to_string(), Value::String(color.clone()));
        }
    }
    if let Some(temperature) = attributes.temperature {
        object.insert("temperature".to_string(), number_value(temperature));
    }
    if let Some(humidity) = attributes.humidity {
        object.insert("humidity".to_string(), number_value(humidity));
    }
    Value::Object(object)
}

/// Whole numbers are written without a fractional part (`2`, not `2.0`).
fn number_value(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Value::from(value as i64)
    } else {
        serde_json::Number::from_f64(value)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

/// Path of `biomes.json` inside the resource pack
pub fn resource_pack_entry(namespace: &str) -> String {
    format!("assets/{}/biomes.json", namespace)
}

/// Package `biomes.json` as a BlueMap resource pack.
pub fn bluemap_resource_pack(json: &str, namespace: &str) -> zip::result::ZipResult<Vec<u8>> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer.start_file(resource_pack_entry(namespace), SimpleFileOptions::default())?;
    writer.write_all(json.as_bytes())?;
    Ok(writer.finish()?.into_inner())
}

//! Configuration merge logic
//!
//! - Objects: deep-merge by key
//! - Arrays: replace (last wins)
//! - Scalars: override (last wins)

use serde_json::Value;

/// Deep merge `overlay` into `base`.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Merge layers in order (first is base, last has highest precedence)
pub fn merge_layers(layers: Vec<Value>) -> Value {
    layers.into_iter().fold(Value::Null, deep_merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_keys_survive() {
        let base = json!({"engine": {"duplicate_ids": "replace", "malformed_biomes": "skip"}});
        let overlay = json!({"engine": {"duplicate_ids": "reject"}});

        let result = deep_merge(base, overlay);

        assert_eq!(result["engine"]["duplicate_ids"], "reject");
        assert_eq!(result["engine"]["malformed_biomes"], "skip");
    }

    #[test]
    fn test_format_list_is_replaced() {
        let base = json!({"output": {"formats": ["bluemap-json", "bluemap-zip", "squaremap"]}});
        let overlay = json!({"output": {"formats": ["squaremap"]}});

        let result = deep_merge(base, overlay);

        assert_eq!(result["output"]["formats"], json!(["squaremap"]));
    }

    #[test]
    fn test_merge_layers_precedence() {
        let builtin = json!({"namespace": "terra", "output": {"dir": "out"}});
        let host = json!({"namespace": "host"});
        let project = json!({"output": {"dir": "maps"}});
        let cli = json!({"namespace": "cli"});

        let result = merge_layers(vec![builtin, host, project, cli]);

        assert_eq!(result["namespace"], "cli");
        assert_eq!(result["output"]["dir"], "maps");
    }

    #[test]
    fn test_scalar_replaces_object() {
        let result = deep_merge(json!({"log": {"level": "info"}}), json!({"log": "off"}));
        assert_eq!(result["log"], "off");
    }
}

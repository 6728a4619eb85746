//! Merge algorithm for configuration layers.
//!
//! # Merge Rules
//!
//! - Mappings are merged recursively
//! - Sequences are replaced entirely (not merged)
//! - Null values in an overlay delete the key from the base
//! - Scalars in an overlay replace scalars in the base
//! - An empty (null) document contributes nothing

use serde_yaml::{Mapping, Value};

/// Deep merge two YAML values; `overlay` wins at each conflict.
pub fn deep_merge(base: &Value, overlay: &Value) -> Value {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            let mut result = base_map.clone();

            for (key, overlay_value) in overlay_map {
                if overlay_value.is_null() {
                    result.remove(key);
                } else if let Some(base_value) = base_map.get(key) {
                    result.insert(key.clone(), deep_merge(base_value, overlay_value));
                } else {
                    result.insert(key.clone(), overlay_value.clone());
                }
            }

            Value::Mapping(result)
        }
        (_, overlay) => overlay.clone(),
    }
}

/// Merge layers in order (later overrides earlier).
pub fn merge_configs(configs: &[Value]) -> Value {
    configs
        .iter()
        .filter(|layer| !layer.is_null())
        .fold(Value::Mapping(Mapping::new()), |acc, layer| {
            deep_merge(&acc, layer)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn later_scalar_wins() {
        let merged = merge_configs(&[yaml("stale_days: 365"), yaml("stale_days: 100")]);
        assert_eq!(merged, yaml("stale_days: 100"));
    }

    #[test]
    fn keys_from_both_layers_survive() {
        let merged = merge_configs(&[yaml("stale_days: 200"), yaml("max_in_flight: 2")]);
        assert_eq!(merged, yaml("stale_days: 200\nmax_in_flight: 2"));
    }

    #[test]
    fn sequences_are_replaced() {
        let merged = merge_configs(&[
            yaml("shell_tools: [Bash, Shell]"),
            yaml("shell_tools: [Terminal]"),
        ]);
        assert_eq!(merged, yaml("shell_tools: [Terminal]"));
    }

    #[test]
    fn null_deletes_key() {
        let merged = merge_configs(&[yaml("stale_days: 200\nenabled: false"), yaml("enabled: ~")]);
        assert_eq!(merged, yaml("stale_days: 200"));
    }

    #[test]
    fn empty_layer_is_ignored() {
        let merged = merge_configs(&[yaml("stale_days: 200"), Value::Null]);
        assert_eq!(merged, yaml("stale_days: 200"));
    }

    #[test]
    fn no_layers_is_empty_mapping() {
        assert_eq!(merge_configs(&[]), Value::Mapping(Mapping::new()));
    }
}

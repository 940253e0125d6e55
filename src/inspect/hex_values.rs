//! Discovery of hex-encoded leaves in a response tree.
//!
//! Walks an arbitrary JSON value depth-first and collects every string leaf
//! with a "0x" prefix, together with the path that leads to it. The
//! resulting list powers the quick-access panel next to the raw response.

use super::readable::{human_readable_value, Readable};
use super::transform::DisplayMode;
use serde_json::Value;

/// One discovered hex leaf with its structural position
///
/// Entries are regenerated on every inspection pass and never mutated;
/// their path uniquely identifies them within a single response tree.
#[derive(Debug, Clone, PartialEq)]
pub struct HexEntry {
    /// Field names and decimal array indices, root to leaf
    pub path: Vec<String>,
    /// The original "0x..." literal, exactly as received
    pub value: String,
    /// Derived display-friendly form
    pub readable_value: Readable,
}

impl HexEntry {
    /// Dotted path label for display, or "$" when the root itself is the leaf
    pub fn path_label(&self) -> String {
        if self.path.is_empty() {
            "$".to_string()
        } else {
            self.path.join(".")
        }
    }

    /// The value to show under the given display mode
    pub fn display_value(&self, mode: DisplayMode) -> String {
        match mode {
            DisplayMode::Hex => self.value.clone(),
            DisplayMode::Readable => self.readable_value.to_string(),
        }
    }
}

/// Collect every hex leaf in `value`, in left-to-right, top-to-bottom order
///
/// **Public** - main entry point for hex discovery
///
/// Object keys are visited in the order the endpoint sent them (serde_json
/// is built with `preserve_order`), array elements in index order. Null,
/// booleans, numbers and non-hex strings contribute nothing. The walk
/// recurses to the input's own depth; interactive RPC payloads are small
/// enough that this is fine.
pub fn find_hex_values(value: &Value) -> Vec<HexEntry> {
    let mut entries = Vec::new();
    let mut path = Vec::new();
    collect(value, &mut path, &mut entries);
    entries
}

fn collect(value: &Value, path: &mut Vec<String>, entries: &mut Vec<HexEntry>) {
    match value {
        Value::String(text) if text.starts_with("0x") => {
            entries.push(HexEntry {
                path: path.clone(),
                value: text.clone(),
                readable_value: human_readable_value(text),
            });
        }
        Value::Object(map) => {
            for (key, child) in map {
                path.push(key.clone());
                collect(child, path, entries);
                path.pop();
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate() {
                path.push(index.to_string());
                collect(child, path, entries);
                path.pop();
            }
        }
        // null, booleans, numbers and plain strings are not hex leaves
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_yields_nothing() {
        assert!(find_hex_values(&Value::Null).is_empty());
    }

    #[test]
    fn test_scalars_yield_nothing() {
        assert!(find_hex_values(&json!(42)).is_empty());
        assert!(find_hex_values(&json!(true)).is_empty());
        assert!(find_hex_values(&json!("plain text")).is_empty());
    }

    #[test]
    fn test_root_string_leaf() {
        let entries = find_hex_values(&json!("0x10"));
        assert_eq!(entries.len(), 1);
        assert!(entries[0].path.is_empty());
        assert_eq!(entries[0].value, "0x10");
        assert_eq!(entries[0].path_label(), "$");
    }

    #[test]
    fn test_nested_paths() {
        let value = json!({
            "block": {
                "number": "0x10",
                "transactions": ["0xaa", "0xbb"]
            }
        });

        let entries = find_hex_values(&value);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].path, vec!["block", "number"]);
        assert_eq!(entries[1].path, vec!["block", "transactions", "0"]);
        assert_eq!(entries[2].path, vec!["block", "transactions", "1"]);
        assert_eq!(entries[1].path_label(), "block.transactions.0");
    }

    #[test]
    fn test_discovery_order_is_document_order() {
        let value = json!({
            "first": "0x1",
            "skip": 7,
            "nested": { "second": "0x2" },
            "third": "0x3"
        });

        let entries = find_hex_values(&value);
        let values: Vec<&str> = entries.iter().map(|entry| entry.value.as_str()).collect();
        assert_eq!(values, vec!["0x1", "0x2", "0x3"]);
    }

    #[test]
    fn test_no_deduplication() {
        let value = json!(["0xff", "0xff"]);
        let entries = find_hex_values(&value);
        assert_eq!(entries.len(), 2);
        assert_ne!(entries[0].path, entries[1].path);
    }

    #[test]
    fn test_empty_containers() {
        assert!(find_hex_values(&json!({})).is_empty());
        assert!(find_hex_values(&json!([])).is_empty());
    }

    #[test]
    fn test_display_value_modes() {
        let entries = find_hex_values(&json!({ "n": "0x10" }));
        assert_eq!(entries[0].display_value(DisplayMode::Hex), "0x10");
        assert_eq!(entries[0].display_value(DisplayMode::Readable), "16");
    }
}

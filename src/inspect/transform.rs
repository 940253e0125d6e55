//! Whole-tree display transformation.
//!
//! Rebuilds a response tree in the requested display mode. The input is
//! never mutated: the rendered tree is serialized separately from the
//! retained response, so containers are always freshly constructed.

use super::readable::human_readable_value;
use serde_json::Value;
use std::str::FromStr;

/// How hex leaves are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Leave hex literals as received
    #[default]
    Hex,
    /// Convert small hex quantities to decimal
    Readable,
}

impl DisplayMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Readable => "readable",
        }
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hex" => Ok(Self::Hex),
            "readable" => Ok(Self::Readable),
            other => Err(format!("unknown display mode: {}", other)),
        }
    }
}

/// Rebuild `value` under the given display mode
///
/// In `Hex` mode this is a structural copy. In `Readable` mode every hex
/// leaf is replaced by its converted form; all other values and the
/// key/index order pass through unchanged.
pub fn transform_result(value: &Value, mode: DisplayMode) -> Value {
    match value {
        Value::String(text) if mode == DisplayMode::Readable && text.starts_with("0x") => {
            human_readable_value(text).into()
        }
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, child)| (key.clone(), transform_result(child, mode)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .iter()
                .map(|item| transform_result(item, mode))
                .collect(),
        ),
        other => other.clone(),
    }
}

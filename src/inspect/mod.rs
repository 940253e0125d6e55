//! Result inspection engine.
//!
//! Everything needed to make a raw JSON-RPC response explorable:
//! discovering hex-encoded leaves with their structural path, converting
//! small hex quantities to decimal, and re-rendering whole trees in a
//! chosen display mode. All functions here are pure and synchronous;
//! callers re-run them per render instead of caching.

pub mod hex_values;
pub mod readable;
pub mod transform;

// Re-export the engine surface
pub use hex_values::{find_hex_values, HexEntry};
pub use readable::{human_readable_value, parse_hex_quantity, Readable};
pub use transform::{transform_result, DisplayMode};

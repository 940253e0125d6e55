//! Conversion of hex-encoded leaves to a display-friendly form.
//!
//! Ethereum JSON-RPC encodes quantities as "0x"-prefixed hex strings.
//! Small quantities (block numbers, nonces, counts) read better as decimal;
//! large ones (addresses, hashes, wei amounts) are kept as hex so no
//! precision is lost in a fixed-width number.

use crate::utils::config::READABLE_THRESHOLD;
use crate::utils::error::ConversionError;
use log::warn;
use num_bigint::BigUint;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Alternate display form of a hex leaf: either a small decimal quantity
/// or the original text when no better form exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Readable {
    /// Quantity below the readable threshold, rendered as decimal
    Number(u64),
    /// Everything else, verbatim
    Text(String),
}

impl fmt::Display for Readable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(quantity) => write!(f, "{}", quantity),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<Readable> for Value {
    fn from(readable: Readable) -> Self {
        match readable {
            Readable::Number(quantity) => Self::from(quantity),
            Readable::Text(text) => Self::String(text),
        }
    }
}

/// Parse a "0x"-prefixed string as an arbitrary-precision quantity
///
/// **Public** - also useful on its own for callers that want the raw value
///
/// Hex payloads routinely exceed 64 bits (256-bit EVM words, storage
/// values, whole bytecode blobs), so this must not go through a fixed-width
/// integer type.
///
/// # Errors
/// * `ConversionError::MissingPrefix` - input does not start with "0x"
/// * `ConversionError::Empty` - bare "0x" with no digits
/// * `ConversionError::InvalidDigits` - non-hex characters after the prefix
pub fn parse_hex_quantity(value: &str) -> Result<BigUint, ConversionError> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| ConversionError::MissingPrefix(value.to_string()))?;

    if digits.is_empty() {
        return Err(ConversionError::Empty);
    }

    BigUint::parse_bytes(digits.as_bytes(), 16)
        .ok_or_else(|| ConversionError::InvalidDigits(value.to_string()))
}

/// Compute the human-readable form of a string leaf
///
/// Non-hex strings pass through unchanged, so this is safe to call on any
/// string. Malformed hex degrades to the original text; the parse failure
/// is only visible in the debug log.
pub fn human_readable_value(value: &str) -> Readable {
    if !value.starts_with("0x") {
        return Readable::Text(value.to_string());
    }

    match parse_hex_quantity(value) {
        Ok(quantity) => {
            if quantity < BigUint::from(READABLE_THRESHOLD) {
                // Below the threshold the value always fits in one u64 limb
                let limbs = quantity.to_u64_digits();
                Readable::Number(limbs.first().copied().unwrap_or(0))
            } else {
                Readable::Text(value.to_string())
            }
        }
        Err(err) => {
            warn!("Invalid hex value {}: {}", value, err);
            Readable::Text(value.to_string())
        }
    }
}

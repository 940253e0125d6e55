//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur during RPC communication
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),
}

/// Errors that can occur converting a hex leaf to its readable form.
///
/// These never reach the user: the readable conversion catches them,
/// logs, and falls back to the original hex string.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("missing 0x prefix: {0}")]
    MissingPrefix(String),

    #[error("empty hex quantity")]
    Empty,

    #[error("invalid hex digits: {0}")]
    InvalidDigits(String),
}

/// Errors that can occur assembling RPC parameters from the form
#[derive(Error, Debug)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Unknown method: {0}")]
    UnknownMethod(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("{0} expects true or false")]
    InvalidFlag(&'static str),
}

//! eth-rpc-probe
//!
//! Form-driven debugger for Ethereum-compatible JSON-RPC endpoints:
//! pick a method, fill in typed parameters, submit the call and inspect
//! the JSON response with hex/decimal toggling.
//!
//! This crate provides the core implementation for the `rpc-probe` CLI
//! tool. The interesting part lives in [`inspect`]: discovery of hex
//! leaves in a response tree, readable-value conversion and whole-tree
//! display transformation. The rest is the method registry, the HTTP
//! transport and the session bookkeeping that the CLI shell drives.

pub mod commands;
pub mod inspect;
pub mod registry;
pub mod rpc;
pub mod session;
pub mod utils;

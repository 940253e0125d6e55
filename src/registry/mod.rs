//! Static RPC method registry.
//!
//! Each supported method knows which form fields it consumes and how to
//! assemble its JSON-RPC parameter list from the current form values.
//! There is no algorithmic content here, just the lookup table that drives
//! the form and the call commands.

pub mod fields;
pub mod methods;

pub use fields::{Field, FormData, ALL_FIELDS};
pub use methods::{Method, ALL_METHODS};

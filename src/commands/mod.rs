//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the library components to perform user tasks.

pub mod call;
pub mod console;
pub mod utils;

// Re-export main command functions
pub use call::{execute_call, validate_args, CallArgs};
pub use console::{run_console, Console};
pub use utils::{display_version, list_methods};

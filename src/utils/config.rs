//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default timeout for RPC requests
pub const DEFAULT_RPC_TIMEOUT: Duration = Duration::from_secs(30);

/// Default JSON-RPC endpoint (Westend Asset Hub public node)
pub const DEFAULT_ENDPOINT: &str = "https://westend-asset-hub-eth-rpc.polkadot.io";

/// JSON-RPC protocol version sent in every request envelope
pub const JSONRPC_VERSION: &str = "2.0";

/// Request envelope id. Responses are routed to their session slot by
/// request id, not by envelope id, so a fixed value is fine.
pub const ENVELOPE_ID: u64 = 1;

// Hex quantities strictly below this threshold are shown as decimal numbers
// in readable mode. Larger values are more likely token amounts, hashes or
// addresses and stay hex, so nothing gets truncated or rounded.
pub const READABLE_THRESHOLD: u64 = 1_000_000_000_000;

/// How long a "copied" acknowledgment stays active
pub const COPY_FLASH_DURATION: Duration = Duration::from_millis(2000);

// Form defaults, mirrored in `FormData::default`
pub const DEFAULT_BLOCK_TAG: &str = "latest";
pub const DEFAULT_GAS_LIMIT: &str = "90000";
pub const DEFAULT_VALUE: &str = "0";

//! JSON-RPC transport: envelope types and the HTTP client.

pub mod client;
pub mod types;

pub use client::RpcClient;
pub use types::{ErrorPayload, JsonRpcRequest, RpcResponse};

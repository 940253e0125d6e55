//! HTTP client for talking to an Ethereum-compatible JSON-RPC endpoint.

use super::types::{JsonRpcRequest, RpcResponse};
use crate::utils::config::DEFAULT_RPC_TIMEOUT;
use crate::utils::error::RpcError;
use log::{debug, info};
use reqwest::blocking::Client;
use serde_json::Value;

/// Client issuing one fire-and-forget POST per RPC call
pub struct RpcClient {
    client: Client,
    endpoint: String,
}

impl RpcClient {
    /// Create a new RPC client
    pub fn new(endpoint: impl Into<String>) -> Result<Self, RpcError> {
        let client = Client::builder()
            .timeout(DEFAULT_RPC_TIMEOUT)
            .build()
            .map_err(RpcError::RequestFailed)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue a single JSON-RPC call and interpret the response body
    ///
    /// # Errors
    /// * `RpcError::RequestFailed` - connection, timeout or non-JSON body
    /// * `RpcError::InvalidResponse` - non-success HTTP status
    ///
    /// Callers that render results convert these into an error response via
    /// [`RpcResponse::from_transport_error`]; nothing here retries.
    pub fn call(&self, method: &str, params: Vec<Value>) -> Result<RpcResponse, RpcError> {
        let request = JsonRpcRequest::new(method, params);

        info!("Calling {} on {}", method, self.endpoint);
        debug!("RPC request: {:?}", request);

        // Make HTTP POST request
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .map_err(RpcError::RequestFailed)?;

        // Check HTTP status
        if !response.status().is_success() {
            return Err(RpcError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        // Parse the body as JSON and keep it verbatim
        let body: Value = response.json().map_err(RpcError::RequestFailed)?;
        debug!("RPC response body: {}", body);

        Ok(RpcResponse::from_body(body))
    }
}

//! Types for JSON-RPC communication with an Ethereum-compatible endpoint.
//!
//! Based on the Ethereum JSON-RPC spec. The response side is deliberately
//! lenient: every envelope field is optional and anything that does not
//! look like an envelope at all is kept wholesale, so the probe can render
//! whatever the endpoint actually sent.

use crate::utils::config::{ENVELOPE_ID, JSONRPC_VERSION};
use crate::utils::error::RpcError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request structure
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub method: String,
    pub params: Vec<Value>,
    pub id: u64,
}

impl JsonRpcRequest {
    /// Create a new JSON-RPC request envelope
    pub fn new(method: impl Into<String>, params: Vec<Value>) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            method: method.into(),
            params,
            id: ENVELOPE_ID,
        }
    }
}

/// JSON-RPC 2.0 response structure
///
/// Exactly one of `result`/`error` is meaningful per JSON-RPC convention,
/// though both may be structurally present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorPayload>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jsonrpc: Option<String>,
}

impl RpcResponse {
    /// Interpret an arbitrary response body
    ///
    /// Bodies that do not match the envelope shape (arrays, bare scalars,
    /// string ids) are stored wholesale in `result` rather than rejected.
    pub fn from_body(body: Value) -> Self {
        match Self::deserialize(&body) {
            Ok(response) => response,
            Err(_) => Self {
                result: Some(body),
                ..Self::default()
            },
        }
    }

    /// Wrap a transport failure so it renders like any other result
    pub fn from_transport_error(err: &RpcError) -> Self {
        Self {
            error: Some(ErrorPayload::Message(err.to_string())),
            ..Self::default()
        }
    }

    /// The whole response as a JSON value, for display-mode rendering
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// JSON-RPC error field
///
/// Servers send either a bare string or an object carrying at least a
/// message, usually with a numeric code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    Message(String),
    Object {
        message: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        code: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        data: Option<Value>,
    },
}

impl ErrorPayload {
    /// Human-readable error text regardless of shape
    pub fn message(&self) -> &str {
        match self {
            Self::Message(message) => message,
            Self::Object { message, .. } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_envelope_shape() {
        let request = JsonRpcRequest::new("eth_blockNumber", vec![]);
        let encoded = serde_json::to_value(&request).unwrap();
        assert_eq!(
            encoded,
            json!({
                "jsonrpc": "2.0",
                "method": "eth_blockNumber",
                "params": [],
                "id": 1
            })
        );
    }

    #[test]
    fn test_from_body_success_envelope() {
        let response = RpcResponse::from_body(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "result": "0x10"
        }));
        assert_eq!(response.result, Some(json!("0x10")));
        assert!(!response.is_error());
    }

    #[test]
    fn test_from_body_error_object() {
        let response = RpcResponse::from_body(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": { "code": -32601, "message": "method not found" }
        }));
        assert_eq!(response.error.as_ref().unwrap().message(), "method not found");
    }

    #[test]
    fn test_from_body_error_string() {
        let response = RpcResponse::from_body(json!({ "error": "boom" }));
        assert_eq!(response.error.as_ref().unwrap().message(), "boom");
    }

    #[test]
    fn test_from_body_unshaped_payload_kept_wholesale() {
        let body = json!([1, 2, 3]);
        let response = RpcResponse::from_body(body.clone());
        assert_eq!(response.result, Some(body));
        assert!(response.error.is_none());
    }

    #[test]
    fn test_to_value_skips_absent_fields() {
        let response = RpcResponse {
            result: Some(json!("0x1")),
            ..RpcResponse::default()
        };
        assert_eq!(response.to_value(), json!({ "result": "0x1" }));
    }
}

//! JSON-RPC 2.0 envelope types.
//!
//! ```text
//! -> {"jsonrpc":"2.0","id":7,"method":"topics_list","params":{"archived":0}}
//! <- {"jsonrpc":"2.0","id":7,"result":{...}}
//! <- {"jsonrpc":"2.0","id":7,"error":{"code":403,"message":"forbidden"}}
//! ```

use crate::config::NetworkConfig;
use crate::{Result, WobbleError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keyed parameters of a call.
pub type Params = Map<String, Value>;

/// JSON-RPC 2.0 request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub jsonrpc: String,
    pub id: u64,
    pub method: String,
    pub params: Params,
}

impl RpcRequest {
    pub fn new(method: impl Into<String>, params: Params, id: u64) -> Self {
        Self {
            jsonrpc: NetworkConfig::JSONRPC_VERSION.to_string(),
            id,
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC 2.0 response as received, before validation.
///
/// Fields are optional so that a malformed envelope still parses and can be
/// reported as a protocol error instead of a generic JSON error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RpcResponse {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    #[serde(default)]
    pub id: Option<Value>,
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcResponse {
    /// Validate the envelope and extract the result.
    ///
    /// A missing `result` with no `error` yields `null`.
    pub fn into_result(self) -> Result<Value> {
        if self.jsonrpc.as_deref() != Some(NetworkConfig::JSONRPC_VERSION) {
            return Err(WobbleError::Protocol {
                message: "Result is not in JSON-RPC 2.0 format".to_string(),
            });
        }

        if let Some(error) = self.error {
            let error: RpcErrorObject =
                serde_json::from_value(error).map_err(|e| WobbleError::Protocol {
                    message: format!("Malformed error object: {}", e),
                })?;
            return Err(WobbleError::Remote {
                code: error.code,
                message: error.message,
            });
        }

        Ok(self.result.unwrap_or(Value::Null))
    }
}

//! JSON-RPC protocol representations and formatting utilities
//!
//! Provides the request and response envelopes shared by every transport adapter.

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const JSONRPC_VERSION: &str = "2.0";

pub const PARSE_ERROR: i64 = -32700;
pub const INVALID_REQUEST: i64 = -32600;
pub const METHOD_NOT_FOUND: i64 = -32601;
pub const INTERNAL_ERROR: i64 = -32603;

/// A decoded JSON-RPC request. `method` is required; `id` and `params` stay
/// opaque because each method interprets its own params.
#[derive(Debug, Clone, Deserialize)]
pub struct RpcRequest {
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

/// A response envelope carries exactly one of `result` or `error`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RpcResponse {
    Result {
        jsonrpc: &'static str,
        id: Value,
        result: Value,
    },
    Error {
        jsonrpc: &'static str,
        id: Value,
        error: RpcError,
    },
}

impl RpcResponse {
    pub fn result(id: Option<Value>, result: Value) -> Self {
        Self::Result {
            jsonrpc: JSONRPC_VERSION,
            id: id.unwrap_or(Value::Null),
            result,
        }
    }

    pub fn error(id: Option<Value>, code: i64, message: impl Into<String>) -> Self {
        Self::Error {
            jsonrpc: JSONRPC_VERSION,
            id: id.unwrap_or(Value::Null),
            error: RpcError {
                code,
                message: message.into(),
            },
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

//! The central JSON-RPC dispatch core
//!
//! Provides envelope validation and the fixed method table every transport
//! adapter feeds into.

use serde_json::{json, Value};

use crate::domain::{
    prompts::build_prompts_list,
    resources::{build_resources_list, handle_resources_read},
    tools::{build_tools_list, handle_tools_call},
};
use crate::mcp::rpc::{RpcRequest, RpcResponse, INVALID_REQUEST, METHOD_NOT_FOUND};
use crate::mcp::simulator::process_request;
use crate::AppState;

pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Validate a decoded JSON payload and run it through the simulator.
///
/// Payloads that are not request objects, or that lack a `method`, are
/// rejected up front with `-32600`, echoing whatever `id` they carried.
pub async fn handle_json_rpc_value(state: &AppState, payload: Value) -> RpcResponse {
    let request_id = payload.get("id").cloned();
    let request: RpcRequest = match serde_json::from_value(payload) {
        Ok(request) => request,
        Err(_) => return RpcResponse::error(request_id, INVALID_REQUEST, "Invalid Request"),
    };

    process_request(state, request).await
}

/// The fixed method table. Match is exact-string and case-sensitive.
pub fn dispatch(request: &RpcRequest) -> RpcResponse {
    let id = request.id.clone();
    let params = request.params.as_ref();

    match request.method.as_str() {
        "initialize" => RpcResponse::result(id, initialize_result()),
        "tools/list" => RpcResponse::result(id, build_tools_list()),
        "tools/call" => RpcResponse::result(id, handle_tools_call(params)),
        "resources/list" => RpcResponse::result(id, build_resources_list()),
        "resources/read" => RpcResponse::result(id, handle_resources_read(params)),
        "prompts/list" => RpcResponse::result(id, build_prompts_list()),
        other => RpcResponse::error(
            id,
            METHOD_NOT_FOUND,
            format!("Method not found: {other}"),
        ),
    }
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "serverInfo": {
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        },
        "capabilities": {
            "tools": { "listChanged": true },
            "resources": { "listChanged": true },
            "prompts": { "listChanged": true },
        },
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(method: &str, params: Option<serde_json::Value>) -> RpcRequest {
        RpcRequest {
            id: Some(json!(7)),
            method: method.to_string(),
            params,
        }
    }

    #[test]
    fn initialize_advertises_fixed_identity() {
        let response = dispatch(&request("initialize", None));
        let value = serde_json::to_value(&response).expect("serialize");

        assert_eq!(value["result"]["protocolVersion"], "2024-11-05");
        assert_eq!(value["result"]["serverInfo"]["name"], "test-http-mcp-server");
        assert_eq!(value["result"]["serverInfo"]["version"], "0.1.0");
        for capability in ["tools", "resources", "prompts"] {
            assert_eq!(
                value["result"]["capabilities"][capability]["listChanged"],
                true
            );
        }
    }

    #[test]
    fn unknown_method_message_names_the_method() {
        let response = dispatch(&request("tools/uninstall", None));
        let value = serde_json::to_value(&response).expect("serialize");

        assert_eq!(value["error"]["code"], -32601);
        assert_eq!(value["error"]["message"], "Method not found: tools/uninstall");
        assert_eq!(value["id"], 7);
    }

    #[test]
    fn method_match_is_case_sensitive() {
        let response = dispatch(&request("Initialize", None));
        assert!(response.is_error());
    }

    #[test]
    fn empty_method_is_not_found() {
        let response = dispatch(&request("", None));
        let value = serde_json::to_value(&response).expect("serialize");

        assert_eq!(value["error"]["code"], -32601);
        assert_eq!(value["error"]["message"], "Method not found: ");
    }
}

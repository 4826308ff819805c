//! Canned tools exposed via the emulated Model Context Protocol
//!
//! Provides fixed `tools/list` descriptors and an always-successful
//! `tools/call` stub that never runs anything.

use serde_json::{json, Value};

pub const TOOL_CATALOG: [&str; 5] = [
    "calculator",
    "file_reader",
    "web_search",
    "database_query",
    "email_sender",
];

pub fn build_tools_list() -> Value {
    let tools = TOOL_CATALOG
        .iter()
        .map(|name| {
            json!({
                "name": name,
                "description": format!("Test {name} tool"),
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "input": { "type": "string" }
                    }
                }
            })
        })
        .collect::<Vec<_>>();

    json!({ "tools": tools })
}

/// Succeeds for any `name`, recognized or not.
pub fn handle_tools_call(params: Option<&Value>) -> Value {
    let name = params
        .and_then(|params| params.get("name"))
        .and_then(Value::as_str)
        .unwrap_or("unknown");

    json!({
        "content": [
            {
                "type": "text",
                "text": format!("Result from {name}: Success!")
            }
        ]
    })
}

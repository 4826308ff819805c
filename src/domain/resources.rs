//! Canned resources exposed via the emulated Model Context Protocol
//!
//! Provides fixed `resources/list` descriptors and a `resources/read` stub
//! that synthesizes content from the requested URI.

use serde_json::{json, Value};

pub const RESOURCE_CATALOG: [&str; 4] = [
    "config://settings.json",
    "file://documents/readme.md",
    "url://api.example.com/data",
    "database://users/table",
];

pub fn build_resources_list() -> Value {
    let resources = RESOURCE_CATALOG
        .iter()
        .map(|uri| {
            json!({
                "uri": uri,
                "name": resource_name(uri),
                "mimeType": "text/plain"
            })
        })
        .collect::<Vec<_>>();

    json!({ "resources": resources })
}

// The display name is everything after the first scheme separator.
fn resource_name(uri: &str) -> &str {
    uri.split_once("://").map_or(uri, |(_, rest)| rest)
}

pub fn handle_resources_read(params: Option<&Value>) -> Value {
    let uri = params
        .and_then(|params| params.get("uri"))
        .and_then(Value::as_str)
        .unwrap_or("unknown://unknown");

    json!({
        "contents": [
            {
                "uri": uri,
                "mimeType": "text/plain",
                "text": format!("Content of {uri}")
            }
        ]
    })
}

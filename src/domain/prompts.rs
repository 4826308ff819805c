//! The single static prompt advertised by the fixture.

use serde_json::{json, Value};

pub fn build_prompts_list() -> Value {
    json!({
        "prompts": [
            {
                "name": "test_prompt",
                "description": "A test prompt",
                "arguments": []
            }
        ]
    })
}

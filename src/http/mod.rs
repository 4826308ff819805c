//! HTTP transport layer for the emulated MCP endpoint
//!
//! Provides the SSE and plain-stream route handlers sharing one dispatch core.

pub mod handlers;

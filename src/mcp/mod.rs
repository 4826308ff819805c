//! Model Context Protocol (MCP) emulation and JSON-RPC handling
//!
//! Provides the envelope types, the fixed method table, and the response simulator.

pub mod rpc;
pub mod server;
pub mod simulator;

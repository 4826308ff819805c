//! Response simulator wrapped around every dispatch
//!
//! Applies the configured latency jitter and error injection before the
//! method table runs, so the proxy under test sees an imperfect backend.

use std::sync::atomic::Ordering;

use tracing::info;

use crate::mcp::rpc::{RpcRequest, RpcResponse, INTERNAL_ERROR};
use crate::mcp::server::dispatch;
use crate::sampler::Sampler;
use crate::AppState;

/// Count, delay, maybe inject an error, then dispatch.
///
/// The injected error short-circuits before the method table, even for
/// methods that would otherwise succeed. Both random draws go through the
/// state's [`Sampler`](crate::sampler::Sampler).
pub async fn process_request(state: &AppState, request: RpcRequest) -> RpcResponse {
    let sequence = state.request_count.fetch_add(1, Ordering::Relaxed) + 1;
    info!(sequence, method = %request.method, "request dispatched");

    let simulation = state.simulation;
    let spread = simulation.delay_max.saturating_sub(simulation.delay_min);
    let delay = simulation.delay_min + spread.mul_f64(state.sampler.next_fraction());
    tokio::time::sleep(delay).await;

    if state.sampler.next_fraction() < simulation.error_rate {
        return RpcResponse::error(
            request.id,
            INTERNAL_ERROR,
            format!("Simulated error for testing: {}", request.method),
        );
    }

    dispatch(&request)
}

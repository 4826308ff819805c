//! Axum HTTP handlers for the three transport adapters
//!
//! Each adapter frames the shared dispatch core's output differently: plain
//! JSON body, one-shot SSE event, or a persistent heartbeat-only stream.

use std::convert::Infallible;
use std::time::Duration;

use axum::{
    body::{Body, Bytes},
    extract::State,
    http::{header, StatusCode},
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    Json,
};
use futures::stream::Stream;
use serde_json::Value;
use tracing::info;

use crate::mcp::rpc::{RpcResponse, PARSE_ERROR};
use crate::mcp::server::handle_json_rpc_value;
use crate::AppState;

const HEARTBEAT_INTERVAL: Duration = Duration::from_secs(30);

/// POST /message: single request, plain JSON response body.
pub async fn stream_post(State(state): State<AppState>, body: Bytes) -> Response {
    info!("stream connection established");

    let envelope = match parse_body(&body) {
        Ok(payload) => handle_json_rpc_value(&state, payload).await,
        Err(parse_error) => parse_error,
    };

    (StatusCode::OK, Json(envelope)).into_response()
}

/// POST /sse: single request, answered as exactly one SSE event frame.
///
/// Parse failures are delivered as an error envelope inside the frame, never
/// as a transport-level failure.
pub async fn sse_post(State(state): State<AppState>, body: Bytes) -> Response {
    info!("sse post request received");

    let envelope = match parse_body(&body) {
        Ok(payload) => handle_json_rpc_value(&state, payload).await,
        Err(parse_error) => parse_error,
    };

    let payload = serde_json::to_string(&envelope).expect("rpc response serialization");
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/event-stream")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from(format!("data: {payload}\n\n")))
        .expect("sse response build")
}

/// GET /sse: persistent stream. One `connected` event, then heartbeat
/// comments every 30 seconds until the client disconnects. No JSON-RPC is
/// processed on this path.
pub async fn sse_get() -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    info!("sse get connection established (persistent stream)");

    let stream = async_stream::stream! {
        let _guard = ConnectionGuard;
        yield Ok::<_, Infallible>(Event::default()
            .event("connected")
            .data(r#"{"type":"connected"}"#));

        // Nothing else is ever emitted; the keep-alive timer owns the wire
        // until the connection drops.
        futures::future::pending::<()>().await;
    };

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(HEARTBEAT_INTERVAL)
            .text("heartbeat"),
    )
}

fn parse_body(body: &Bytes) -> Result<Value, RpcResponse> {
    serde_json::from_slice(body)
        .map_err(|err| RpcResponse::error(None, PARSE_ERROR, format!("Parse error: {err}")))
}

// Client disconnect drops the stream; the guard turns that into a log line
// instead of an error path.
struct ConnectionGuard;

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        info!("sse get connection closed");
    }
}

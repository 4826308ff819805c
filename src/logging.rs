use std::time::Instant;

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

/// Request summary line per connection. Envelope-level errors ride inside
/// 200 responses here, so the only HTTP-level failure worth flagging is a
/// route the active mode never registered.
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started_at = Instant::now();

    let response = next.run(request).await;

    if response.status() == StatusCode::NOT_FOUND {
        warn!(method = %method, path = %path, "route not registered in this mode");
    } else {
        info!(
            method = %method,
            path = %path,
            simulated_ms = started_at.elapsed().as_millis() as u64,
            "request answered"
        );
    }

    response
}

use std::sync::{atomic::AtomicU64, Arc};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub mod config;
pub mod domain;
pub mod http;
pub mod logging;
pub mod mcp;
pub mod sampler;

use config::{Mode, SimulationConfig};
use sampler::Sampler;

#[derive(Clone)]
pub struct AppState {
    pub simulation: SimulationConfig,
    pub sampler: Arc<dyn Sampler>,
    pub request_count: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(simulation: SimulationConfig, sampler: Arc<dyn Sampler>) -> Self {
        Self {
            simulation,
            sampler,
            request_count: Arc::new(AtomicU64::new(0)),
        }
    }
}

pub fn build_app(state: AppState, mode: Mode) -> Router {
    let routes = match mode {
        Mode::Sse => Router::new().route(
            "/sse",
            get(http::handlers::sse_get).post(http::handlers::sse_post),
        ),
        Mode::Stream => Router::new().route("/message", post(http::handlers::stream_post)),
    };

    routes
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}

use std::sync::Arc;

use test_http_mcp_server::{
    build_app, config::Config, logging, sampler::ThreadRngSampler, AppState,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env()?;
    let bind_socket = config.bind_socket()?;
    let state = AppState::new(config.simulation, Arc::new(ThreadRngSampler));
    let app = build_app(state, config.mode);
    let listener = tokio::net::TcpListener::bind(bind_socket).await?;

    info!(
        mode = %config.mode,
        endpoint = %format!(
            "http://{}:{}{}",
            config.bind_addr,
            config.bind_port,
            config.mode.endpoint_path()
        ),
        "mcp test server starting"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

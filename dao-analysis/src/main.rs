//! dao-analysis service entry point.

use anyhow::Result;
use dao_analysis::{build_router, AppState, MockAnalyzer, ProposalAnalyzer};
use dao_common::config::Config;
use dao_common::logging::init_logging;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() -> Result<()> {
    let startup_start = std::time::Instant::now();

    let config = Config::load()?;
    init_logging(
        &config.observability.log_level,
        &config.observability.log_format,
    );

    tracing::info!("DAO Analysis v{}", env!("CARGO_PKG_VERSION"));

    // The production analyzer plugs in here; the mock keeps the service
    // fully functional until it lands.
    let analyzer: Arc<dyn ProposalAnalyzer> = Arc::new(MockAnalyzer::new());
    let state = AppState::new(analyzer);

    // Build router with CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = build_router(state).layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.service.port));

    let startup_duration = startup_start.elapsed();
    tracing::info!(
        duration_ms = startup_duration.as_millis() as u64,
        "Service initialized in {:?}",
        startup_duration
    );

    tracing::info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

use std::process::ExitCode;
use std::sync::Arc;

use amt_gateway::config::GatewayConfig;
use amt_gateway::upstream::{AmtClient, MockUpstream, Upstream};
use amt_gateway::web::{AppState, create_router};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("{}=info,tower_http=info", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match GatewayConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    // Serve fixtures when a mock directory is configured, the live site otherwise
    let upstream: Arc<dyn Upstream> = match &config.mock_upstream_dir {
        Some(dir) => match MockUpstream::from_dir(dir) {
            Ok(mock) => {
                info!(
                    dir = %dir.display(),
                    stops = mock.available_stops().len(),
                    lines = mock.available_lines().len(),
                    "serving mock upstream"
                );
                Arc::new(mock)
            }
            Err(e) => {
                error!("failed to load mock upstream: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => match AmtClient::new(config.upstream.clone()) {
            Ok(client) => Arc::new(client),
            Err(e) => {
                error!("failed to create upstream client: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let app = create_router(AppState::new(upstream), &config);

    let addr = config.socket_addr();
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(%addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(%addr, "listening");
    info!("  GET /api/v1/stop/{{code}}  - arrivals at a stop (4 digits)");
    info!("  GET /api/v1/line/{{code}}  - today's timetable for a line");
    info!("  GET /health              - health check");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

/// Resolve on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

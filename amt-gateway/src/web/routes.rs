//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Request, State, rejection::PathRejection},
    http::{HeaderValue, StatusCode, header},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;
use tracing::{debug, info, warn};

use crate::config::GatewayConfig;
use crate::domain::{CodeError, LineCode, LineRecord, StopCode, StopRecord};
use crate::extract::{parse_line, parse_stop};
use crate::upstream::UpstreamError;

use super::dto::ErrorResponse;
use super::state::AppState;

/// Create the application router.
///
/// `/api` carries the JSON endpoints; every other path is served from the
/// configured static directory.
pub fn create_router(state: AppState, config: &GatewayConfig) -> Router {
    let api = Router::new()
        .route("/v1/stop/:code", get(stop_board).fallback(not_found))
        .route("/v1/line/:code", get(line_timetable).fallback(not_found))
        .fallback(not_found)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ));

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TimeoutLayer::new(config.request_timeout()))
        .layer(middleware::from_fn(log_request))
        .with_state(state)
}

/// Log every request target before it is dispatched.
async fn log_request(request: Request, next: Next) -> Response {
    info!(method = %request.method(), target = %request.uri(), "request");
    next.run(request).await
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Unmatched API paths, and methods other than GET on matched ones.
async fn not_found() -> AppError {
    AppError::NotFound
}

/// Arrival board for a stop.
async fn stop_board(
    State(state): State<AppState>,
    code: Result<Path<String>, PathRejection>,
) -> Result<Json<StopRecord>, AppError> {
    let Path(code) = code.map_err(|_| AppError::NotFound)?;
    let code = StopCode::parse(&code)?;

    let body = state.upstream.fetch_stop(&code).await?;
    let record = parse_stop(&body);

    if record.is_unknown() {
        info!(stop = %code, "stop not known upstream");
    } else {
        debug!(stop = %code, arrivals = record.arrivals.len(), "stop board extracted");
    }

    Ok(Json(record))
}

/// Today's timetable for a line.
async fn line_timetable(
    State(state): State<AppState>,
    code: Result<Path<String>, PathRejection>,
) -> Result<Json<LineRecord>, AppError> {
    let Path(code) = code.map_err(|_| AppError::NotFound)?;
    let code = LineCode::parse(&code)?;

    let body = state.upstream.fetch_line(&code).await?;
    let record = parse_line(&body);

    debug!(line = %code, directions = record.directions.len(), "timetable extracted");

    Ok(Json(record))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// Unknown path or malformed code; answered with an empty body
    NotFound,
    /// The upstream page could not be obtained
    BadGateway { message: String },
}

impl From<CodeError> for AppError {
    fn from(e: CodeError) -> Self {
        debug!("{e}");
        AppError::NotFound
    }
}

impl From<UpstreamError> for AppError {
    fn from(e: UpstreamError) -> Self {
        if e.is_timeout() {
            warn!(error = %e, "upstream timed out");
        } else {
            warn!(error = %e, "upstream unavailable");
        }
        AppError::BadGateway {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::BadGateway { message } => {
                let body = Json(ErrorResponse { error: message });
                (StatusCode::BAD_GATEWAY, body).into_response()
            }
        }
    }
}

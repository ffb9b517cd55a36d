//! Web layer for the AMT gateway.
//!
//! Exposes the stop and line endpoints under `/api/v1`, a health check, and
//! the static web client.

mod dto;
mod routes;
mod state;

pub use dto::ErrorResponse;
pub use routes::{AppError, create_router};
pub use state::AppState;

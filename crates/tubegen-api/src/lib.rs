//! Axum HTTP API server.
//!
//! This crate provides:
//! - Script generation and upload endpoints under `/api`
//! - Style catalog and health reporting
//! - Prometheus metrics

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::AppConfig;
pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;

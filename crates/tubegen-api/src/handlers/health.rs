//! Health check handler.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

/// Health response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    /// `configured` or `demo`
    pub text_generation: &'static str,
    /// `configured` or `demo`
    pub youtube_upload: &'static str,
}

fn mode(configured: bool) -> &'static str {
    if configured {
        "configured"
    } else {
        "demo"
    }
}

/// Health check endpoint (liveness probe).
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now().to_rfc3339(),
        text_generation: mode(state.scripts.is_configured()),
        youtube_upload: mode(state.uploads.is_configured()),
    })
}

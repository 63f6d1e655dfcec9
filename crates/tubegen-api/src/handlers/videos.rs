//! Video generation handler.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde_json::Value;
use tracing::{info, warn};
use tubegen_models::{VideoJob, VideoStyle};

use crate::error::{ApiError, ApiResult};
use crate::handlers::text_field;
use crate::metrics::record_script;
use crate::state::AppState;

/// Generate a script for a topic and wrap it in a new video job.
///
/// Body: `{topic, videoStyle?}`. A style that is missing, unknown or not a
/// string resolves to facts.
pub async fn generate_video(State(state): State<AppState>, body: Bytes) -> ApiResult<Json<VideoJob>> {
    let request: Value = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Unreadable generate request body");
        ApiError::UnreadableGenerateBody(e)
    })?;

    let topic =
        text_field(&request, "topic").ok_or_else(|| ApiError::bad_request("Topic is required"))?;

    let style = VideoStyle::from_tag(request.get("videoStyle").and_then(Value::as_str));

    let outcome = state.scripts.generate(topic, style).await;
    record_script(outcome.kind());

    let job = VideoJob::new(outcome.into_content(), style, Utc::now());
    info!(video_id = %job.id(), style = %style, "Video job created");

    Ok(Json(job))
}

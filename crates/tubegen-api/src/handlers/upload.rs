//! YouTube upload handler.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};
use tubegen_upload::service::{
    UploadOutcome, DEMO_MESSAGE, SIMULATED_MESSAGE, SIMULATED_URL,
};

use crate::error::{ApiError, ApiResult};
use crate::handlers::text_field;
use crate::metrics::record_upload;
use crate::state::AppState;

/// Upload response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub youtube_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_mode: Option<bool>,
}

impl From<UploadOutcome> for UploadResponse {
    fn from(outcome: UploadOutcome) -> Self {
        match outcome {
            UploadOutcome::Demo { youtube_id } => Self {
                youtube_id,
                url: None,
                status: None,
                message: Some(DEMO_MESSAGE.to_string()),
                demo_mode: Some(true),
            },
            UploadOutcome::Simulated { youtube_id } => Self {
                youtube_id,
                url: Some(SIMULATED_URL.to_string()),
                status: Some("uploaded".to_string()),
                message: Some(SIMULATED_MESSAGE.to_string()),
                demo_mode: None,
            },
        }
    }
}

/// Upload a generated video to YouTube (demo or simulated).
///
/// Body: `{videoId}`. The id is not looked up.
pub async fn upload_youtube(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<UploadResponse>> {
    let request: Value = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, "Unreadable upload request body");
        record_upload("failed");
        ApiError::UnreadableUploadBody(e)
    })?;

    let video_id = text_field(&request, "videoId")
        .ok_or_else(|| ApiError::bad_request("Video ID is required"))?;

    match state.uploads.upload(video_id).await {
        Ok(outcome) => {
            record_upload(outcome.mode());
            Ok(Json(outcome.into()))
        }
        Err(e) => {
            error!(video_id = %video_id, error = %e, "YouTube upload failed");
            record_upload("failed");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_response_shape() {
        let response = UploadResponse::from(UploadOutcome::Demo {
            youtube_id: "DEMO_abc123".to_string(),
        });
        let json = serde_json::to_value(response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "youtubeId": "DEMO_abc123",
                "message": DEMO_MESSAGE,
                "demoMode": true,
            })
        );
    }

    #[test]
    fn test_simulated_response_shape() {
        let response = UploadResponse::from(UploadOutcome::Simulated {
            youtube_id: "SIMULATED_abc123".to_string(),
        });
        let json = serde_json::to_value(response).unwrap();

        assert_eq!(json["url"], SIMULATED_URL);
        assert_eq!(json["status"], "uploaded");
        assert_eq!(json["message"], SIMULATED_MESSAGE);
        assert!(json.get("demoMode").is_none());
    }
}

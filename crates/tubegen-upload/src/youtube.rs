//! YouTube Data API v3 client.
//!
//! Uploads use the resumable protocol: the metadata is posted first, the
//! response's `Location` header names a session URI, and the media bytes are
//! then PUT to that URI.

use std::path::Path;
use std::time::Duration;

use reqwest::header::LOCATION;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{UploadError, UploadResult};
use crate::oauth::OAuthClient;

/// Root of the YouTube upload API.
pub const YOUTUBE_UPLOAD_BASE: &str = "https://www.googleapis.com/upload/youtube/v3";

/// "People & Blogs"
const CATEGORY_PEOPLE_AND_BLOGS: &str = "22";

/// Metadata sent with a video insert.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoInsert {
    pub snippet: Snippet,
    pub status: PrivacyStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snippet {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub category_id: String,
    pub default_language: String,
    pub default_audio_language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacyStatus {
    pub privacy_status: String,
    pub self_declared_made_for_kids: bool,
}

impl VideoInsert {
    /// Public, Hindi-language upload with the default tags.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            snippet: Snippet {
                title: title.into(),
                description: description.into(),
                tags: ["AI Generated", "Faceless Video", "Automated"]
                    .iter()
                    .map(|t| t.to_string())
                    .collect(),
                category_id: CATEGORY_PEOPLE_AND_BLOGS.to_string(),
                default_language: "hi".to_string(),
                default_audio_language: "hi".to_string(),
            },
            status: PrivacyStatus {
                privacy_status: "public".to_string(),
                self_declared_made_for_kids: false,
            },
        }
    }
}

/// Video resource returned after an upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedVideo {
    pub id: String,
}

/// Authorized YouTube client.
pub struct YoutubeClient {
    http: Client,
    oauth: OAuthClient,
    upload_base: String,
}

impl YoutubeClient {
    pub fn new(oauth: OAuthClient, timeout: Duration) -> UploadResult<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| UploadError::Client(e.to_string()))?;

        Ok(Self {
            http,
            oauth,
            upload_base: YOUTUBE_UPLOAD_BASE.to_string(),
        })
    }

    /// Use a different upload API root.
    pub fn with_upload_base(mut self, upload_base: impl Into<String>) -> Self {
        self.upload_base = upload_base.into();
        self
    }

    /// Upload a local video file with the given metadata.
    ///
    /// The request handlers never call this: no video file is rendered yet.
    pub async fn insert_video(
        &self,
        video_path: &Path,
        metadata: &VideoInsert,
    ) -> UploadResult<UploadedVideo> {
        let media = tokio::fs::read(video_path).await?;
        let access_token = self.oauth.access_token(&self.http).await?;

        let initiate = self
            .http
            .post(format!(
                "{}/videos?uploadType=resumable&part=snippet,status",
                self.upload_base.trim_end_matches('/')
            ))
            .bearer_auth(&access_token)
            .header("X-Upload-Content-Type", "video/*")
            .header("X-Upload-Content-Length", media.len())
            .json(metadata)
            .send()
            .await
            .map_err(|e| UploadError::request(e.to_string()))?;

        if !initiate.status().is_success() {
            let status = initiate.status().as_u16();
            let body = initiate.text().await.unwrap_or_default();
            return Err(UploadError::Api { status, body });
        }

        let session_uri = initiate
            .headers()
            .get(LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string())
            .ok_or_else(|| UploadError::invalid_response("missing upload session Location header"))?;

        let upload = self
            .http
            .put(&session_uri)
            .bearer_auth(&access_token)
            .header("Content-Type", "video/*")
            .body(media)
            .send()
            .await
            .map_err(|e| UploadError::request(e.to_string()))?;

        if !upload.status().is_success() {
            let status = upload.status().as_u16();
            let body = upload.text().await.unwrap_or_default();
            return Err(UploadError::Api { status, body });
        }

        let video: UploadedVideo = upload
            .json()
            .await
            .map_err(|e| UploadError::invalid_response(e.to_string()))?;

        info!(youtube_id = %video.id, "Video uploaded to YouTube");
        Ok(video)
    }
}

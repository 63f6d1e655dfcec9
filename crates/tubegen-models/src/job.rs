//! Video job records.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::assets::PLACEHOLDER_THUMBNAIL;
use crate::duration::PLACEHOLDER_DURATION;
use crate::VideoStyle;

/// Last millisecond value handed out by [`VideoJobId::next`].
static LAST_ISSUED_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Time-based identifier of a generated video (`video_<unix-millis>`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct VideoJobId(String);

impl VideoJobId {
    /// Prefix shared by every job id.
    pub const PREFIX: &'static str = "video_";

    /// Issue a new id for a job created at `now`.
    ///
    /// Ids are strictly increasing within the process: two jobs created in the
    /// same millisecond get consecutive values.
    pub fn next(now: DateTime<Utc>) -> Self {
        let millis = now.timestamp_millis();
        let previous = LAST_ISSUED_MILLIS
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(millis.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        Self::from_millis(millis.max(previous + 1))
    }

    /// Build the id for a given millisecond timestamp.
    pub fn from_millis(millis: i64) -> Self {
        Self(format!("{}{}", Self::PREFIX, millis))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoJobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle tag of a video job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Script generated, nothing uploaded yet
    #[default]
    Generated,
    /// Video uploaded to YouTube
    Uploaded,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Generated => "generated",
            JobStatus::Uploaded => "uploaded",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Title, description and narration produced for a topic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScriptContent {
    pub title: String,
    pub description: String,
    pub script: String,
}

/// A generated video, as returned to the client.
///
/// The client keeps these in memory for the session; the server never stores
/// them.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoJob {
    id: VideoJobId,
    pub title: String,
    pub description: String,
    pub script: String,
    pub style: VideoStyle,
    pub duration: String,
    pub status: JobStatus,
    pub created_at: DateTime<Utc>,
    pub thumbnail: String,
}

impl VideoJob {
    /// Package generated content into a new job created at `now`.
    pub fn new(content: ScriptContent, style: VideoStyle, now: DateTime<Utc>) -> Self {
        Self::with_id(VideoJobId::next(now), content, style, now)
    }

    /// Package generated content under an explicit id.
    pub fn with_id(
        id: VideoJobId,
        content: ScriptContent,
        style: VideoStyle,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: content.title,
            description: content.description,
            script: content.script,
            style,
            duration: PLACEHOLDER_DURATION.to_string(),
            status: JobStatus::Generated,
            created_at: now,
            thumbnail: PLACEHOLDER_THUMBNAIL.to_string(),
        }
    }

    pub fn id(&self) -> &VideoJobId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn content() -> ScriptContent {
        ScriptContent {
            title: "अंतरिक्ष".to_string(),
            description: "अंतरिक्ष के बारे में वीडियो".to_string(),
            script: "नमस्कार दोस्तों!".to_string(),
        }
    }

    #[test]
    fn test_job_id_format() {
        assert_eq!(VideoJobId::from_millis(1_700_000_000_000).as_str(), "video_1700000000000");
    }

    #[test]
    fn test_job_ids_are_unique_within_same_millisecond() {
        let now = Utc::now();
        let a = VideoJobId::next(now);
        let b = VideoJobId::next(now);
        assert_ne!(a, b);
        assert!(a.as_str().starts_with(VideoJobId::PREFIX));
        assert!(b.as_str().starts_with(VideoJobId::PREFIX));
    }

    #[test]
    fn test_new_job_defaults() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let job = VideoJob::with_id(VideoJobId::from_millis(42), content(), VideoStyle::Story, now);

        assert_eq!(job.id().as_str(), "video_42");
        assert_eq!(job.status, JobStatus::Generated);
        assert_eq!(job.duration, "2:30");
        assert_eq!(job.thumbnail, "/placeholder-thumbnail.jpg");
        assert_eq!(job.created_at, now);
    }

    #[test]
    fn test_job_wire_format() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let job = VideoJob::with_id(VideoJobId::from_millis(42), content(), VideoStyle::Story, now);
        let json = serde_json::to_value(&job).unwrap();

        assert_eq!(json["id"], "video_42");
        assert_eq!(json["style"], "story");
        assert_eq!(json["status"], "generated");
        assert_eq!(json["createdAt"], "2024-05-01T12:00:00Z");
        assert_eq!(json["title"], "अंतरिक्ष");
        assert!(json.get("created_at").is_none());
    }
}

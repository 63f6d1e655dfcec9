//! Placeholder render artifacts.
//!
//! Nothing is rendered yet; these names stand in for the files a render
//! step would produce.

use chrono::{DateTime, Utc};

/// Thumbnail path attached to every generated video.
pub const PLACEHOLDER_THUMBNAIL: &str = "/placeholder-thumbnail.jpg";

/// File name a rendered video would be written to.
pub fn placeholder_video_file(now: DateTime<Utc>) -> String {
    format!("video_{}.mp4", now.timestamp_millis())
}

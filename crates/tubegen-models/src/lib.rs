//! Shared data models for the TubeGen backend.
//!
//! This crate provides Serde-serializable types for:
//! - Video styles and their visual templates
//! - Generated video job records
//! - Duration and placeholder asset helpers

pub mod assets;
pub mod duration;
pub mod job;
pub mod style;

// Re-export common types
pub use duration::estimate_duration;
pub use job::{JobStatus, ScriptContent, VideoJob, VideoJobId};
pub use style::{StyleParseError, StyleTemplate, VideoStyle};

//! YouTube upload for generated videos.
//!
//! The live path is a simulator: demo ids without credentials, simulated ids
//! with them. [`YoutubeClient::insert_video`] performs a real upload once a
//! rendered file exists.

pub mod error;
pub mod oauth;
pub mod service;
pub mod token;
pub mod youtube;

pub use error::{UploadError, UploadResult};
pub use oauth::{OAuthClient, YoutubeCredentials};
pub use service::{UploadOutcome, UploadService};
pub use token::{RandomTokenGenerator, TokenGenerator};
pub use youtube::{UploadedVideo, VideoInsert, YoutubeClient};

//! Upload simulator.
//!
//! No video file exists yet, so nothing is ever sent to YouTube. With
//! credentials configured the service still builds an authorized client and
//! answers with a simulated upload; without them it answers in demo mode.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::info;
use tubegen_models::assets::placeholder_video_file;

use crate::error::UploadResult;
use crate::oauth::YoutubeCredentials;
use crate::token::TokenGenerator;
use crate::youtube::YoutubeClient;

/// Prefix of ids returned when credentials are missing.
pub const DEMO_PREFIX: &str = "DEMO_";

/// Prefix of ids returned by the simulated upload.
pub const SIMULATED_PREFIX: &str = "SIMULATED_";

/// Watch URL reported by the simulated upload.
pub const SIMULATED_URL: &str = "https://youtube.com/watch?v=example";

pub const DEMO_MESSAGE: &str = "Please set up YouTube API credentials in environment variables";

pub const SIMULATED_MESSAGE: &str = "Demo mode: Video would be uploaded to YouTube in production";

/// Result of an upload request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Credentials missing; no external service contacted
    Demo { youtube_id: String },
    /// Client authorized, upload simulated
    Simulated { youtube_id: String },
}

impl UploadOutcome {
    pub fn youtube_id(&self) -> &str {
        match self {
            UploadOutcome::Demo { youtube_id } | UploadOutcome::Simulated { youtube_id } => {
                youtube_id
            }
        }
    }

    /// Label used in logs and metrics.
    pub fn mode(&self) -> &'static str {
        match self {
            UploadOutcome::Demo { .. } => "demo",
            UploadOutcome::Simulated { .. } => "simulated",
        }
    }
}

/// Handles upload requests for generated videos.
#[derive(Clone)]
pub struct UploadService {
    credentials: YoutubeCredentials,
    tokens: Arc<dyn TokenGenerator>,
    timeout: Duration,
}

impl UploadService {
    pub fn new(
        credentials: YoutubeCredentials,
        tokens: Arc<dyn TokenGenerator>,
        timeout: Duration,
    ) -> Self {
        Self {
            credentials,
            tokens,
            timeout,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_complete()
    }

    /// Upload the video identified by `video_id`.
    ///
    /// The id is trusted as given; no job lookup happens.
    pub async fn upload(&self, video_id: &str) -> UploadResult<UploadOutcome> {
        let Some(oauth) = self.credentials.authorize()? else {
            let youtube_id = format!("{}{}", DEMO_PREFIX, self.tokens.token());
            info!(video_id = %video_id, youtube_id = %youtube_id, "YouTube credentials not configured, demo upload");
            return Ok(UploadOutcome::Demo { youtube_id });
        };

        let _client = YoutubeClient::new(oauth, self.timeout)?;

        let youtube_id = format!("{}{}", SIMULATED_PREFIX, self.tokens.token());
        info!(
            video_id = %video_id,
            youtube_id = %youtube_id,
            media_file = %placeholder_video_file(Utc::now()),
            "Simulated YouTube upload"
        );

        Ok(UploadOutcome::Simulated { youtube_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::UploadError;
    use crate::oauth::DEFAULT_REDIRECT_URI;
    use crate::token::RandomTokenGenerator;

    struct FixedToken(&'static str);

    impl TokenGenerator for FixedToken {
        fn token(&self) -> String {
            self.0.to_string()
        }
    }

    fn configured() -> YoutubeCredentials {
        YoutubeCredentials {
            client_id: Some("client".to_string()),
            client_secret: Some("secret".to_string()),
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            refresh_token: Some("refresh".to_string()),
        }
    }

    fn service(credentials: YoutubeCredentials, tokens: Arc<dyn TokenGenerator>) -> UploadService {
        UploadService::new(credentials, tokens, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_demo_mode_without_credentials() {
        let service = service(YoutubeCredentials::default(), Arc::new(FixedToken("abc123")));
        assert!(!service.is_configured());

        let outcome = service.upload("video_1").await.unwrap();

        assert_eq!(
            outcome,
            UploadOutcome::Demo {
                youtube_id: "DEMO_abc123".to_string()
            }
        );
        assert_eq!(outcome.mode(), "demo");
    }

    #[tokio::test]
    async fn test_demo_ids_differ_between_calls() {
        let service = service(YoutubeCredentials::default(), Arc::new(RandomTokenGenerator));

        let first = service.upload("video_1").await.unwrap();
        let second = service.upload("video_1").await.unwrap();

        assert!(first.youtube_id().starts_with(DEMO_PREFIX));
        assert!(second.youtube_id().starts_with(DEMO_PREFIX));
        assert_ne!(first.youtube_id(), second.youtube_id());
    }

    #[tokio::test]
    async fn test_simulated_upload_with_credentials() {
        let service = service(configured(), Arc::new(FixedToken("xyz789")));
        assert!(service.is_configured());

        let outcome = service.upload("video_1").await.unwrap();

        assert_eq!(
            outcome,
            UploadOutcome::Simulated {
                youtube_id: "SIMULATED_xyz789".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_bad_redirect_uri_is_an_error() {
        let mut credentials = configured();
        credentials.redirect_uri = "::".to_string();
        let service = service(credentials, Arc::new(FixedToken("t")));

        let err = service.upload("video_1").await.unwrap_err();

        assert!(matches!(err, UploadError::InvalidRedirectUri(_)));
    }
}

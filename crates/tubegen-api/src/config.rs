//! API configuration.

use std::time::Duration;

use tubegen_script::OpenAiConfig;
use tubegen_upload::oauth::DEFAULT_REDIRECT_URI;
use tubegen_upload::YoutubeCredentials;

/// Process-wide configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// CORS origins
    pub cors_origins: Vec<String>,
    /// Max request body size
    pub max_body_size: usize,
    /// Timeout for upstream API calls
    pub request_timeout: Duration,
    /// Expose `/metrics`
    pub metrics_enabled: bool,
    /// Text generation; `None` means template scripts only
    pub openai: Option<OpenAiConfig>,
    /// YouTube OAuth values; incomplete means demo uploads
    pub youtube: YoutubeCredentials,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            cors_origins: vec!["*".to_string()],
            max_body_size: 1024 * 1024, // 1MB
            request_timeout: Duration::from_secs(30),
            metrics_enabled: true,
            openai: None,
            youtube: YoutubeCredentials::default(),
        }
    }
}

impl AppConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create config from any variable source. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let request_timeout = var("REQUEST_TIMEOUT")
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        let openai = var("OPENAI_API_KEY").map(|api_key| OpenAiConfig {
            api_key,
            base_url: var("OPENAI_BASE_URL")
                .unwrap_or_else(|| OpenAiConfig::DEFAULT_BASE_URL.to_string()),
            model: var("OPENAI_MODEL").unwrap_or_else(|| OpenAiConfig::DEFAULT_MODEL.to_string()),
            timeout: request_timeout,
        });

        let youtube = YoutubeCredentials {
            client_id: var("YOUTUBE_CLIENT_ID"),
            client_secret: var("YOUTUBE_CLIENT_SECRET"),
            redirect_uri: var("YOUTUBE_REDIRECT_URI")
                .unwrap_or_else(|| DEFAULT_REDIRECT_URI.to_string()),
            refresh_token: var("YOUTUBE_REFRESH_TOKEN"),
        };

        Self {
            host: var("API_HOST").unwrap_or(defaults.host),
            port: var("API_PORT")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.port),
            cors_origins: var("CORS_ORIGINS")
                .map(|s| s.split(',').map(|s| s.trim().to_string()).collect())
                .unwrap_or(defaults.cors_origins),
            max_body_size: var("MAX_BODY_SIZE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.max_body_size),
            request_timeout,
            metrics_enabled: var("METRICS_ENABLED")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.metrics_enabled),
            openai,
            youtube,
        }
    }
}

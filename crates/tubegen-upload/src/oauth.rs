//! Google OAuth2 credentials for the YouTube Data API.

use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::error::{UploadError, UploadResult};

/// Redirect target used when none is configured.
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:3000/auth/callback";

/// Google's token endpoint.
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// YouTube OAuth settings as read from configuration.
///
/// Any of the secrets may be missing; uploads then run in demo mode.
#[derive(Debug, Clone)]
pub struct YoutubeCredentials {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub refresh_token: Option<String>,
}

impl Default for YoutubeCredentials {
    fn default() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            refresh_token: None,
        }
    }
}

impl YoutubeCredentials {
    /// Whether client id, secret and refresh token are all present.
    pub fn is_complete(&self) -> bool {
        [&self.client_id, &self.client_secret, &self.refresh_token]
            .iter()
            .all(|v| v.as_deref().is_some_and(|s| !s.trim().is_empty()))
    }

    /// Build an OAuth client bound to the refresh token.
    ///
    /// Returns `Ok(None)` when credentials are incomplete.
    pub fn authorize(&self) -> UploadResult<Option<OAuthClient>> {
        if !self.is_complete() {
            return Ok(None);
        }

        let (Some(client_id), Some(client_secret), Some(refresh_token)) =
            (&self.client_id, &self.client_secret, &self.refresh_token)
        else {
            return Ok(None);
        };

        OAuthClient::new(client_id, client_secret, &self.redirect_uri, refresh_token).map(Some)
    }
}

/// OAuth2 client holding a refresh token.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    client_id: String,
    client_secret: String,
    redirect_uri: Url,
    refresh_token: String,
    token_url: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl OAuthClient {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: &str,
        refresh_token: impl Into<String>,
    ) -> UploadResult<Self> {
        let redirect_uri = Url::parse(redirect_uri)
            .map_err(|e| UploadError::InvalidRedirectUri(format!("{}: {}", redirect_uri, e)))?;

        Ok(Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri,
            refresh_token: refresh_token.into(),
            token_url: GOOGLE_TOKEN_URL.to_string(),
        })
    }

    /// Use a different token endpoint.
    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = token_url.into();
        self
    }

    pub fn redirect_uri(&self) -> &Url {
        &self.redirect_uri
    }

    /// Exchange the refresh token for a short-lived access token.
    pub async fn access_token(&self, http: &Client) -> UploadResult<String> {
        debug!(token_url = %self.token_url, "Refreshing YouTube access token");

        let response = http
            .post(&self.token_url)
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("refresh_token", self.refresh_token.as_str()),
                ("grant_type", "refresh_token"),
            ])
            .send()
            .await
            .map_err(|e| UploadError::TokenRefresh(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::TokenRefresh(format!("{}: {}", status, body)));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| UploadError::TokenRefresh(e.to_string()))?;

        Ok(token.access_token)
    }
}

//! Application state.

use std::sync::Arc;

use tubegen_script::{OpenAiClient, ScriptService, TextGenerator};
use tubegen_upload::{RandomTokenGenerator, UploadService};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub scripts: ScriptService,
    pub uploads: UploadService,
}

impl AppState {
    /// Create application state from configuration.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let generator = match &config.openai {
            Some(openai) => {
                let client = OpenAiClient::new(openai.clone())?;
                Some(Arc::new(client) as Arc<dyn TextGenerator>)
            }
            None => None,
        };

        let scripts = ScriptService::new(generator);
        let uploads = UploadService::new(
            config.youtube.clone(),
            Arc::new(RandomTokenGenerator),
            config.request_timeout,
        );

        Ok(Self::with_services(config, scripts, uploads))
    }

    /// Assemble state from prebuilt services.
    pub fn with_services(config: AppConfig, scripts: ScriptService, uploads: UploadService) -> Self {
        Self {
            config,
            scripts,
            uploads,
        }
    }
}

//! Script generation service.

use std::sync::Arc;

use tracing::{info, warn};
use tubegen_models::{ScriptContent, VideoStyle};

use crate::client::TextGenerator;
use crate::error::{ScriptError, ScriptResult};
use crate::fallback::fallback_script;
use crate::parser::parse_script_response;
use crate::prompt::{build_script_prompt, SYSTEM_PROMPT};

/// Where a script came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptOutcome {
    /// Parsed from model output
    Generated(ScriptContent),
    /// Template content used because generation was unavailable
    Fallback(ScriptContent),
}

impl ScriptOutcome {
    pub fn content(&self) -> &ScriptContent {
        match self {
            ScriptOutcome::Generated(c) | ScriptOutcome::Fallback(c) => c,
        }
    }

    pub fn into_content(self) -> ScriptContent {
        match self {
            ScriptOutcome::Generated(c) | ScriptOutcome::Fallback(c) => c,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ScriptOutcome::Fallback(_))
    }

    /// Label used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ScriptOutcome::Generated(_) => "generated",
            ScriptOutcome::Fallback(_) => "fallback",
        }
    }
}

/// Turns a topic and style into script content.
#[derive(Clone)]
pub struct ScriptService {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl ScriptService {
    /// Without a generator every request gets template content.
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }

    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    /// Ask the model for a script and return its raw text.
    pub async fn request_script(&self, topic: &str, style: VideoStyle) -> ScriptResult<String> {
        let generator = self.generator.as_ref().ok_or(ScriptError::NotConfigured)?;
        let prompt = build_script_prompt(topic, style);
        generator.complete(SYSTEM_PROMPT, &prompt).await
    }

    /// Generate a script, substituting template content on any failure.
    pub async fn generate(&self, topic: &str, style: VideoStyle) -> ScriptOutcome {
        match self.request_script(topic, style).await {
            Ok(text) => {
                info!(style = %style, "Script generated");
                ScriptOutcome::Generated(parse_script_response(&text, topic))
            }
            Err(ScriptError::NotConfigured) => {
                info!(style = %style, "Text generation not configured, using template script");
                ScriptOutcome::Fallback(fallback_script(topic))
            }
            Err(e) => {
                warn!(style = %style, error = %e, "Text generation failed, using template script");
                ScriptOutcome::Fallback(fallback_script(topic))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct CannedGenerator {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl TextGenerator for CannedGenerator {
        async fn complete(&self, system: &str, prompt: &str) -> ScriptResult<String> {
            assert_eq!(system, SYSTEM_PROMPT);
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn complete(&self, _system: &str, _prompt: &str) -> ScriptResult<String> {
            Err(ScriptError::Api {
                status: 429,
                body: "quota exceeded".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_generated_branch_parses_reply() {
        let generator = Arc::new(CannedGenerator {
            reply: "Title: X\nDescription: Y\nScript: Z".to_string(),
            prompts: Mutex::new(Vec::new()),
        });
        let service = ScriptService::new(Some(generator.clone()));

        let outcome = service.generate("topic", VideoStyle::Motivation).await;

        assert_eq!(
            outcome,
            ScriptOutcome::Generated(ScriptContent {
                title: "X".to_string(),
                description: "Y".to_string(),
                script: "Z".to_string(),
            })
        );
        let prompts = generator.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("विषय: topic"));
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_template() {
        let service = ScriptService::new(Some(Arc::new(FailingGenerator)));

        let outcome = service.generate("ocean", VideoStyle::Facts).await;

        assert!(outcome.is_fallback());
        assert_eq!(outcome.kind(), "fallback");
        assert_eq!(outcome.into_content(), fallback_script("ocean"));
    }

    #[tokio::test]
    async fn test_unconfigured_service_uses_template() {
        let service = ScriptService::new(None);
        assert!(!service.is_configured());

        let outcome = service.generate("ocean", VideoStyle::Story).await;
        assert_eq!(outcome, ScriptOutcome::Fallback(fallback_script("ocean")));

        let err = service.request_script("ocean", VideoStyle::Story).await.unwrap_err();
        assert!(matches!(err, ScriptError::NotConfigured));
    }
}

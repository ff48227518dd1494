//! Single-call text generation.

use crate::build_prompt;
use sparc_config::GenerationSettings;
use sparc_core::{ContentType, GenerateRequest, Message, PersonaProfile, Tone};
use sparc_error::{GenerationError, GenerationErrorKind, SparcResult};
use sparc_interface::GenerationDriver;
use std::sync::Arc;
use tracing::{debug, error, instrument};

/// Issues exactly one generation call per invocation.
///
/// Failures are always returned as `GenerationError`; they never appear as
/// content text. Nothing here retries.
#[derive(Clone)]
pub struct ContentGenerator {
    driver: Arc<dyn GenerationDriver>,
    settings: GenerationSettings,
}

impl std::fmt::Debug for ContentGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentGenerator")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .field("settings", &self.settings)
            .finish()
    }
}

impl ContentGenerator {
    /// Wrap a driver with default token budget, temperature and system prompt.
    pub fn new(driver: Arc<dyn GenerationDriver>, settings: GenerationSettings) -> Self {
        Self { driver, settings }
    }

    /// Settings used by [`generate_custom`](Self::generate_custom).
    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Send `prompt` with explicit limits and return the trimmed text.
    #[instrument(
        skip(self, prompt),
        fields(provider = self.driver.provider_name(), prompt_chars = prompt.chars().count())
    )]
    pub async fn generate(
        &self,
        prompt: &str,
        max_output_tokens: u32,
        temperature: f32,
    ) -> SparcResult<String> {
        let request = GenerateRequest::builder()
            .messages(vec![
                Message::system(self.settings.system_prompt.as_str()),
                Message::user(prompt),
            ])
            .max_tokens(max_output_tokens)
            .temperature(temperature)
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
                    "Failed to build request: {}",
                    e
                )))
            })?;

        let response = self.driver.generate(&request).await.map_err(|e| {
            error!(error = %e, "Generation call failed");
            e
        })?;

        let text = response.into_text();
        let text = text.trim();
        if text.is_empty() {
            error!("Generation returned no text");
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse).into());
        }

        debug!(chars = text.chars().count(), "Generation complete");
        Ok(text.to_string())
    }

    /// Send a ready-made prompt with the configured defaults.
    pub async fn generate_custom(&self, prompt: &str) -> SparcResult<String> {
        self.generate(prompt, self.settings.max_tokens, self.settings.temperature)
            .await
    }

    /// Build a prompt from the campaign inputs and generate canonical content.
    pub async fn generate_content(
        &self,
        goal: &str,
        persona: &PersonaProfile,
        content_type: ContentType,
        tone: Tone,
    ) -> SparcResult<String> {
        let prompt = build_prompt(goal, persona, content_type, tone);
        self.generate_custom(&prompt).await
    }
}

use crate::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use reqwest::Client;
use sparc_config::{GenerationCredentials, GenerationSettings};
use sparc_core::{GenerateRequest, GenerateResponse};
use sparc_error::{GenerationError, GenerationErrorKind, HttpError, SparcResult};
use sparc_interface::GenerationDriver;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Azure OpenAI chat-completions client.
///
/// Each [`generate`](GenerationDriver::generate) call is one HTTP request
/// bounded by the configured timeout. Nothing is retried.
#[derive(Clone)]
pub struct AzureOpenAiClient {
    client: Client,
    endpoint: String,
    api_key: String,
    deployment: String,
    api_version: String,
    timeout: Duration,
}

impl std::fmt::Debug for AzureOpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AzureOpenAiClient")
            .field("endpoint", &self.endpoint)
            .field("deployment", &self.deployment)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl AzureOpenAiClient {
    /// Creates a client from loaded credentials and settings.
    pub fn from_config(
        credentials: &GenerationCredentials,
        settings: &GenerationSettings,
    ) -> SparcResult<Self> {
        Self::new(
            &credentials.endpoint,
            &credentials.api_key,
            &settings.deployment,
            &settings.api_version,
            Duration::from_secs(settings.timeout_secs),
        )
    }

    /// Creates a client for an explicit endpoint.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Resource URL, e.g. `https://my-resource.openai.azure.com`
    /// * `api_key` - `api-key` header value
    /// * `deployment` - Deployment name (e.g., "gpt-4")
    /// * `api_version` - `api-version` query parameter
    /// * `timeout` - Whole-request timeout
    #[instrument(skip(endpoint, api_key), fields(deployment = %deployment))]
    pub fn new(
        endpoint: &str,
        api_key: &str,
        deployment: &str,
        api_version: &str,
        timeout: Duration,
    ) -> SparcResult<Self> {
        debug!("Creating new Azure OpenAI client");
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            deployment: deployment.to_string(),
            api_version: api_version.to_string(),
            timeout,
        })
    }

    fn url(&self, deployment: &str) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint, deployment, self.api_version
        )
    }

    fn transport_error(&self, err: reqwest::Error) -> GenerationError {
        if err.is_timeout() {
            GenerationError::new(GenerationErrorKind::Timeout(self.timeout.as_secs()))
        } else {
            GenerationError::new(GenerationErrorKind::Transport(err.to_string()))
        }
    }

    /// Converts a generic request into the wire request.
    fn convert_request(request: &GenerateRequest) -> SparcResult<ChatCompletionRequest> {
        let messages: Vec<ChatMessage> = request.messages.iter().map(ChatMessage::from).collect();

        ChatCompletionRequest::builder()
            .messages(messages)
            .max_tokens(request.max_tokens)
            .temperature(request.temperature)
            .build()
            .map_err(|e| {
                GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
                    "Failed to build request: {}",
                    e
                )))
                .into()
            })
    }

    /// Converts the wire response, rejecting empty output.
    fn convert_response(response: ChatCompletionResponse) -> SparcResult<GenerateResponse> {
        let choice = response.choices().first().ok_or_else(|| {
            GenerationError::new(GenerationErrorKind::MalformedResponse(
                "response contained no choices".to_string(),
            ))
        })?;

        let text = choice
            .message()
            .content()
            .as_deref()
            .map(str::trim)
            .unwrap_or_default();
        if text.is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::EmptyResponse).into());
        }

        let mut converted = GenerateResponse::new(text);
        if let Some(reason) = choice.finish_reason() {
            converted = converted.with_finish_reason(reason.clone());
        }
        if let Some(usage) = response.usage() {
            converted = converted.with_usage((*usage).into());
        }
        Ok(converted)
    }
}

#[async_trait::async_trait]
impl GenerationDriver for AzureOpenAiClient {
    #[instrument(
        skip(self, request),
        fields(provider = "azure-openai", deployment, messages = request.messages.len())
    )]
    async fn generate(&self, request: &GenerateRequest) -> SparcResult<GenerateResponse> {
        let deployment = request.model.as_deref().unwrap_or(&self.deployment);
        tracing::Span::current().record("deployment", deployment);

        let body = Self::convert_request(request)?;
        debug!("Sending request to Azure OpenAI");

        let response = self
            .client
            .post(self.url(deployment))
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Azure OpenAI");
                self.transport_error(e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!(error = ?e, "Failed to read Azure OpenAI response body");
            self.transport_error(e)
        })?;

        if !status.is_success() {
            error!(status = %status, body = %text, "Azure OpenAI returned error");
            return Err(GenerationError::from_status(status.as_u16(), text).into());
        }

        let parsed: ChatCompletionResponse = serde_json::from_str(&text).map_err(|e| {
            error!(error = ?e, "Failed to parse Azure OpenAI response");
            GenerationError::new(GenerationErrorKind::MalformedResponse(format!(
                "Failed to parse response: {}",
                e
            )))
        })?;

        let converted = Self::convert_response(parsed)?;
        debug!(
            chars = converted.text().chars().count(),
            finish_reason = ?converted.finish_reason(),
            "Received response from Azure OpenAI"
        );
        Ok(converted)
    }

    fn provider_name(&self) -> &'static str {
        "azure-openai"
    }

    fn model_name(&self) -> &str {
        &self.deployment
    }
}

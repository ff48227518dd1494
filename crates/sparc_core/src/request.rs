//! Request and response types for text generation.

use crate::Message;
use serde::{Deserialize, Serialize};

/// A chat-completion request.
///
/// # Examples
///
/// ```
/// use sparc_core::{GenerateRequest, Message};
///
/// let request = GenerateRequest::builder()
///     .messages(vec![Message::system("Be brief."), Message::user("Hello")])
///     .max_tokens(100u32)
///     .temperature(0.7f32)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.messages.len(), 2);
/// assert_eq!(request.max_tokens, Some(100));
/// assert_eq!(request.model, None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// The conversation messages to send
    pub messages: Vec<Message>,
    /// Maximum number of tokens to generate
    #[builder(default, setter(into, strip_option))]
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default, setter(into, strip_option))]
    pub temperature: Option<f32>,
    /// Model or deployment identifier overriding the driver default
    #[builder(default, setter(into, strip_option))]
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new request builder.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Token accounting reported by the endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens consumed by the prompt
    pub prompt_tokens: u32,
    /// Tokens produced by the model
    pub completion_tokens: u32,
    /// Sum of both
    pub total_tokens: u32,
}

/// The text the model produced for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateResponse {
    /// Generated text
    text: String,
    /// Why generation stopped, as reported by the endpoint
    finish_reason: Option<String>,
    /// Token accounting, when reported
    usage: Option<TokenUsage>,
}

impl GenerateResponse {
    /// Create a response carrying only text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            finish_reason: None,
            usage: None,
        }
    }

    /// Attach a finish reason.
    pub fn with_finish_reason(mut self, reason: impl Into<String>) -> Self {
        self.finish_reason = Some(reason.into());
        self
    }

    /// Attach token usage.
    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.usage = Some(usage);
        self
    }

    /// Consume the response, keeping only the text.
    pub fn into_text(self) -> String {
        self.text
    }
}

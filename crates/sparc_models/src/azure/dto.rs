//! Azure OpenAI chat-completions wire types.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use sparc_core::{Message, TokenUsage};

/// One message on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ChatMessage {
    /// "system", "user" or "assistant"
    role: String,
    /// Message text; absent on some filtered responses
    #[serde(default)]
    content: Option<String>,
}

impl From<&Message> for ChatMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role.as_wire().to_string(),
            content: Some(message.content.clone()),
        }
    }
}

/// Request body for `POST .../chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct ChatCompletionRequest {
    /// Conversation
    messages: Vec<ChatMessage>,
    /// Output token budget
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

impl ChatCompletionRequest {
    /// Creates a new builder for `ChatCompletionRequest`.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }
}

/// One completion candidate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct ChatChoice {
    /// Generated message
    message: ChatMessage,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Token accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Getters)]
pub struct ChatUsage {
    /// Prompt tokens
    #[serde(default)]
    prompt_tokens: u32,
    /// Completion tokens
    #[serde(default)]
    completion_tokens: u32,
    /// Total tokens
    #[serde(default)]
    total_tokens: u32,
}

impl From<ChatUsage> for TokenUsage {
    fn from(usage: ChatUsage) -> Self {
        TokenUsage {
            prompt_tokens: usage.prompt_tokens,
            completion_tokens: usage.completion_tokens,
            total_tokens: usage.total_tokens,
        }
    }
}

/// Response body.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Getters)]
pub struct ChatCompletionResponse {
    /// Completion candidates; only the first is used
    #[serde(default)]
    choices: Vec<ChatChoice>,
    /// Token accounting
    #[serde(default)]
    usage: Option<ChatUsage>,
}

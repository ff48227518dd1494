//! Azure OpenAI chat-completions backend.

mod client;
mod dto;

pub use client::AzureOpenAiClient;
pub use dto::{
    ChatChoice, ChatCompletionRequest, ChatCompletionRequestBuilder, ChatCompletionResponse,
    ChatMessage, ChatUsage,
};

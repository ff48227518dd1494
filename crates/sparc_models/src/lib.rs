//! Text generation endpoint clients for S.P.A.R.C.
//!
//! The production backend is an Azure OpenAI chat-completions deployment,
//! exposed through [`AzureOpenAiClient`] as a
//! [`GenerationDriver`](sparc_interface::GenerationDriver).
//!
//! # Example
//!
//! ```no_run
//! use sparc_config::{GenerationCredentials, SparcConfig};
//! use sparc_core::{GenerateRequest, Message};
//! use sparc_interface::GenerationDriver;
//! use sparc_models::AzureOpenAiClient;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = SparcConfig::load()?;
//! let credentials = GenerationCredentials::from_env()?;
//! let client = AzureOpenAiClient::from_config(&credentials, &config.generation)?;
//!
//! let request = GenerateRequest::builder()
//!     .messages(vec![Message::user("Write a haiku about data pipelines")])
//!     .build()?;
//! let response = client.generate(&request).await?;
//! println!("{}", response.text());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod azure;

pub use azure::{
    AzureOpenAiClient, ChatChoice, ChatCompletionRequest, ChatCompletionRequestBuilder,
    ChatCompletionResponse, ChatMessage, ChatUsage,
};

//! Trait definitions for text generation backends.

use async_trait::async_trait;
use sparc_core::{GenerateRequest, GenerateResponse};
use sparc_error::SparcResult;

/// Core trait that every text generation backend implements.
///
/// One call to [`generate`](GenerationDriver::generate) is exactly one
/// outbound request. Implementations never retry and never turn a failure
/// into response text; every failure is a `GenerationError`.
#[async_trait]
pub trait GenerationDriver: Send + Sync {
    /// Generate text for a chat request.
    async fn generate(&self, req: &GenerateRequest) -> SparcResult<GenerateResponse>;

    /// Provider name (e.g., "azure-openai").
    fn provider_name(&self) -> &'static str;

    /// Model or deployment identifier (e.g., "gpt-4").
    fn model_name(&self) -> &str;
}

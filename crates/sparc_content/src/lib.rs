//! Content generation and channel adaptation for S.P.A.R.C.
//!
//! The pipeline turns a persona, a campaign goal and a tone into stored
//! canonical content, then reshapes that content per channel:
//!
//! - [`PromptBuilder`] renders the generation instruction (pure, deterministic)
//! - [`ContentGenerator`] makes exactly one model call per invocation
//! - [`ChannelAdapter`] rewrites content for short-form posts and email
//! - [`CampaignPipeline`] sequences those steps against a store and hands
//!   variants to delivery collaborators
//! - [`CampaignTracker`] records passive schedules and metrics without a model
//!
//! # Example
//!
//! ```no_run
//! use sparc_content::{CampaignPipeline, ChannelAdapter, ContentGenerator, ContentRequest, InMemoryStore};
//! use sparc_core::{ContentType, Tone};
//! use std::sync::Arc;
//!
//! # async fn run(driver: Arc<dyn sparc_interface::GenerationDriver>) -> Result<(), Box<dyn std::error::Error>> {
//! let generator = ContentGenerator::new(driver, Default::default());
//! let pipeline = CampaignPipeline::new(
//!     ChannelAdapter::new(generator),
//!     Arc::new(InMemoryStore::new()),
//!     280,
//! );
//!
//! let request = ContentRequest::builder()
//!     .campaign_id(1)
//!     .persona_id(2)
//!     .content_type(ContentType::SocialMediaPost)
//!     .tone(Tone::Conversational)
//!     .build()?;
//! let content = pipeline.generate(&request).await?;
//! let post = pipeline.adapt_short_form(content.id, None).await?;
//! assert!(post.chars().count() <= 280);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod adapter;
mod email_format;
mod generator;
mod in_memory;
mod pipeline;
mod prompt;
mod tracker;

pub use adapter::{ChannelAdapter, DEFAULT_EMAIL_SUBJECT, DEFAULT_SHORT_FORM_LIMIT};
pub use email_format::{EmailFormat, JsonEmailFormat, ParsedEmail, SubjectLineFormat, email_format_for};
pub use generator::ContentGenerator;
pub use in_memory::InMemoryStore;
pub use pipeline::{CampaignPipeline, ContentRequest, ContentRequestBuilder, ContentRequestBuilderError};
pub use prompt::{PromptBuilder, build_prompt};
pub use tracker::CampaignTracker;

//! S.P.A.R.C. - campaign content generation
//!
//! Turns an audience persona and a campaign goal into stored marketing
//! content, reshapes it for short-form social posts and email, and records
//! passive schedules and descriptive analytics.
//!
//! # Architecture
//!
//! The workspace is split into focused crates, all re-exported here:
//!
//! - `sparc_error` - error kinds with source locations
//! - `sparc_core` - personas, campaigns, content, schedules, metrics
//! - `sparc_interface` - generation, store and delivery traits
//! - `sparc_config` - layered configuration and credentials
//! - `sparc_models` - Azure OpenAI chat-completions driver
//! - `sparc_content` - prompt building, generation, channel adaptation, pipeline
//! - `sparc_database` - SQLite store with embedded migrations
//! - `sparc_social` - Twitter publisher and SMTP email sender
//!
//! # Quick Start
//!
//! ```no_run
//! use sparc::{AppState, ContentRequest, ContentType, SparcConfig, Tone};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState::open(SparcConfig::load()?)?;
//! let pipeline = state.pipeline()?;
//!
//! let request = ContentRequest::builder()
//!     .campaign_id(1)
//!     .persona_id(1)
//!     .content_type(ContentType::CustomerStory)
//!     .tone(Tone::Professional)
//!     .build()?;
//! let content = pipeline.generate(&request).await?;
//! println!("{}", pipeline.adapt_short_form(content.id, None).await?);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod cli;
mod logging;
mod state;

pub use logging::init_logging;
pub use state::AppState;

pub use sparc_config::{
    ChannelSettings, DatabaseSettings, EmailFormatMode, EmailSettings, GenerationCredentials,
    GenerationSettings, SmtpCredentials, SocialSettings, SparcConfig, TwitterCredentials,
};
pub use sparc_content::{
    CampaignPipeline, CampaignTracker, ChannelAdapter, ContentGenerator, ContentRequest,
    ContentRequestBuilder, EmailFormat, InMemoryStore, PromptBuilder, build_prompt,
    email_format_for,
};
pub use sparc_core::{
    AnalyticsSummary, Campaign, CampaignStatus, CampaignWithContent, ContentStyle, ContentType,
    ContentUpdate, EmailDraft, ExperienceLevel, GenerateRequest, GenerateResponse,
    GeneratedContent, Message, MetricFilter, MetricKind, MetricRecord, NewCampaign, NewContent,
    NewMetricRecord, NewScheduleEntry, Persona, PersonaProfile, PersonaUpdate, Platform,
    PostReceipt, ReportingPeriod, Role, ScheduleEntry, ScheduleStatus, TagSet,
    TechnicalProficiency, Tone,
};
pub use sparc_database::SqliteStore;
pub use sparc_error::{
    ConfigError, DeliveryError, DeliveryErrorKind, GenerationError, GenerationErrorKind,
    InvalidArgumentError, ReferentialIntegrityError, SparcError, SparcErrorKind,
    SparcResult, StoreError, StoreErrorKind,
};
pub use sparc_interface::{
    AnalyticsStore, CampaignStore, ContentStore, EmailSender, GenerationDriver, PersonaStore,
    ScheduleStore, ShortFormPublisher, SparcStore,
};
pub use sparc_models::AzureOpenAiClient;
pub use sparc_social::{SmtpEmailSender, TwitterPublisher};

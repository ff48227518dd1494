//! Core data types for the S.P.A.R.C. campaign content generator.
//!
//! This crate holds the records every other crate passes around: personas,
//! campaigns, generated content and its channel variants, schedule entries,
//! analytics metrics, and the request/response shapes for the generation
//! endpoint.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analytics;
mod campaign;
mod content;
mod delivery;
mod message;
mod persona;
mod request;
mod role;
mod schedule;
mod tags;

pub use analytics::{
    AnalyticsSummary, MetricFilter, MetricKind, MetricRecord, NewMetricRecord, ReportingPeriod,
};
pub use campaign::{Campaign, CampaignStatus, CampaignWithContent, NewCampaign};
pub use content::{
    ContentType, ContentUpdate, GeneratedContent, NewContent, NewContentBuilder,
    NewContentBuilderError, Tone,
};
pub use delivery::{EmailDraft, PostReceipt};
pub use message::Message;
pub use persona::{
    ContentStyle, ExperienceLevel, NOT_SPECIFIED, Persona, PersonaProfile, PersonaUpdate,
    TechnicalProficiency,
};
pub use request::{
    GenerateRequest, GenerateRequestBuilder, GenerateRequestBuilderError, GenerateResponse,
    TokenUsage,
};
pub use role::Role;
pub use schedule::{NewScheduleEntry, Platform, ScheduleEntry, ScheduleStatus};
pub use tags::TagSet;

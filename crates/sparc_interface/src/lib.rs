//! Trait definitions for the S.P.A.R.C. campaign content generator.
//!
//! Every external collaborator sits behind one of these traits: the text
//! generation endpoint, the relational store, and the delivery channels.
//! Production implementations live in `sparc_models`, `sparc_database` and
//! `sparc_social`; tests substitute in-memory or mock versions.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod delivery;
mod store;
mod traits;

pub use delivery::{EmailSender, ShortFormPublisher};
pub use store::{
    AnalyticsStore, CampaignStore, ContentStore, PersonaStore, ScheduleStore, SparcStore,
    validate_persona,
};
pub use traits::GenerationDriver;

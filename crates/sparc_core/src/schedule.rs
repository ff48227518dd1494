//! Passive schedule records. Nothing in the workspace executes them.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Distribution channel for a scheduled entry or a metric.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// X / Twitter
    Twitter,
    /// Email newsletter
    Email,
    /// LinkedIn
    #[strum(to_string = "LinkedIn")]
    Linkedin,
    /// Company blog
    Blog,
}

/// State of a schedule entry.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    /// Waiting for its time
    #[default]
    Pending,
    /// Delivered
    Sent,
    /// Withdrawn by the user
    Cancelled,
}

/// Fields needed to create a schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewScheduleEntry {
    /// Owning campaign
    pub campaign_id: i32,
    /// Content to deliver
    pub content_id: i32,
    /// Target channel
    pub platform: Platform,
    /// When delivery is planned (UTC)
    pub scheduled_time: NaiveDateTime,
}

/// A stored schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Primary key
    pub id: i32,
    /// Owning campaign
    pub campaign_id: i32,
    /// Content to deliver
    pub content_id: i32,
    /// Target channel
    pub platform: Platform,
    /// When delivery is planned (UTC)
    pub scheduled_time: NaiveDateTime,
    /// Current state
    pub status: ScheduleStatus,
    /// When the entry was created (UTC)
    pub created_at: NaiveDateTime,
}

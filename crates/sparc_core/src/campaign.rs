//! Marketing campaigns.

use crate::{GeneratedContent, TagSet};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Advisory lifecycle state of a campaign. Never changed automatically.
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
pub enum CampaignStatus {
    /// Being prepared
    #[default]
    Draft,
    /// Running
    Active,
    /// Finished
    Completed,
}

/// Fields needed to create a campaign.
///
/// # Examples
///
/// ```
/// use sparc_core::{NewCampaign, CampaignStatus};
///
/// let campaign = NewCampaign::new("Q1 Launch", "Drive sign-ups for the new pipeline product")
///     .with_industries("Finance, Healthcare");
/// assert_eq!(campaign.status, CampaignStatus::Draft);
/// assert_eq!(campaign.industries.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCampaign {
    /// Display name
    pub name: String,
    /// What the campaign should achieve
    pub goal: String,
    /// Target industries
    pub industries: TagSet,
    /// Initial status
    pub status: CampaignStatus,
}

impl NewCampaign {
    /// Create a draft campaign with no target industries.
    pub fn new(name: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            goal: goal.into(),
            industries: TagSet::new(),
            status: CampaignStatus::Draft,
        }
    }

    /// Set target industries from comma-separated input.
    pub fn with_industries(mut self, industries: &str) -> Self {
        self.industries = TagSet::from_csv(industries);
        self
    }

    /// Set the initial status.
    pub fn with_status(mut self, status: CampaignStatus) -> Self {
        self.status = status;
        self
    }
}

/// A stored campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    /// Primary key
    pub id: i32,
    /// Display name
    pub name: String,
    /// What the campaign should achieve
    pub goal: String,
    /// Target industries
    pub industries: TagSet,
    /// Advisory status
    pub status: CampaignStatus,
    /// When the campaign was created (UTC)
    pub created_at: NaiveDateTime,
}

/// A campaign together with all content generated for it, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignWithContent {
    /// The campaign
    pub campaign: Campaign,
    /// Content rows belonging to it
    pub content: Vec<GeneratedContent>,
}

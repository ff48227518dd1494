//! Persistence traits.
//!
//! Each write targets a single row by primary key. Concurrent writers are
//! not coordinated; the last write wins.

use async_trait::async_trait;
use sparc_core::{
    Campaign, CampaignStatus, CampaignWithContent, ContentUpdate, GeneratedContent,
    MetricFilter, MetricRecord, NewCampaign, NewContent, NewMetricRecord, NewScheduleEntry,
    Persona, PersonaProfile, PersonaUpdate, ScheduleEntry, ScheduleStatus,
};
use sparc_error::{InvalidArgumentError, SparcResult};

/// Reject a persona profile that has no non-blank role label.
///
/// Stores call this before writing a new or edited persona.
///
/// # Examples
///
/// ```
/// use sparc_core::PersonaProfile;
/// use sparc_interface::validate_persona;
///
/// assert!(validate_persona(&PersonaProfile::new("Dana", "Data Engineer")).is_ok());
/// assert!(validate_persona(&PersonaProfile::new("Dana", "  ")).is_err());
/// ```
pub fn validate_persona(profile: &PersonaProfile) -> SparcResult<()> {
    if profile.has_role() {
        Ok(())
    } else {
        Err(InvalidArgumentError::new(format!(
            "persona '{}' needs at least one role label",
            profile.name
        ))
        .into())
    }
}

/// Persona persistence.
#[async_trait]
pub trait PersonaStore: Send + Sync {
    /// Store a new persona.
    async fn create_persona(&self, profile: &PersonaProfile) -> SparcResult<Persona>;

    /// Fetch a persona by id.
    async fn get_persona(&self, id: i32) -> SparcResult<Option<Persona>>;

    /// All personas, newest first.
    async fn list_personas(&self) -> SparcResult<Vec<Persona>>;

    /// Apply a partial edit. Returns `false` when no such persona exists.
    async fn update_persona(&self, id: i32, update: &PersonaUpdate) -> SparcResult<bool>;

    /// Delete a persona.
    ///
    /// Fails with a `ReferentialIntegrityError` and deletes nothing while any
    /// content row references the persona. Returns `false` when no such
    /// persona exists.
    async fn delete_persona(&self, id: i32) -> SparcResult<bool>;
}

/// Campaign persistence.
#[async_trait]
pub trait CampaignStore: Send + Sync {
    /// Store a new campaign.
    async fn create_campaign(&self, campaign: &NewCampaign) -> SparcResult<Campaign>;

    /// Fetch a campaign by id.
    async fn get_campaign(&self, id: i32) -> SparcResult<Option<Campaign>>;

    /// All campaigns, newest first.
    async fn list_campaigns(&self) -> SparcResult<Vec<Campaign>>;

    /// Set the advisory status. Returns `false` when no such campaign exists.
    async fn set_campaign_status(&self, id: i32, status: CampaignStatus) -> SparcResult<bool>;
}

/// Generated content persistence.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Store freshly generated content and return its id.
    ///
    /// Fails with a `ReferentialIntegrityError` when the campaign or persona
    /// does not exist.
    async fn save_content(&self, content: &NewContent) -> SparcResult<i32>;

    /// Apply a partial edit, bumping `updated_at`. Returns `false` when no
    /// such row exists.
    async fn update_content(&self, id: i32, update: &ContentUpdate) -> SparcResult<bool>;

    /// Fetch a content row by id.
    async fn get_content(&self, id: i32) -> SparcResult<Option<GeneratedContent>>;

    /// All content for a campaign, newest first.
    async fn get_content_by_campaign(&self, campaign_id: i32)
    -> SparcResult<Vec<GeneratedContent>>;
}

/// Passive schedule persistence.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Store a pending schedule entry.
    async fn create_schedule(&self, entry: &NewScheduleEntry) -> SparcResult<ScheduleEntry>;

    /// Fetch a schedule entry by id.
    async fn get_schedule(&self, id: i32) -> SparcResult<Option<ScheduleEntry>>;

    /// Entries ordered by scheduled time, optionally for one campaign.
    async fn list_schedules(&self, campaign_id: Option<i32>) -> SparcResult<Vec<ScheduleEntry>>;

    /// Overwrite an entry's status. Returns `false` when no such entry exists.
    async fn set_schedule_status(&self, id: i32, status: ScheduleStatus) -> SparcResult<bool>;
}

/// Analytics persistence.
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    /// Record one metric value.
    async fn record_metric(&self, metric: &NewMetricRecord) -> SparcResult<MetricRecord>;

    /// Metric records passing `filter`, oldest first.
    async fn list_metrics(&self, filter: &MetricFilter) -> SparcResult<Vec<MetricRecord>>;
}

/// Everything the application persists.
#[async_trait]
pub trait SparcStore:
    PersonaStore + CampaignStore + ContentStore + ScheduleStore + AnalyticsStore
{
    /// Every campaign with its content rows, campaigns newest first.
    async fn campaigns_with_content(&self) -> SparcResult<Vec<CampaignWithContent>> {
        let campaigns = self.list_campaigns().await?;
        let mut out = Vec::with_capacity(campaigns.len());
        for campaign in campaigns {
            let content = self.get_content_by_campaign(campaign.id).await?;
            out.push(CampaignWithContent { campaign, content });
        }
        Ok(out)
    }
}

impl<T> SparcStore for T where
    T: PersonaStore + CampaignStore + ContentStore + ScheduleStore + AnalyticsStore
{
}

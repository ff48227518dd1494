//! Process-local store used by tests and dry runs.

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use sparc_core::{
    Campaign, CampaignStatus, ContentUpdate, GeneratedContent, MetricFilter, MetricRecord,
    NewCampaign, NewContent, NewMetricRecord, NewScheduleEntry, Persona, PersonaProfile,
    PersonaUpdate, ScheduleEntry, ScheduleStatus,
};
use sparc_error::{ReferentialIntegrityError, SparcResult};
use sparc_interface::{
    AnalyticsStore, CampaignStore, ContentStore, PersonaStore, ScheduleStore, validate_persona,
};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct MemoryState {
    next_id: i32,
    personas: Vec<Persona>,
    campaigns: Vec<Campaign>,
    content: Vec<GeneratedContent>,
    schedules: Vec<ScheduleEntry>,
    metrics: Vec<MetricRecord>,
}

impl MemoryState {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// In-memory implementation of every store trait.
///
/// Enforces the same referential rules as the database store. Ids are
/// shared across tables and strictly increasing.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<MemoryState>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn newest_first<T>(rows: &mut [T], key: impl Fn(&T) -> (NaiveDateTime, i32)) {
    rows.sort_by_key(|row| std::cmp::Reverse(key(row)));
}

#[async_trait]
impl PersonaStore for InMemoryStore {
    async fn create_persona(&self, profile: &PersonaProfile) -> SparcResult<Persona> {
        validate_persona(profile)?;
        let mut state = self.state.write().await;
        let persona = Persona {
            id: state.next_id(),
            profile: profile.clone(),
            created_at: now(),
        };
        state.personas.push(persona.clone());
        Ok(persona)
    }

    async fn get_persona(&self, id: i32) -> SparcResult<Option<Persona>> {
        let state = self.state.read().await;
        Ok(state.personas.iter().find(|p| p.id == id).cloned())
    }

    async fn list_personas(&self) -> SparcResult<Vec<Persona>> {
        let mut personas = self.state.read().await.personas.clone();
        newest_first(&mut personas, |p| (p.created_at, p.id));
        Ok(personas)
    }

    async fn update_persona(&self, id: i32, update: &PersonaUpdate) -> SparcResult<bool> {
        let mut state = self.state.write().await;
        match state.personas.iter_mut().find(|p| p.id == id) {
            Some(persona) => {
                let mut profile = persona.profile.clone();
                update.apply_to(&mut profile);
                validate_persona(&profile)?;
                persona.profile = profile;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_persona(&self, id: i32) -> SparcResult<bool> {
        let mut state = self.state.write().await;
        let references = state.content.iter().filter(|c| c.persona_id == id).count();
        if references > 0 {
            return Err(ReferentialIntegrityError::new(
                "persona",
                id,
                format!("is referenced by {} content row(s)", references),
            )
            .into());
        }
        let before = state.personas.len();
        state.personas.retain(|p| p.id != id);
        Ok(state.personas.len() != before)
    }
}

#[async_trait]
impl CampaignStore for InMemoryStore {
    async fn create_campaign(&self, campaign: &NewCampaign) -> SparcResult<Campaign> {
        let mut state = self.state.write().await;
        let campaign = Campaign {
            id: state.next_id(),
            name: campaign.name.clone(),
            goal: campaign.goal.clone(),
            industries: campaign.industries.clone(),
            status: campaign.status,
            created_at: now(),
        };
        state.campaigns.push(campaign.clone());
        Ok(campaign)
    }

    async fn get_campaign(&self, id: i32) -> SparcResult<Option<Campaign>> {
        let state = self.state.read().await;
        Ok(state.campaigns.iter().find(|c| c.id == id).cloned())
    }

    async fn list_campaigns(&self) -> SparcResult<Vec<Campaign>> {
        let mut campaigns = self.state.read().await.campaigns.clone();
        newest_first(&mut campaigns, |c| (c.created_at, c.id));
        Ok(campaigns)
    }

    async fn set_campaign_status(&self, id: i32, status: CampaignStatus) -> SparcResult<bool> {
        let mut state = self.state.write().await;
        match state.campaigns.iter_mut().find(|c| c.id == id) {
            Some(campaign) => {
                campaign.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl ContentStore for InMemoryStore {
    async fn save_content(&self, content: &NewContent) -> SparcResult<i32> {
        let mut state = self.state.write().await;
        if !state.campaigns.iter().any(|c| c.id == content.campaign_id) {
            return Err(ReferentialIntegrityError::new(
                "campaign",
                content.campaign_id,
                "does not exist",
            )
            .into());
        }
        if !state.personas.iter().any(|p| p.id == content.persona_id) {
            return Err(ReferentialIntegrityError::new(
                "persona",
                content.persona_id,
                "does not exist",
            )
            .into());
        }

        let id = state.next_id();
        let created_at = now();
        state.content.push(GeneratedContent {
            id,
            campaign_id: content.campaign_id,
            persona_id: content.persona_id,
            content_type: content.content_type,
            tone: content.tone,
            body: content.body.clone(),
            hashtags: content.hashtags.clone(),
            keywords: content.keywords.clone(),
            twitter_variant: None,
            email_subject: None,
            email_body: None,
            external_post_url: None,
            created_at,
            updated_at: created_at,
        });
        Ok(id)
    }

    async fn update_content(&self, id: i32, update: &ContentUpdate) -> SparcResult<bool> {
        let mut state = self.state.write().await;
        match state.content.iter_mut().find(|c| c.id == id) {
            Some(content) => {
                update.apply_to(content, now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn get_content(&self, id: i32) -> SparcResult<Option<GeneratedContent>> {
        let state = self.state.read().await;
        Ok(state.content.iter().find(|c| c.id == id).cloned())
    }

    async fn get_content_by_campaign(
        &self,
        campaign_id: i32,
    ) -> SparcResult<Vec<GeneratedContent>> {
        let state = self.state.read().await;
        let mut rows: Vec<GeneratedContent> = state
            .content
            .iter()
            .filter(|c| c.campaign_id == campaign_id)
            .cloned()
            .collect();
        newest_first(&mut rows, |c| (c.created_at, c.id));
        Ok(rows)
    }
}

#[async_trait]
impl ScheduleStore for InMemoryStore {
    async fn create_schedule(&self, entry: &NewScheduleEntry) -> SparcResult<ScheduleEntry> {
        let mut state = self.state.write().await;
        if !state
            .content
            .iter()
            .any(|c| c.id == entry.content_id && c.campaign_id == entry.campaign_id)
        {
            return Err(ReferentialIntegrityError::new(
                "content",
                entry.content_id,
                format!("does not belong to campaign {}", entry.campaign_id),
            )
            .into());
        }

        let scheduled = ScheduleEntry {
            id: state.next_id(),
            campaign_id: entry.campaign_id,
            content_id: entry.content_id,
            platform: entry.platform,
            scheduled_time: entry.scheduled_time,
            status: ScheduleStatus::Pending,
            created_at: now(),
        };
        state.schedules.push(scheduled.clone());
        Ok(scheduled)
    }

    async fn get_schedule(&self, id: i32) -> SparcResult<Option<ScheduleEntry>> {
        let state = self.state.read().await;
        Ok(state.schedules.iter().find(|s| s.id == id).cloned())
    }

    async fn list_schedules(&self, campaign_id: Option<i32>) -> SparcResult<Vec<ScheduleEntry>> {
        let state = self.state.read().await;
        let mut entries: Vec<ScheduleEntry> = state
            .schedules
            .iter()
            .filter(|s| campaign_id.is_none_or(|id| s.campaign_id == id))
            .cloned()
            .collect();
        entries.sort_by_key(|s| (s.scheduled_time, s.id));
        Ok(entries)
    }

    async fn set_schedule_status(&self, id: i32, status: ScheduleStatus) -> SparcResult<bool> {
        let mut state = self.state.write().await;
        match state.schedules.iter_mut().find(|s| s.id == id) {
            Some(entry) => {
                entry.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl AnalyticsStore for InMemoryStore {
    async fn record_metric(&self, metric: &NewMetricRecord) -> SparcResult<MetricRecord> {
        let mut state = self.state.write().await;
        if !state.campaigns.iter().any(|c| c.id == metric.campaign_id) {
            return Err(ReferentialIntegrityError::new(
                "campaign",
                metric.campaign_id,
                "does not exist",
            )
            .into());
        }

        let record = MetricRecord {
            id: state.next_id(),
            campaign_id: metric.campaign_id,
            content_id: metric.content_id,
            platform: metric.platform,
            metric: metric.metric,
            value: metric.value,
            recorded_at: now(),
        };
        state.metrics.push(record.clone());
        Ok(record)
    }

    async fn list_metrics(&self, filter: &MetricFilter) -> SparcResult<Vec<MetricRecord>> {
        let state = self.state.read().await;
        let mut records: Vec<MetricRecord> = state
            .metrics
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect();
        records.sort_by_key(|m| (m.recorded_at, m.id));
        Ok(records)
    }
}

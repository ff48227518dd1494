//! Diesel row types and their conversions to core types.
//!
//! Enum columns hold the strum label of the value and list columns hold a
//! JSON array, so the SQLite file stays readable with plain tools.

use crate::schema::{analytics, campaign_schedules, campaigns, generated_content, personas};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use sparc_core::{
    Campaign, ContentType, ContentUpdate, GeneratedContent, MetricRecord, NewCampaign,
    NewContent, NewMetricRecord, NewScheduleEntry, Persona, PersonaProfile, ScheduleEntry,
    ScheduleStatus, TagSet,
};
use sparc_error::{StoreError, StoreErrorKind};
use std::fmt::Display;
use std::str::FromStr;

fn parse_label<T>(column: &str, value: &str) -> Result<T, StoreError>
where
    T: FromStr,
    T::Err: Display,
{
    value.parse().map_err(|e| {
        StoreError::new(StoreErrorKind::Serialization(format!(
            "Invalid {} value {:?}: {}",
            column, value, e
        )))
    })
}

fn parse_optional<T>(column: &str, value: Option<&str>) -> Result<Option<T>, StoreError>
where
    T: FromStr,
    T::Err: Display,
{
    value.map(|v| parse_label(column, v)).transpose()
}

/// Database row for the personas table.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = personas)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PersonaRow {
    pub id: i32,
    pub name: String,
    pub roles: String,
    pub experience: Option<String>,
    pub technical_proficiency: Option<String>,
    pub content_styles: String,
    pub pain_points: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Insertable and updatable persona columns.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = personas)]
#[diesel(treat_none_as_null = true)]
pub struct PersonaColumns {
    pub name: String,
    pub roles: String,
    pub experience: Option<String>,
    pub technical_proficiency: Option<String>,
    pub content_styles: String,
    pub pain_points: Option<String>,
}

impl PersonaColumns {
    pub fn from_profile(profile: &PersonaProfile) -> Result<Self, StoreError> {
        Ok(Self {
            name: profile.name.clone(),
            roles: serde_json::to_string(&profile.roles)?,
            experience: profile.experience.map(|e| e.to_string()),
            technical_proficiency: profile.technical_proficiency.map(|p| p.to_string()),
            content_styles: serde_json::to_string(&profile.content_styles)?,
            pain_points: profile.pain_points.clone(),
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = personas)]
pub struct NewPersonaRow {
    #[diesel(embed)]
    pub columns: PersonaColumns,
    pub created_at: NaiveDateTime,
}

impl TryFrom<PersonaRow> for Persona {
    type Error = StoreError;

    fn try_from(row: PersonaRow) -> Result<Self, Self::Error> {
        Ok(Persona {
            id: row.id,
            profile: PersonaProfile {
                name: row.name,
                roles: serde_json::from_str(&row.roles)?,
                experience: parse_optional("experience", row.experience.as_deref())?,
                technical_proficiency: parse_optional(
                    "technical_proficiency",
                    row.technical_proficiency.as_deref(),
                )?,
                content_styles: serde_json::from_str(&row.content_styles)?,
                pain_points: row.pain_points,
            },
            created_at: row.created_at,
        })
    }
}

/// Database row for the campaigns table.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = campaigns)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct CampaignRow {
    pub id: i32,
    pub name: String,
    pub goal: String,
    pub industries: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = campaigns)]
pub struct NewCampaignRow {
    pub name: String,
    pub goal: String,
    pub industries: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl NewCampaignRow {
    pub fn new(campaign: &NewCampaign, created_at: NaiveDateTime) -> Result<Self, StoreError> {
        Ok(Self {
            name: campaign.name.clone(),
            goal: campaign.goal.clone(),
            industries: serde_json::to_string(&campaign.industries)?,
            status: campaign.status.to_string(),
            created_at,
        })
    }
}

impl TryFrom<CampaignRow> for Campaign {
    type Error = StoreError;

    fn try_from(row: CampaignRow) -> Result<Self, Self::Error> {
        Ok(Campaign {
            id: row.id,
            name: row.name,
            goal: row.goal,
            industries: serde_json::from_str(&row.industries)?,
            status: parse_label("status", &row.status)?,
            created_at: row.created_at,
        })
    }
}

/// Database row for the generated_content table.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = generated_content)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ContentRow {
    pub id: i32,
    pub campaign_id: i32,
    pub persona_id: i32,
    pub content_type: String,
    pub tone: String,
    pub body: String,
    pub hashtags: String,
    pub keywords: String,
    pub twitter_variant: Option<String>,
    pub email_subject: Option<String>,
    pub email_body: Option<String>,
    pub external_post_url: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = generated_content)]
pub struct NewContentRow {
    pub campaign_id: i32,
    pub persona_id: i32,
    pub content_type: String,
    pub tone: String,
    pub body: String,
    pub hashtags: String,
    pub keywords: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewContentRow {
    pub fn new(content: &NewContent, created_at: NaiveDateTime) -> Result<Self, StoreError> {
        Ok(Self {
            campaign_id: content.campaign_id,
            persona_id: content.persona_id,
            content_type: content.content_type.to_string(),
            tone: content.tone.to_string(),
            body: content.body.clone(),
            hashtags: serde_json::to_string(&content.hashtags)?,
            keywords: serde_json::to_string(&content.keywords)?,
            created_at,
            updated_at: created_at,
        })
    }
}

/// Partial content update. `None` columns are left as they are.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = generated_content)]
pub struct ContentChangeset {
    pub body: Option<String>,
    pub hashtags: Option<String>,
    pub keywords: Option<String>,
    pub twitter_variant: Option<String>,
    pub email_subject: Option<String>,
    pub email_body: Option<String>,
    pub external_post_url: Option<String>,
    pub updated_at: NaiveDateTime,
}

impl ContentChangeset {
    pub fn new(update: &ContentUpdate, updated_at: NaiveDateTime) -> Result<Self, StoreError> {
        let json = |tags: &Option<TagSet>| tags.as_ref().map(serde_json::to_string).transpose();
        Ok(Self {
            body: update.body.clone(),
            hashtags: json(&update.hashtags)?,
            keywords: json(&update.keywords)?,
            twitter_variant: update.twitter_variant.clone(),
            email_subject: update.email_subject.clone(),
            email_body: update.email_body.clone(),
            external_post_url: update.external_post_url.clone(),
            updated_at,
        })
    }
}

impl TryFrom<ContentRow> for GeneratedContent {
    type Error = StoreError;

    fn try_from(row: ContentRow) -> Result<Self, Self::Error> {
        Ok(GeneratedContent {
            id: row.id,
            campaign_id: row.campaign_id,
            persona_id: row.persona_id,
            content_type: parse_label::<ContentType>("content_type", &row.content_type)?,
            tone: parse_label("tone", &row.tone)?,
            body: row.body,
            hashtags: serde_json::from_str(&row.hashtags)?,
            keywords: serde_json::from_str(&row.keywords)?,
            twitter_variant: row.twitter_variant,
            email_subject: row.email_subject,
            email_body: row.email_body,
            external_post_url: row.external_post_url,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Database row for the campaign_schedules table.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = campaign_schedules)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ScheduleRow {
    pub id: i32,
    pub campaign_id: i32,
    pub content_id: i32,
    pub platform: String,
    pub scheduled_time: NaiveDateTime,
    pub status: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = campaign_schedules)]
pub struct NewScheduleRow {
    pub campaign_id: i32,
    pub content_id: i32,
    pub platform: String,
    pub scheduled_time: NaiveDateTime,
    pub status: String,
    pub created_at: NaiveDateTime,
}

impl NewScheduleRow {
    pub fn new(entry: &NewScheduleEntry, created_at: NaiveDateTime) -> Self {
        Self {
            campaign_id: entry.campaign_id,
            content_id: entry.content_id,
            platform: entry.platform.to_string(),
            scheduled_time: entry.scheduled_time,
            status: ScheduleStatus::Pending.to_string(),
            created_at,
        }
    }
}

impl TryFrom<ScheduleRow> for ScheduleEntry {
    type Error = StoreError;

    fn try_from(row: ScheduleRow) -> Result<Self, Self::Error> {
        Ok(ScheduleEntry {
            id: row.id,
            campaign_id: row.campaign_id,
            content_id: row.content_id,
            platform: parse_label("platform", &row.platform)?,
            scheduled_time: row.scheduled_time,
            status: parse_label("status", &row.status)?,
            created_at: row.created_at,
        })
    }
}

/// Database row for the analytics table.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = analytics)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct MetricRow {
    pub id: i32,
    pub campaign_id: i32,
    pub content_id: Option<i32>,
    pub platform: String,
    pub metric_type: String,
    pub value: f64,
    pub recorded_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = analytics)]
pub struct NewMetricRow {
    pub campaign_id: i32,
    pub content_id: Option<i32>,
    pub platform: String,
    pub metric_type: String,
    pub value: f64,
    pub recorded_at: NaiveDateTime,
}

impl NewMetricRow {
    pub fn new(metric: &NewMetricRecord, recorded_at: NaiveDateTime) -> Self {
        Self {
            campaign_id: metric.campaign_id,
            content_id: metric.content_id,
            platform: metric.platform.to_string(),
            metric_type: metric.metric.to_string(),
            value: metric.value,
            recorded_at,
        }
    }
}

impl TryFrom<MetricRow> for MetricRecord {
    type Error = StoreError;

    fn try_from(row: MetricRow) -> Result<Self, Self::Error> {
        Ok(MetricRecord {
            id: row.id,
            campaign_id: row.campaign_id,
            content_id: row.content_id,
            platform: parse_label("platform", &row.platform)?,
            metric: parse_label("metric_type", &row.metric_type)?,
            value: row.value,
            recorded_at: row.recorded_at,
        })
    }
}

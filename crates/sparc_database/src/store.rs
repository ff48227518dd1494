//! [`SqliteStore`]: every store trait over a pooled SQLite database.

use crate::connection::{SqlitePool, establish_pool};
use crate::models::{
    CampaignRow, ContentChangeset, ContentRow, MetricRow, NewCampaignRow, NewContentRow,
    NewMetricRow, NewPersonaRow, NewScheduleRow, PersonaColumns, PersonaRow, ScheduleRow,
};
use crate::schema::{analytics, campaign_schedules, campaigns, generated_content, personas};
use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use sparc_core::{
    Campaign, CampaignStatus, ContentUpdate, GeneratedContent, MetricFilter, MetricRecord,
    NewCampaign, NewContent, NewMetricRecord, NewScheduleEntry, Persona, PersonaProfile,
    PersonaUpdate, ScheduleEntry, ScheduleStatus,
};
use sparc_error::{ReferentialIntegrityError, SparcError, SparcResult, StoreError, StoreErrorKind};
use sparc_interface::{
    AnalyticsStore, CampaignStore, ContentStore, PersonaStore, ScheduleStore, validate_persona,
};
use std::path::Path;
use tracing::{debug, instrument};

fn now() -> NaiveDateTime {
    Utc::now().naive_utc()
}

fn convert<R, T>(rows: Vec<R>) -> SparcResult<Vec<T>>
where
    T: TryFrom<R, Error = StoreError>,
{
    rows.into_iter()
        .map(|row| T::try_from(row).map_err(SparcError::from))
        .collect()
}

fn campaign_exists(conn: &mut SqliteConnection, id: i32) -> QueryResult<bool> {
    diesel::select(diesel::dsl::exists(campaigns::table.find(id))).get_result(conn)
}

fn persona_exists(conn: &mut SqliteConnection, id: i32) -> QueryResult<bool> {
    diesel::select(diesel::dsl::exists(personas::table.find(id))).get_result(conn)
}

/// SQLite-backed store.
///
/// Diesel is synchronous, so every call checks out a pooled connection on
/// tokio's blocking thread pool.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl std::fmt::Debug for SqliteStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.pool.state();
        f.debug_struct("SqliteStore")
            .field("connections", &state.connections)
            .field("idle_connections", &state.idle_connections)
            .finish()
    }
}

impl SqliteStore {
    /// Open the database at `path`, creating and migrating it as needed.
    pub fn open(path: impl AsRef<Path>, pool_size: u32) -> SparcResult<Self> {
        Ok(Self {
            pool: establish_pool(path, pool_size)?,
        })
    }

    /// Wrap an existing, migrated pool.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn run<T, F>(&self, f: F) -> SparcResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> SparcResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || -> SparcResult<T> {
            let mut conn = pool.get().map_err(|e| {
                StoreError::new(StoreErrorKind::Connection(format!(
                    "Failed to get connection from pool: {}",
                    e
                )))
            })?;
            f(&mut conn)
        })
        .await
        .map_err(|e| {
            StoreError::new(StoreErrorKind::Connection(format!("Task join error: {}", e)))
        })?
    }
}

#[async_trait]
impl PersonaStore for SqliteStore {
    #[instrument(skip(self, profile), fields(name = %profile.name))]
    async fn create_persona(&self, profile: &PersonaProfile) -> SparcResult<Persona> {
        validate_persona(profile)?;
        let row = NewPersonaRow {
            columns: PersonaColumns::from_profile(profile)?,
            created_at: now(),
        };
        self.run(move |conn| {
            let inserted: PersonaRow = diesel::insert_into(personas::table)
                .values(&row)
                .returning(PersonaRow::as_returning())
                .get_result(conn)?;
            debug!(persona_id = inserted.id, "Created persona");
            Ok(Persona::try_from(inserted)?)
        })
        .await
    }

    async fn get_persona(&self, id: i32) -> SparcResult<Option<Persona>> {
        self.run(move |conn| {
            let row = personas::table
                .find(id)
                .select(PersonaRow::as_select())
                .first(conn)
                .optional()?;
            Ok(row.map(Persona::try_from).transpose()?)
        })
        .await
    }

    async fn list_personas(&self) -> SparcResult<Vec<Persona>> {
        self.run(|conn| {
            let rows = personas::table
                .order((personas::created_at.desc(), personas::id.desc()))
                .select(PersonaRow::as_select())
                .load(conn)?;
            convert(rows)
        })
        .await
    }

    #[instrument(skip(self, update))]
    async fn update_persona(&self, id: i32, update: &PersonaUpdate) -> SparcResult<bool> {
        let update = update.clone();
        self.run(move |conn| {
            conn.transaction::<_, SparcError, _>(|conn| {
                let Some(row) = personas::table
                    .find(id)
                    .select(PersonaRow::as_select())
                    .first(conn)
                    .optional()?
                else {
                    return Ok(false);
                };

                let mut persona = Persona::try_from(row)?;
                update.apply_to(&mut persona.profile);
                validate_persona(&persona.profile)?;
                let columns = PersonaColumns::from_profile(&persona.profile)?;
                diesel::update(personas::table.find(id))
                    .set(&columns)
                    .execute(conn)?;
                Ok(true)
            })
        })
        .await
    }

    #[instrument(skip(self))]
    async fn delete_persona(&self, id: i32) -> SparcResult<bool> {
        self.run(move |conn| {
            conn.transaction::<_, SparcError, _>(|conn| {
                let references: i64 = generated_content::table
                    .filter(generated_content::persona_id.eq(id))
                    .count()
                    .get_result(conn)?;
                if references > 0 {
                    return Err(ReferentialIntegrityError::new(
                        "persona",
                        id,
                        format!("is referenced by {} content row(s)", references),
                    )
                    .into());
                }

                let deleted = diesel::delete(personas::table.find(id)).execute(conn)?;
                debug!(deleted, "Deleted persona");
                Ok(deleted > 0)
            })
        })
        .await
    }
}

#[async_trait]
impl CampaignStore for SqliteStore {
    #[instrument(skip(self, campaign), fields(name = %campaign.name))]
    async fn create_campaign(&self, campaign: &NewCampaign) -> SparcResult<Campaign> {
        let row = NewCampaignRow::new(campaign, now())?;
        self.run(move |conn| {
            let inserted: CampaignRow = diesel::insert_into(campaigns::table)
                .values(&row)
                .returning(CampaignRow::as_returning())
                .get_result(conn)?;
            debug!(campaign_id = inserted.id, "Created campaign");
            Ok(Campaign::try_from(inserted)?)
        })
        .await
    }

    async fn get_campaign(&self, id: i32) -> SparcResult<Option<Campaign>> {
        self.run(move |conn| {
            let row = campaigns::table
                .find(id)
                .select(CampaignRow::as_select())
                .first(conn)
                .optional()?;
            Ok(row.map(Campaign::try_from).transpose()?)
        })
        .await
    }

    async fn list_campaigns(&self) -> SparcResult<Vec<Campaign>> {
        self.run(|conn| {
            let rows = campaigns::table
                .order((campaigns::created_at.desc(), campaigns::id.desc()))
                .select(CampaignRow::as_select())
                .load(conn)?;
            convert(rows)
        })
        .await
    }

    #[instrument(skip(self))]
    async fn set_campaign_status(&self, id: i32, status: CampaignStatus) -> SparcResult<bool> {
        self.run(move |conn| {
            let updated = diesel::update(campaigns::table.find(id))
                .set(campaigns::status.eq(status.to_string()))
                .execute(conn)?;
            Ok(updated > 0)
        })
        .await
    }
}

#[async_trait]
impl ContentStore for SqliteStore {
    #[instrument(skip(self, content), fields(campaign_id = content.campaign_id, persona_id = content.persona_id))]
    async fn save_content(&self, content: &NewContent) -> SparcResult<i32> {
        let row = NewContentRow::new(content, now())?;
        self.run(move |conn| {
            conn.transaction::<_, SparcError, _>(|conn| {
                if !campaign_exists(conn, row.campaign_id)? {
                    return Err(ReferentialIntegrityError::new(
                        "campaign",
                        row.campaign_id,
                        "does not exist",
                    )
                    .into());
                }
                if !persona_exists(conn, row.persona_id)? {
                    return Err(ReferentialIntegrityError::new(
                        "persona",
                        row.persona_id,
                        "does not exist",
                    )
                    .into());
                }

                let id: i32 = diesel::insert_into(generated_content::table)
                    .values(&row)
                    .returning(generated_content::id)
                    .get_result(conn)?;
                debug!(content_id = id, "Saved content");
                Ok(id)
            })
        })
        .await
    }

    #[instrument(skip(self, update))]
    async fn update_content(&self, id: i32, update: &ContentUpdate) -> SparcResult<bool> {
        let changes = ContentChangeset::new(update, now())?;
        self.run(move |conn| {
            let updated = diesel::update(generated_content::table.find(id))
                .set(&changes)
                .execute(conn)?;
            Ok(updated > 0)
        })
        .await
    }

    async fn get_content(&self, id: i32) -> SparcResult<Option<GeneratedContent>> {
        self.run(move |conn| {
            let row = generated_content::table
                .find(id)
                .select(ContentRow::as_select())
                .first(conn)
                .optional()?;
            Ok(row.map(GeneratedContent::try_from).transpose()?)
        })
        .await
    }

    async fn get_content_by_campaign(
        &self,
        campaign_id: i32,
    ) -> SparcResult<Vec<GeneratedContent>> {
        self.run(move |conn| {
            let rows = generated_content::table
                .filter(generated_content::campaign_id.eq(campaign_id))
                .order((
                    generated_content::created_at.desc(),
                    generated_content::id.desc(),
                ))
                .select(ContentRow::as_select())
                .load(conn)?;
            convert(rows)
        })
        .await
    }
}

#[async_trait]
impl ScheduleStore for SqliteStore {
    #[instrument(skip(self, entry), fields(content_id = entry.content_id, platform = %entry.platform))]
    async fn create_schedule(&self, entry: &NewScheduleEntry) -> SparcResult<ScheduleEntry> {
        let row = NewScheduleRow::new(entry, now());
        self.run(move |conn| {
            conn.transaction::<_, SparcError, _>(|conn| {
                let belongs: bool = diesel::select(diesel::dsl::exists(
                    generated_content::table
                        .filter(generated_content::id.eq(row.content_id))
                        .filter(generated_content::campaign_id.eq(row.campaign_id)),
                ))
                .get_result(conn)?;
                if !belongs {
                    return Err(ReferentialIntegrityError::new(
                        "content",
                        row.content_id,
                        format!("does not belong to campaign {}", row.campaign_id),
                    )
                    .into());
                }

                let inserted: ScheduleRow = diesel::insert_into(campaign_schedules::table)
                    .values(&row)
                    .returning(ScheduleRow::as_returning())
                    .get_result(conn)?;
                Ok(ScheduleEntry::try_from(inserted)?)
            })
        })
        .await
    }

    async fn get_schedule(&self, id: i32) -> SparcResult<Option<ScheduleEntry>> {
        self.run(move |conn| {
            let row = campaign_schedules::table
                .find(id)
                .select(ScheduleRow::as_select())
                .first(conn)
                .optional()?;
            Ok(row.map(ScheduleEntry::try_from).transpose()?)
        })
        .await
    }

    async fn list_schedules(&self, campaign_id: Option<i32>) -> SparcResult<Vec<ScheduleEntry>> {
        self.run(move |conn| {
            let mut query = campaign_schedules::table
                .select(ScheduleRow::as_select())
                .into_boxed();
            if let Some(campaign_id) = campaign_id {
                query = query.filter(campaign_schedules::campaign_id.eq(campaign_id));
            }
            let rows = query
                .order((
                    campaign_schedules::scheduled_time.asc(),
                    campaign_schedules::id.asc(),
                ))
                .load(conn)?;
            convert(rows)
        })
        .await
    }

    #[instrument(skip(self))]
    async fn set_schedule_status(&self, id: i32, status: ScheduleStatus) -> SparcResult<bool> {
        self.run(move |conn| {
            let updated = diesel::update(campaign_schedules::table.find(id))
                .set(campaign_schedules::status.eq(status.to_string()))
                .execute(conn)?;
            Ok(updated > 0)
        })
        .await
    }
}

#[async_trait]
impl AnalyticsStore for SqliteStore {
    #[instrument(skip(self, metric), fields(campaign_id = metric.campaign_id, metric = %metric.metric))]
    async fn record_metric(&self, metric: &NewMetricRecord) -> SparcResult<MetricRecord> {
        let row = NewMetricRow::new(metric, now());
        self.run(move |conn| {
            conn.transaction::<_, SparcError, _>(|conn| {
                if !campaign_exists(conn, row.campaign_id)? {
                    return Err(ReferentialIntegrityError::new(
                        "campaign",
                        row.campaign_id,
                        "does not exist",
                    )
                    .into());
                }

                let inserted: MetricRow = diesel::insert_into(analytics::table)
                    .values(&row)
                    .returning(MetricRow::as_returning())
                    .get_result(conn)?;
                Ok(MetricRecord::try_from(inserted)?)
            })
        })
        .await
    }

    async fn list_metrics(&self, filter: &MetricFilter) -> SparcResult<Vec<MetricRecord>> {
        let filter = *filter;
        self.run(move |conn| {
            let mut query = analytics::table.select(MetricRow::as_select()).into_boxed();
            if let Some(campaign_id) = filter.campaign_id {
                query = query.filter(analytics::campaign_id.eq(campaign_id));
            }
            if let Some(platform) = filter.platform {
                query = query.filter(analytics::platform.eq(platform.to_string()));
            }
            if let Some(since) = filter.since {
                query = query.filter(analytics::recorded_at.ge(since));
            }
            let rows = query
                .order((analytics::recorded_at.asc(), analytics::id.asc()))
                .load(conn)?;
            convert(rows)
        })
        .await
    }
}

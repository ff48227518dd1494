//! Passive scheduling and descriptive analytics.
//!
//! Nothing here calls the model, so a tracker needs only a store.

use chrono::NaiveDateTime;
use sparc_core::{
    AnalyticsSummary, MetricFilter, MetricRecord, NewMetricRecord, NewScheduleEntry, Platform,
    ScheduleEntry, ScheduleStatus,
};
use sparc_error::{InvalidArgumentError, SparcResult, StoreError};
use sparc_interface::SparcStore;
use std::sync::Arc;
use tracing::{info, instrument};

/// Records schedule entries and campaign metrics.
#[derive(Clone)]
pub struct CampaignTracker {
    store: Arc<dyn SparcStore>,
}

impl std::fmt::Debug for CampaignTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CampaignTracker").finish_non_exhaustive()
    }
}

impl CampaignTracker {
    /// Create a tracker over `store`.
    pub fn new(store: Arc<dyn SparcStore>) -> Self {
        Self { store }
    }

    /// Record one pending schedule entry per platform.
    ///
    /// Entries are passive; nothing ever executes them.
    #[instrument(skip(self, platforms))]
    pub async fn schedule(
        &self,
        campaign_id: i32,
        content_id: i32,
        platforms: &[Platform],
        scheduled_time: NaiveDateTime,
        now: NaiveDateTime,
    ) -> SparcResult<Vec<ScheduleEntry>> {
        if platforms.is_empty() {
            return Err(InvalidArgumentError::new("select at least one platform").into());
        }
        if scheduled_time <= now {
            return Err(InvalidArgumentError::new(format!(
                "scheduled time {} is not in the future",
                scheduled_time
            ))
            .into());
        }

        let content = self
            .store
            .get_content(content_id)
            .await?
            .ok_or_else(|| StoreError::not_found("content", content_id))?;
        if content.campaign_id != campaign_id {
            return Err(InvalidArgumentError::new(format!(
                "content {} belongs to campaign {}, not {}",
                content_id, content.campaign_id, campaign_id
            ))
            .into());
        }

        let mut platforms = platforms.to_vec();
        platforms.sort();
        platforms.dedup();

        let mut entries = Vec::with_capacity(platforms.len());
        for platform in platforms {
            let entry = self
                .store
                .create_schedule(&NewScheduleEntry {
                    campaign_id,
                    content_id,
                    platform,
                    scheduled_time,
                })
                .await?;
            entries.push(entry);
        }
        info!(count = entries.len(), "Scheduled content");
        Ok(entries)
    }

    /// Cancel a pending schedule entry.
    #[instrument(skip(self))]
    pub async fn cancel_schedule(&self, id: i32) -> SparcResult<ScheduleEntry> {
        let mut entry = self
            .store
            .get_schedule(id)
            .await?
            .ok_or_else(|| StoreError::not_found("schedule", id))?;

        if entry.status != ScheduleStatus::Pending {
            return Err(InvalidArgumentError::new(format!(
                "schedule {} is {}, only pending entries can be cancelled",
                id, entry.status
            ))
            .into());
        }

        if !self
            .store
            .set_schedule_status(id, ScheduleStatus::Cancelled)
            .await?
        {
            return Err(StoreError::not_found("schedule", id).into());
        }
        entry.status = ScheduleStatus::Cancelled;
        Ok(entry)
    }

    /// Record one metric value.
    #[instrument(skip(self, metric), fields(campaign_id = metric.campaign_id, metric = %metric.metric))]
    pub async fn record_metric(&self, metric: &NewMetricRecord) -> SparcResult<MetricRecord> {
        if !metric.value.is_finite() {
            return Err(InvalidArgumentError::new("metric value must be a finite number").into());
        }
        self.store.record_metric(metric).await
    }

    /// Aggregate the metrics passing `filter`.
    pub async fn summary(&self, filter: &MetricFilter) -> SparcResult<AnalyticsSummary> {
        let records = self.store.list_metrics(filter).await?;
        Ok(AnalyticsSummary::from_records(&records))
    }
}

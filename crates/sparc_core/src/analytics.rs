//! Descriptive campaign analytics.

use crate::Platform;
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// What a metric value measures.
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
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Times the content was shown
    Impressions,
    /// Times the content was clicked
    Clicks,
    /// Conversions attributed to the content
    Conversions,
    /// Return on investment, as a percentage
    Roi,
}

/// A metric value to record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMetricRecord {
    /// Owning campaign
    pub campaign_id: i32,
    /// Content the value is attributed to, if any
    pub content_id: Option<i32>,
    /// Channel the value was observed on
    pub platform: Platform,
    /// What was measured
    pub metric: MetricKind,
    /// Measured value
    pub value: f64,
}

/// A stored metric value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Primary key
    pub id: i32,
    /// Owning campaign
    pub campaign_id: i32,
    /// Content the value is attributed to, if any
    pub content_id: Option<i32>,
    /// Channel the value was observed on
    pub platform: Platform,
    /// What was measured
    pub metric: MetricKind,
    /// Measured value
    pub value: f64,
    /// When the value was recorded (UTC)
    pub recorded_at: NaiveDateTime,
}

/// Narrows a metric listing. Unset fields match everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", strip_option)]
pub struct MetricFilter {
    /// Only this campaign
    pub campaign_id: Option<i32>,
    /// Only this platform
    pub platform: Option<Platform>,
    /// Only records at or after this instant
    pub since: Option<NaiveDateTime>,
}

impl MetricFilter {
    /// Whether `record` passes the filter.
    pub fn matches(&self, record: &MetricRecord) -> bool {
        self.campaign_id.is_none_or(|id| record.campaign_id == id)
            && self.platform.is_none_or(|p| record.platform == p)
            && self.since.is_none_or(|since| record.recorded_at >= since)
    }
}

/// Reporting window for summaries.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum ReportingPeriod {
    /// Last seven days
    #[strum(to_string = "Last 7 Days", serialize = "7d")]
    Last7Days,
    /// Last thirty days
    #[default]
    #[strum(to_string = "Last 30 Days", serialize = "30d")]
    Last30Days,
    /// Everything recorded
    #[strum(to_string = "All Time", serialize = "all")]
    AllTime,
}

impl ReportingPeriod {
    /// Lower bound of the window ending at `now`, or `None` for all time.
    pub fn since(self, now: NaiveDateTime) -> Option<NaiveDateTime> {
        match self {
            ReportingPeriod::Last7Days => Some(now - Duration::days(7)),
            ReportingPeriod::Last30Days => Some(now - Duration::days(30)),
            ReportingPeriod::AllTime => None,
        }
    }
}

/// Aggregate view over a set of metric records.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    /// Sum of impressions
    pub total_impressions: f64,
    /// Sum of clicks
    pub total_clicks: f64,
    /// Clicks per impression, as a percentage
    pub average_ctr: f64,
    /// Sum of conversions
    pub total_conversions: f64,
    /// Mean of the ROI records
    pub average_roi: f64,
}

impl AnalyticsSummary {
    /// Aggregate `records`.
    ///
    /// CTR is zero when there are no impressions and ROI is zero when no ROI
    /// values were recorded.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use sparc_core::{AnalyticsSummary, MetricKind, MetricRecord, Platform};
    ///
    /// let at = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let record = |metric, value| MetricRecord {
    ///     id: 0,
    ///     campaign_id: 1,
    ///     content_id: None,
    ///     platform: Platform::Twitter,
    ///     metric,
    ///     value,
    ///     recorded_at: at,
    /// };
    ///
    /// let summary = AnalyticsSummary::from_records(&[
    ///     record(MetricKind::Impressions, 200.0),
    ///     record(MetricKind::Clicks, 10.0),
    /// ]);
    /// assert_eq!(summary.average_ctr, 5.0);
    /// assert_eq!(summary.average_roi, 0.0);
    /// ```
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a MetricRecord>) -> Self {
        let mut summary = AnalyticsSummary::default();
        let mut roi_total = 0.0;
        let mut roi_count = 0usize;

        for record in records {
            match record.metric {
                MetricKind::Impressions => summary.total_impressions += record.value,
                MetricKind::Clicks => summary.total_clicks += record.value,
                MetricKind::Conversions => summary.total_conversions += record.value,
                MetricKind::Roi => {
                    roi_total += record.value;
                    roi_count += 1;
                }
            }
        }

        if summary.total_impressions > 0.0 {
            summary.average_ctr = summary.total_clicks / summary.total_impressions * 100.0;
        }
        if roi_count > 0 {
            summary.average_roi = roi_total / roi_count as f64;
        }
        summary
    }
}

//! Analytics command handlers.

use super::output::print_json;
use super::{AnalyticsCommands, OutputFormat};
use crate::AppState;
use chrono::Utc;
use sparc_core::{MetricFilter, NewMetricRecord};

/// Handle analytics commands.
pub async fn handle_analytics_command(
    state: &AppState,
    cmd: AnalyticsCommands,
) -> anyhow::Result<()> {
    let tracker = state.tracker();
    match cmd {
        AnalyticsCommands::Record {
            campaign,
            content,
            platform,
            metric,
            value,
        } => {
            let record = tracker
                .record_metric(&NewMetricRecord {
                    campaign_id: campaign,
                    content_id: content,
                    platform,
                    metric,
                    value,
                })
                .await?;
            println!(
                "Recorded {} {} = {} for campaign {}",
                record.platform, record.metric, record.value, record.campaign_id
            );
        }

        AnalyticsCommands::Summary {
            campaign,
            platform,
            period,
            format,
        } => {
            let filter = MetricFilter {
                campaign_id: campaign,
                platform,
                since: period.since(Utc::now().naive_utc()),
            };
            let summary = tracker.summary(&filter).await?;

            match format {
                OutputFormat::Json => print_json(&summary)?,
                OutputFormat::Human => {
                    println!("{}", period);
                    println!("  Impressions: {:.0}", summary.total_impressions);
                    println!("  Clicks: {:.0}", summary.total_clicks);
                    println!("  Average CTR: {:.2}%", summary.average_ctr);
                    println!("  Conversions: {:.0}", summary.total_conversions);
                    println!("  Average ROI: {:.2}%", summary.average_roi);
                }
            }
        }
    }
    Ok(())
}

//! Schedule command handlers.

use super::ScheduleCommands;
use super::output::{print_list, schedule_line};
use crate::AppState;
use anyhow::anyhow;
use chrono::{NaiveDateTime, Utc};

const TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Parse a UTC date and time in one of the accepted layouts.
pub fn parse_schedule_time(input: &str) -> anyhow::Result<NaiveDateTime> {
    let input = input.trim();
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .ok_or_else(|| anyhow!("unrecognised time '{}', expected e.g. 2026-03-01 09:30", input))
}

/// Handle schedule commands.
pub async fn handle_schedule_command(
    state: &AppState,
    cmd: ScheduleCommands,
) -> anyhow::Result<()> {
    match cmd {
        ScheduleCommands::Create {
            campaign,
            content,
            platforms,
            at,
        } => {
            let scheduled_time = parse_schedule_time(&at)?;
            let entries = state
                .tracker()
                .schedule(
                    campaign,
                    content,
                    &platforms,
                    scheduled_time,
                    Utc::now().naive_utc(),
                )
                .await?;
            for entry in &entries {
                println!("Scheduled {}", schedule_line(entry));
            }
        }

        ScheduleCommands::List { campaign, format } => {
            let entries = state.store().list_schedules(campaign).await?;
            print_list(&entries, format, schedule_line)?;
        }

        ScheduleCommands::Cancel { id } => {
            let entry = state.tracker().cancel_schedule(id).await?;
            println!("Cancelled {}", schedule_line(&entry));
        }
    }
    Ok(())
}

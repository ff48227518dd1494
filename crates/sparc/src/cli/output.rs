//! Shared output helpers.

use super::OutputFormat;
use serde::Serialize;
use sparc_core::{Campaign, GeneratedContent, Persona, ScheduleEntry};

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print `items` as JSON, or one human line per item followed by a total.
pub(crate) fn print_list<T: Serialize>(
    items: &[T],
    format: OutputFormat,
    line: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(items),
        OutputFormat::Human => {
            for item in items {
                println!("{}", line(item));
            }
            println!("Total: {} items", items.len());
            Ok(())
        }
    }
}

pub(crate) fn persona_line(persona: &Persona) -> String {
    format!(
        "[{}] {} - {} ({}, {})",
        persona.id,
        persona.profile.name,
        persona.profile.roles_label(),
        persona.profile.experience_label(),
        persona.profile.proficiency_label()
    )
}

pub(crate) fn campaign_line(campaign: &Campaign) -> String {
    format!(
        "[{}] {} ({}) - {}",
        campaign.id, campaign.name, campaign.status, campaign.goal
    )
}

pub(crate) fn content_line(content: &GeneratedContent) -> String {
    let preview: String = content.body.chars().take(60).collect();
    format!(
        "[{}] {} / {} - {}",
        content.id, content.content_type, content.tone, preview
    )
}

pub(crate) fn schedule_line(entry: &ScheduleEntry) -> String {
    format!(
        "[{}] campaign {} content {} on {} at {} ({})",
        entry.id,
        entry.campaign_id,
        entry.content_id,
        entry.platform,
        entry.scheduled_time.format("%Y-%m-%d %H:%M"),
        entry.status
    )
}

pub(crate) fn print_content(content: &GeneratedContent) {
    println!("Content {}", content.id);
    println!("  Campaign: {}", content.campaign_id);
    println!("  Persona: {}", content.persona_id);
    println!("  Type: {}", content.content_type);
    println!("  Tone: {}", content.tone);
    if !content.hashtags.is_empty() {
        println!("  Hashtags: {}", content.hashtags.joined(", "));
    }
    if !content.keywords.is_empty() {
        println!("  Keywords: {}", content.keywords.joined(", "));
    }
    println!("  Updated: {}", content.updated_at);
    println!("{:-<80}", "");
    println!("{}", content.body);
    if let Some(variant) = &content.twitter_variant {
        println!("{:-<80}", "");
        println!("Twitter: {}", variant);
    }
    if let Some(url) = &content.external_post_url {
        println!("Posted: {}", url);
    }
    if let (Some(subject), Some(body)) = (&content.email_subject, &content.email_body) {
        println!("{:-<80}", "");
        println!("Email subject: {}", subject);
        println!("{}", body);
    }
}

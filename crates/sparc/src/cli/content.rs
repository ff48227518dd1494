//! Generation, adaptation and content command handlers.

use super::output::{content_line, print_content, print_json, print_list};
use super::{AdaptCommands, ContentCommands, GenerateArgs, OutputFormat};
use crate::AppState;
use anyhow::bail;
use sparc_content::ContentRequest;
use sparc_core::{ContentUpdate, TagSet};
use tracing::info;

/// Generate and store canonical content.
pub async fn handle_generate(state: &AppState, args: GenerateArgs) -> anyhow::Result<()> {
    let pipeline = state.pipeline()?;
    let request = ContentRequest::builder()
        .campaign_id(args.campaign)
        .persona_id(args.persona)
        .content_type(args.content_type)
        .tone(args.tone)
        .hashtags(TagSet::from_csv(&args.hashtags))
        .keywords(TagSet::from_csv(&args.keywords))
        .build()?;

    let content = pipeline.generate(&request).await?;
    info!(content_id = content.id, "Generated content");
    print_content(&content);
    Ok(())
}

/// Produce a channel variant.
pub async fn handle_adapt_command(state: &AppState, cmd: AdaptCommands) -> anyhow::Result<()> {
    let pipeline = state.pipeline()?;
    match cmd {
        AdaptCommands::Twitter { content_id, limit } => {
            let post = pipeline.adapt_short_form(content_id, limit).await?;
            println!("{}", post);
            println!(
                "({} / {} characters)",
                post.chars().count(),
                limit.unwrap_or(pipeline.short_form_limit())
            );
        }
        AdaptCommands::Email {
            content_id,
            subject,
        } => {
            let draft = pipeline.adapt_email(content_id, subject.as_deref()).await?;
            println!("Subject: {}", draft.subject);
            println!("{:-<80}", "");
            println!("{}", draft.body);
        }
    }
    Ok(())
}

/// Inspect and edit stored content.
pub async fn handle_content_command(state: &AppState, cmd: ContentCommands) -> anyhow::Result<()> {
    let store = state.store();
    match cmd {
        ContentCommands::Show { id, format } => {
            let Some(content) = store.get_content(id).await? else {
                bail!("content {} not found", id);
            };
            match format {
                OutputFormat::Json => print_json(&content)?,
                OutputFormat::Human => print_content(&content),
            }
        }

        ContentCommands::List { campaign, format } => {
            let content = store.get_content_by_campaign(campaign).await?;
            print_list(&content, format, content_line)?;
        }

        ContentCommands::Edit {
            id,
            body,
            hashtags,
            keywords,
            twitter,
            email_subject,
            email_body,
        } => {
            let update = ContentUpdate {
                body,
                hashtags: hashtags.as_deref().map(TagSet::from_csv),
                keywords: keywords.as_deref().map(TagSet::from_csv),
                twitter_variant: twitter,
                email_subject,
                email_body,
                external_post_url: None,
            };
            if update.is_empty() {
                bail!("nothing to update; pass at least one field");
            }
            if !store.update_content(id, &update).await? {
                bail!("content {} not found", id);
            }
            println!("Updated content {}", id);
        }
    }
    Ok(())
}

//! Delivery command handlers.

use super::PublishCommands;
use crate::AppState;

/// Deliver stored content through a channel.
pub async fn handle_publish_command(state: &AppState, cmd: PublishCommands) -> anyhow::Result<()> {
    let pipeline = state.pipeline()?;
    match cmd {
        PublishCommands::Twitter { content_id } => {
            let publisher = state.twitter_publisher()?;
            let receipt = pipeline.publish_short_form(content_id, &publisher).await?;
            println!("Posted: {}", receipt.url);
        }
        PublishCommands::Email { content_id, to } => {
            let sender = state.email_sender()?;
            let draft = pipeline.send_email(content_id, &to, &sender).await?;
            println!("Sent \"{}\" to {} recipient(s)", draft.subject, to.len());
        }
    }
    Ok(())
}

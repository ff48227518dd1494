//! Campaign command handlers.

use super::output::{campaign_line, content_line, print_json, print_list};
use super::{CampaignCommands, OutputFormat};
use crate::AppState;
use anyhow::bail;
use sparc_core::{CampaignWithContent, NewCampaign};

/// Handle campaign commands.
pub async fn handle_campaign_command(
    state: &AppState,
    cmd: CampaignCommands,
) -> anyhow::Result<()> {
    let store = state.store();
    match cmd {
        CampaignCommands::Create {
            name,
            goal,
            industries,
        } => {
            let campaign = store
                .create_campaign(&NewCampaign::new(name, goal).with_industries(&industries))
                .await?;
            println!("Created campaign {}: {}", campaign.id, campaign.name);
        }

        CampaignCommands::List { format } => {
            let campaigns = store.list_campaigns().await?;
            print_list(&campaigns, format, campaign_line)?;
        }

        CampaignCommands::Status { id, status } => {
            if !store.set_campaign_status(id, status).await? {
                bail!("campaign {} not found", id);
            }
            println!("Campaign {} is now {}", id, status);
        }

        CampaignCommands::Show { id, format } => {
            let Some(campaign) = store.get_campaign(id).await? else {
                bail!("campaign {} not found", id);
            };
            let content = store.get_content_by_campaign(id).await?;
            let view = CampaignWithContent { campaign, content };

            match format {
                OutputFormat::Json => print_json(&view)?,
                OutputFormat::Human => {
                    println!("{}", campaign_line(&view.campaign));
                    if !view.campaign.industries.is_empty() {
                        println!("  Industries: {}", view.campaign.industries.joined(", "));
                    }
                    println!("  Created: {}", view.campaign.created_at);
                    println!("{:-<80}", "");
                    for item in &view.content {
                        println!("{}", content_line(item));
                    }
                    println!("Total: {} items", view.content.len());
                }
            }
        }
    }
    Ok(())
}

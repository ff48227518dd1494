//! Command-line interface.
//!
//! Definitions live in `commands`; each command family has its own handler
//! module. Handlers print results to stdout and return errors to `main`.

mod analytics;
mod campaign;
mod commands;
mod content;
mod output;
mod persona;
mod publish;
mod schedule;

pub use analytics::handle_analytics_command;
pub use campaign::handle_campaign_command;
pub use commands::{
    AdaptCommands, AnalyticsCommands, CampaignCommands, Cli, Commands, ContentCommands,
    GenerateArgs, OutputFormat, PersonaCommands, PublishCommands, ScheduleCommands,
};
pub use content::{handle_adapt_command, handle_content_command, handle_generate};
pub use persona::handle_persona_command;
pub use publish::handle_publish_command;
pub use schedule::{handle_schedule_command, parse_schedule_time};

use crate::AppState;

/// Run one parsed command against `state`.
pub async fn execute(state: &AppState, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Persona(cmd) => handle_persona_command(state, cmd).await,
        Commands::Campaign(cmd) => handle_campaign_command(state, cmd).await,
        Commands::Generate(args) => handle_generate(state, args).await,
        Commands::Adapt(cmd) => handle_adapt_command(state, cmd).await,
        Commands::Content(cmd) => handle_content_command(state, cmd).await,
        Commands::Publish(cmd) => handle_publish_command(state, cmd).await,
        Commands::Schedule(cmd) => handle_schedule_command(state, cmd).await,
        Commands::Analytics(cmd) => handle_analytics_command(state, cmd).await,
    }
}

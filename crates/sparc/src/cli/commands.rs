//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use sparc_core::{
    CampaignStatus, ContentStyle, ContentType, ExperienceLevel, MetricKind, Platform,
    ReportingPeriod, TechnicalProficiency, Tone,
};
use std::path::PathBuf;

/// S.P.A.R.C. - generate, adapt and track marketing campaign content
#[derive(Parser, Debug)]
#[command(name = "sparc")]
#[command(about = "Generate, adapt and track marketing campaign content", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file to use instead of the default search path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Audience persona management
    #[command(subcommand)]
    Persona(PersonaCommands),

    /// Campaign management
    #[command(subcommand)]
    Campaign(CampaignCommands),

    /// Generate canonical content for a campaign and persona
    Generate(GenerateArgs),

    /// Produce a channel variant of stored content
    #[command(subcommand)]
    Adapt(AdaptCommands),

    /// Inspect and edit stored content
    #[command(subcommand)]
    Content(ContentCommands),

    /// Deliver stored content
    #[command(subcommand)]
    Publish(PublishCommands),

    /// Passive schedule records
    #[command(subcommand)]
    Schedule(ScheduleCommands),

    /// Descriptive campaign analytics
    #[command(subcommand)]
    Analytics(AnalyticsCommands),
}

/// Persona subcommands
#[derive(Subcommand, Debug)]
pub enum PersonaCommands {
    /// Create a persona
    Create {
        /// Display name
        #[arg(long)]
        name: String,

        /// Comma-separated role labels
        #[arg(long)]
        roles: String,

        /// Experience level (entry, mid, senior, lead)
        #[arg(long)]
        experience: Option<ExperienceLevel>,

        /// Technical proficiency (basic, intermediate, advanced, expert)
        #[arg(long)]
        proficiency: Option<TechnicalProficiency>,

        /// Comma-separated content styles
        #[arg(long, value_delimiter = ',')]
        styles: Vec<ContentStyle>,

        /// Free-text pain points
        #[arg(long)]
        pain_points: Option<String>,
    },

    /// List personas, newest first
    List {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Change persona fields
    Update {
        /// Persona ID
        id: i32,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// Replacement comma-separated role labels
        #[arg(long)]
        roles: Option<String>,

        /// New experience level
        #[arg(long)]
        experience: Option<ExperienceLevel>,

        /// New technical proficiency
        #[arg(long)]
        proficiency: Option<TechnicalProficiency>,

        /// Replacement comma-separated content styles
        #[arg(long, value_delimiter = ',')]
        styles: Option<Vec<ContentStyle>>,

        /// New pain points
        #[arg(long)]
        pain_points: Option<String>,
    },

    /// Delete a persona no content refers to
    Delete {
        /// Persona ID
        id: i32,
    },
}

/// Campaign subcommands
#[derive(Subcommand, Debug)]
pub enum CampaignCommands {
    /// Create a campaign
    Create {
        /// Display name
        #[arg(long)]
        name: String,

        /// What the campaign should achieve
        #[arg(long)]
        goal: String,

        /// Comma-separated target industries
        #[arg(long, default_value = "")]
        industries: String,
    },

    /// List campaigns, newest first
    List {
        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Set a campaign's status
    Status {
        /// Campaign ID
        id: i32,

        /// New status (draft, active, completed)
        status: CampaignStatus,
    },

    /// Show a campaign with its content
    Show {
        /// Campaign ID
        id: i32,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Arguments for `generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Campaign ID
    #[arg(long)]
    pub campaign: i32,

    /// Persona ID
    #[arg(long)]
    pub persona: i32,

    /// Content type (leadership, deep-dive, customer-story, documentation, social-post, email-newsletter)
    #[arg(long)]
    pub content_type: ContentType,

    /// Tone (technical, professional, conversational, casual)
    #[arg(long)]
    pub tone: Tone,

    /// Comma-separated hashtags
    #[arg(long, default_value = "")]
    pub hashtags: String,

    /// Comma-separated keywords
    #[arg(long, default_value = "")]
    pub keywords: String,
}

/// Adaptation subcommands
#[derive(Subcommand, Debug)]
pub enum AdaptCommands {
    /// Rewrite as a short-form post
    Twitter {
        /// Content ID
        content_id: i32,

        /// Character limit (defaults to the configured limit)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Rewrite as an email
    Email {
        /// Content ID
        content_id: i32,

        /// Subject to use instead of the generated one
        #[arg(long)]
        subject: Option<String>,
    },
}

/// Content subcommands
#[derive(Subcommand, Debug)]
pub enum ContentCommands {
    /// Show one content row with its variants
    Show {
        /// Content ID
        id: i32,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// List a campaign's content, newest first
    List {
        /// Campaign ID
        #[arg(long)]
        campaign: i32,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Manually overwrite content fields
    Edit {
        /// Content ID
        id: i32,

        /// Replacement canonical body
        #[arg(long)]
        body: Option<String>,

        /// Replacement comma-separated hashtags
        #[arg(long)]
        hashtags: Option<String>,

        /// Replacement comma-separated keywords
        #[arg(long)]
        keywords: Option<String>,

        /// Replacement short-form variant
        #[arg(long)]
        twitter: Option<String>,

        /// Replacement email subject
        #[arg(long)]
        email_subject: Option<String>,

        /// Replacement email body
        #[arg(long)]
        email_body: Option<String>,
    },
}

/// Delivery subcommands
#[derive(Subcommand, Debug)]
pub enum PublishCommands {
    /// Post the short-form variant to Twitter
    Twitter {
        /// Content ID
        content_id: i32,
    },

    /// Email the email variant
    Email {
        /// Content ID
        content_id: i32,

        /// Recipient addresses (repeat or comma-separate)
        #[arg(long = "to", value_delimiter = ',', required = true)]
        to: Vec<String>,
    },
}

/// Schedule subcommands
#[derive(Subcommand, Debug)]
pub enum ScheduleCommands {
    /// Record one pending entry per platform
    Create {
        /// Campaign ID
        #[arg(long)]
        campaign: i32,

        /// Content ID
        #[arg(long)]
        content: i32,

        /// Comma-separated platforms (twitter, email, linkedin, blog)
        #[arg(long, value_delimiter = ',', required = true)]
        platforms: Vec<Platform>,

        /// UTC time, e.g. "2026-03-01 09:30"
        #[arg(long)]
        at: String,
    },

    /// List entries by scheduled time
    List {
        /// Only this campaign
        #[arg(long)]
        campaign: Option<i32>,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Cancel a pending entry
    Cancel {
        /// Schedule entry ID
        id: i32,
    },
}

/// Analytics subcommands
#[derive(Subcommand, Debug)]
pub enum AnalyticsCommands {
    /// Record a metric value
    Record {
        /// Campaign ID
        #[arg(long)]
        campaign: i32,

        /// Content ID the value belongs to
        #[arg(long)]
        content: Option<i32>,

        /// Platform (twitter, email, linkedin, blog)
        #[arg(long)]
        platform: Platform,

        /// Metric (impressions, clicks, conversions, roi)
        #[arg(long)]
        metric: MetricKind,

        /// Value
        #[arg(long)]
        value: f64,
    },

    /// Aggregate metrics over a period
    Summary {
        /// Only this campaign
        #[arg(long)]
        campaign: Option<i32>,

        /// Only this platform
        #[arg(long)]
        platform: Option<Platform>,

        /// Period (7d, 30d, all)
        #[arg(long, default_value = "30d")]
        period: ReportingPeriod,

        /// Output format
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}

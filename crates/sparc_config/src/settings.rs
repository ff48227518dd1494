//! Non-secret settings.

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use sparc_error::{ConfigError, SparcError, SparcResult};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../sparc.toml");

/// Generation endpoint settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Azure deployment name
    pub deployment: String,
    /// `api-version` query parameter
    pub api_version: String,
    /// Default output token budget
    pub max_tokens: u32,
    /// Default sampling temperature
    pub temperature: f32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// System message sent with every generation
    pub system_prompt: String,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            deployment: "gpt-4".to_string(),
            api_version: "2024-02-15-preview".to_string(),
            max_tokens: 1000,
            temperature: 0.7,
            timeout_secs: 30,
            system_prompt: "You are an expert marketing content creator.".to_string(),
        }
    }
}

/// How email subjects are recovered from model output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailFormatMode {
    /// Scan for a line starting with "Subject:"
    #[default]
    SubjectLine,
    /// Ask for a `{"subject", "body"}` JSON object
    Json,
}

/// Channel adaptation settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChannelSettings {
    /// Character ceiling for short-form posts
    pub short_form_limit: usize,
    /// Subject used when none can be recovered
    pub default_email_subject: String,
    /// Subject recovery strategy
    pub email_format: EmailFormatMode,
}

impl Default for ChannelSettings {
    fn default() -> Self {
        Self {
            short_form_limit: 280,
            default_email_subject: "New Campaign Update".to_string(),
            email_format: EmailFormatMode::SubjectLine,
        }
    }
}

/// SMTP relay settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EmailSettings {
    /// Relay host
    pub smtp_server: String,
    /// Relay port (STARTTLS)
    pub smtp_port: u16,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            smtp_server: "smtp.gmail.com".to_string(),
            smtp_port: 587,
        }
    }
}

/// Social platform settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SocialSettings {
    /// Base URL of the posting API
    pub api_base_url: String,
    /// Prefix for public post links
    pub status_url_base: String,
}

impl Default for SocialSettings {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.twitter.com".to_string(),
            status_url_base: "https://twitter.com/user/status".to_string(),
        }
    }
}

/// Local store settings.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SQLite file path
    pub path: PathBuf,
    /// Maximum pooled connections
    pub pool_size: u32,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("campaign_craft.db"),
            pool_size: 4,
        }
    }
}

/// Top-level S.P.A.R.C. configuration.
///
/// # Example
///
/// ```no_run
/// use sparc_config::SparcConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = SparcConfig::load()?;
/// println!("Short-form limit: {}", config.channels.short_form_limit);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct SparcConfig {
    /// Generation endpoint settings
    #[serde(default)]
    pub generation: GenerationSettings,
    /// Channel adaptation settings
    #[serde(default)]
    pub channels: ChannelSettings,
    /// SMTP settings
    #[serde(default)]
    pub email: EmailSettings,
    /// Social platform settings
    #[serde(default)]
    pub social: SocialSettings,
    /// Local store settings
    #[serde(default)]
    pub database: DatabaseSettings,
}

impl SparcConfig {
    /// Load configuration with precedence: environment > current dir > home dir > bundled defaults.
    ///
    /// Sources in order (later sources override earlier):
    /// 1. Bundled defaults (`sparc.toml` shipped with the crate)
    /// 2. `~/.config/sparc/sparc.toml`
    /// 3. `./sparc.toml`
    /// 4. `SPARC__<SECTION>__<KEY>` environment variables
    ///
    /// Missing files are skipped.
    #[instrument]
    pub fn load() -> SparcResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/sparc/sparc.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("sparc").required(false))
            .add_source(
                Environment::with_prefix("SPARC")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::finish(builder)
    }

    /// Load bundled defaults overridden by a single file.
    ///
    /// Unlike [`load`](Self::load), the file must exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> SparcResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));

        Self::finish(builder)
    }

    /// Load bundled defaults overridden by TOML text.
    pub fn from_toml_str(toml: &str) -> SparcResult<Self> {
        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from_str(toml, FileFormat::Toml));

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> SparcResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                SparcError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                SparcError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no component can work with.
    pub fn validate(&self) -> SparcResult<()> {
        if self.channels.short_form_limit == 0 {
            return Err(ConfigError::new("channels.short_form_limit must be positive").into());
        }
        if self.generation.timeout_secs == 0 {
            return Err(ConfigError::new("generation.timeout_secs must be positive").into());
        }
        if !(0.0..=2.0).contains(&self.generation.temperature) {
            return Err(ConfigError::new(format!(
                "generation.temperature must be within 0.0..=2.0, got {}",
                self.generation.temperature
            ))
            .into());
        }
        Ok(())
    }
}

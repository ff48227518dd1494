//! Wiring from configuration to a ready pipeline.

use sparc_config::{GenerationCredentials, SmtpCredentials, SparcConfig, TwitterCredentials};
use sparc_content::{
    CampaignPipeline, CampaignTracker, ChannelAdapter, ContentGenerator, email_format_for,
};
use sparc_database::SqliteStore;
use sparc_error::{ConfigError, SparcResult};
use sparc_interface::{GenerationDriver, SparcStore};
use sparc_models::AzureOpenAiClient;
use sparc_social::{SmtpEmailSender, TwitterPublisher};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Shared application state: configuration, generation credentials and the
/// store.
///
/// Generation credentials are checked when the state is opened. Delivery
/// credentials are read only when a publisher or sender is requested.
#[derive(Clone)]
pub struct AppState {
    config: SparcConfig,
    store: Arc<dyn SparcStore>,
    credentials: Option<GenerationCredentials>,
    driver: Option<Arc<dyn GenerationDriver>>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field(
                "driver",
                &self.driver.as_ref().map(|d| d.provider_name()),
            )
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Read generation credentials from the environment and open the
    /// configured SQLite database.
    ///
    /// Fails with a configuration error when `AZURE_OPENAI_ENDPOINT` or
    /// `AZURE_OPENAI_API_KEY` is missing.
    pub fn open(config: SparcConfig) -> SparcResult<Self> {
        Self::open_with_credentials(config, GenerationCredentials::from_env()?)
    }

    /// Open the configured SQLite database with explicit credentials.
    #[instrument(skip_all, fields(path = %config.database.path.display()))]
    pub fn open_with_credentials(
        config: SparcConfig,
        credentials: GenerationCredentials,
    ) -> SparcResult<Self> {
        let store = SqliteStore::open(&config.database.path, config.database.pool_size)?;
        debug!("Store opened");
        Ok(Self::new(config, Arc::new(store)).with_credentials(credentials))
    }

    /// Use an existing store.
    pub fn new(config: SparcConfig, store: Arc<dyn SparcStore>) -> Self {
        Self {
            config,
            store,
            credentials: None,
            driver: None,
        }
    }

    /// Build the Azure OpenAI client from `credentials`.
    pub fn with_credentials(mut self, credentials: GenerationCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Use `driver` instead of the Azure OpenAI client.
    pub fn with_driver(mut self, driver: Arc<dyn GenerationDriver>) -> Self {
        self.driver = Some(driver);
        self
    }

    /// Loaded configuration.
    pub fn config(&self) -> &SparcConfig {
        &self.config
    }

    /// The store.
    pub fn store(&self) -> &Arc<dyn SparcStore> {
        &self.store
    }

    fn driver(&self) -> SparcResult<Arc<dyn GenerationDriver>> {
        if let Some(driver) = &self.driver {
            return Ok(driver.clone());
        }
        let credentials = self
            .credentials
            .as_ref()
            .ok_or_else(|| ConfigError::new("generation credentials were not provided"))?;
        let client = AzureOpenAiClient::from_config(credentials, &self.config.generation)?;
        Ok(Arc::new(client))
    }

    /// Build the generation pipeline.
    ///
    /// Fails with a configuration error when neither a driver nor generation
    /// credentials were supplied.
    pub fn pipeline(&self) -> SparcResult<CampaignPipeline> {
        let generator = ContentGenerator::new(self.driver()?, self.config.generation.clone());
        let adapter = ChannelAdapter::new(generator)
            .with_email_format(email_format_for(self.config.channels.email_format))
            .with_default_subject(self.config.channels.default_email_subject.clone());

        Ok(CampaignPipeline::new(
            adapter,
            self.store.clone(),
            self.config.channels.short_form_limit,
        ))
    }

    /// Scheduling and analytics over the store; never calls the model.
    pub fn tracker(&self) -> CampaignTracker {
        CampaignTracker::new(self.store.clone())
    }

    /// Twitter publisher from `TWITTER_BEARER_TOKEN`.
    pub fn twitter_publisher(&self) -> SparcResult<TwitterPublisher> {
        TwitterPublisher::from_config(&TwitterCredentials::from_env()?, &self.config.social)
    }

    /// SMTP sender from `SMTP_USERNAME` / `SMTP_PASSWORD`.
    pub fn email_sender(&self) -> SparcResult<SmtpEmailSender> {
        SmtpEmailSender::from_config(&SmtpCredentials::from_env()?, &self.config.email)
    }
}

//! Secrets read from the environment.
//!
//! Each type has a `from_env` constructor and a `from_lookup` constructor
//! taking any key lookup, so callers and tests never have to mutate the
//! process environment.

use sparc_error::{ConfigError, SparcResult};
use std::fmt;

fn required(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> SparcResult<String> {
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ConfigError::new(format!("{} environment variable not set", key)).into()),
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Azure OpenAI endpoint and key.
#[derive(Clone, PartialEq, Eq)]
pub struct GenerationCredentials {
    /// Resource endpoint, e.g. `https://my-resource.openai.azure.com`
    pub endpoint: String,
    /// `api-key` header value
    pub api_key: String,
}

impl GenerationCredentials {
    /// Read `AZURE_OPENAI_ENDPOINT` and `AZURE_OPENAI_API_KEY`.
    pub fn from_env() -> SparcResult<Self> {
        Self::from_lookup(env_lookup)
    }

    /// Read the same keys through `lookup`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sparc_config::GenerationCredentials;
    ///
    /// let creds = GenerationCredentials::from_lookup(|key| match key {
    ///     "AZURE_OPENAI_ENDPOINT" => Some("https://example.openai.azure.com/".into()),
    ///     "AZURE_OPENAI_API_KEY" => Some("secret".into()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(creds.endpoint, "https://example.openai.azure.com");
    /// assert!(!format!("{:?}", creds).contains("secret"));
    /// ```
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> SparcResult<Self> {
        let endpoint = required(&lookup, "AZURE_OPENAI_ENDPOINT")?;
        let api_key = required(&lookup, "AZURE_OPENAI_API_KEY")?;
        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

impl fmt::Debug for GenerationCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationCredentials")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// SMTP login.
#[derive(Clone, PartialEq, Eq)]
pub struct SmtpCredentials {
    /// Relay username
    pub username: String,
    /// Relay password
    pub password: String,
    /// From address; defaults to the username
    pub sender: String,
}

impl SmtpCredentials {
    /// Read `SMTP_USERNAME`, `SMTP_PASSWORD` and optional `SMTP_SENDER`.
    pub fn from_env() -> SparcResult<Self> {
        Self::from_lookup(env_lookup)
    }

    /// Read the same keys through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> SparcResult<Self> {
        let username = required(&lookup, "SMTP_USERNAME")?;
        let password = required(&lookup, "SMTP_PASSWORD")?;
        let sender = required(&lookup, "SMTP_SENDER").unwrap_or_else(|_| username.clone());
        Ok(Self {
            username,
            password,
            sender,
        })
    }
}

impl fmt::Debug for SmtpCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("sender", &self.sender)
            .finish()
    }
}

/// Bearer token for the social posting API.
#[derive(Clone, PartialEq, Eq)]
pub struct TwitterCredentials {
    /// OAuth 2.0 bearer token
    pub bearer_token: String,
}

impl TwitterCredentials {
    /// Read `TWITTER_BEARER_TOKEN`.
    pub fn from_env() -> SparcResult<Self> {
        Self::from_lookup(env_lookup)
    }

    /// Read the same key through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> SparcResult<Self> {
        Ok(Self {
            bearer_token: required(&lookup, "TWITTER_BEARER_TOKEN")?,
        })
    }
}

impl fmt::Debug for TwitterCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwitterCredentials")
            .field("bearer_token", &"[REDACTED]")
            .finish()
    }
}

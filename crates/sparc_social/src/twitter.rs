//! X/Twitter v2 publisher.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use sparc_config::{SocialSettings, TwitterCredentials};
use sparc_core::PostReceipt;
use sparc_error::{DeliveryError, DeliveryErrorKind, HttpError, SparcResult};
use sparc_interface::ShortFormPublisher;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct CreatePostRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreatePostResponse {
    data: CreatedPost,
}

#[derive(Debug, Deserialize)]
struct CreatedPost {
    id: String,
}

/// Posts to X/Twitter with an OAuth 2.0 bearer token.
#[derive(Clone)]
pub struct TwitterPublisher {
    client: Client,
    api_base_url: String,
    status_url_base: String,
    bearer_token: String,
}

impl std::fmt::Debug for TwitterPublisher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitterPublisher")
            .field("api_base_url", &self.api_base_url)
            .field("status_url_base", &self.status_url_base)
            .finish_non_exhaustive()
    }
}

impl TwitterPublisher {
    /// Creates a publisher from loaded credentials and settings.
    pub fn from_config(
        credentials: &TwitterCredentials,
        settings: &SocialSettings,
    ) -> SparcResult<Self> {
        Self::new(
            &settings.api_base_url,
            &settings.status_url_base,
            &credentials.bearer_token,
        )
    }

    /// Creates a publisher against an explicit API base.
    ///
    /// # Arguments
    ///
    /// * `api_base_url` - e.g. `https://api.twitter.com`
    /// * `status_url_base` - prefix for public links; the post id is appended
    /// * `bearer_token` - OAuth 2.0 user-context token
    pub fn new(
        api_base_url: &str,
        status_url_base: &str,
        bearer_token: &str,
    ) -> SparcResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            status_url_base: status_url_base.trim_end_matches('/').to_string(),
            bearer_token: bearer_token.to_string(),
        })
    }

    fn classify(status: StatusCode, body: String) -> DeliveryError {
        let kind = match status {
            StatusCode::FORBIDDEN if body.to_lowercase().contains("duplicate") => {
                DeliveryErrorKind::Duplicate
            }
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                DeliveryErrorKind::Authentication(body)
            }
            StatusCode::TOO_MANY_REQUESTS => DeliveryErrorKind::RateLimited(body),
            _ => DeliveryErrorKind::Rejected {
                status: status.as_u16(),
                message: body,
            },
        };
        DeliveryError::new(kind)
    }
}

#[async_trait::async_trait]
impl ShortFormPublisher for TwitterPublisher {
    #[instrument(skip(self, text), fields(platform = "twitter", chars = text.chars().count()))]
    async fn post_short_form(&self, text: &str) -> SparcResult<PostReceipt> {
        debug!("Posting to Twitter");
        let response = self
            .client
            .post(format!("{}/2/tweets", self.api_base_url))
            .bearer_auth(&self.bearer_token)
            .json(&CreatePostRequest { text })
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to reach Twitter");
                DeliveryError::new(DeliveryErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DeliveryError::new(DeliveryErrorKind::Transport(e.to_string())))?;

        if !status.is_success() {
            error!(status = %status, body = %body, "Twitter rejected post");
            return Err(Self::classify(status, body).into());
        }

        let created: CreatePostResponse = serde_json::from_str(&body).map_err(|e| {
            DeliveryError::new(DeliveryErrorKind::Transport(format!(
                "Unexpected response body: {}",
                e
            )))
        })?;

        let url = format!("{}/{}", self.status_url_base, created.data.id);
        info!(post_id = %created.data.id, url = %url, "Posted to Twitter");
        Ok(PostReceipt {
            id: created.data.id,
            url,
        })
    }

    fn platform_name(&self) -> &'static str {
        "twitter"
    }
}

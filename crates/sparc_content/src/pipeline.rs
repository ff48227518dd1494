//! Sequencing of generation, adaptation, storage and delivery.

use crate::{ChannelAdapter, PromptBuilder};
use sparc_core::{
    ContentType, ContentUpdate, EmailDraft, GeneratedContent, MetricKind, NewContent,
    NewMetricRecord, Platform, PostReceipt, TagSet, Tone,
};
use sparc_error::{
    InvalidArgumentError, ReferentialIntegrityError, SparcResult, StoreError,
};
use sparc_interface::{EmailSender, ShortFormPublisher, SparcStore};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Inputs for one canonical content generation.
#[derive(Debug, Clone, PartialEq, Eq, derive_builder::Builder)]
#[builder(setter(into))]
pub struct ContentRequest {
    /// Owning campaign; supplies the goal and industries
    pub campaign_id: i32,
    /// Target persona
    pub persona_id: i32,
    /// Kind of content
    pub content_type: ContentType,
    /// Voice
    pub tone: Tone,
    /// Hashtags stored with the content
    #[builder(default)]
    pub hashtags: TagSet,
    /// Keywords stored with the content
    #[builder(default)]
    pub keywords: TagSet,
}

impl ContentRequest {
    /// Creates a new builder.
    pub fn builder() -> ContentRequestBuilder {
        ContentRequestBuilder::default()
    }
}

/// Runs each user action to completion against the store.
///
/// Canonical bodies are written once, by [`generate`](Self::generate).
/// Adaptation writes only the variant fields, so adapting again never
/// disturbs the canonical artifact.
#[derive(Clone)]
pub struct CampaignPipeline {
    adapter: ChannelAdapter,
    store: Arc<dyn SparcStore>,
    short_form_limit: usize,
}

impl std::fmt::Debug for CampaignPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CampaignPipeline")
            .field("adapter", &self.adapter)
            .field("short_form_limit", &self.short_form_limit)
            .finish_non_exhaustive()
    }
}

impl CampaignPipeline {
    /// Create a pipeline over `store`.
    pub fn new(adapter: ChannelAdapter, store: Arc<dyn SparcStore>, short_form_limit: usize) -> Self {
        Self {
            adapter,
            store,
            short_form_limit,
        }
    }

    /// The store this pipeline writes to.
    pub fn store(&self) -> &Arc<dyn SparcStore> {
        &self.store
    }

    /// Default short-form ceiling.
    pub fn short_form_limit(&self) -> usize {
        self.short_form_limit
    }

    async fn require_content(&self, id: i32) -> SparcResult<GeneratedContent> {
        self.store
            .get_content(id)
            .await?
            .ok_or_else(|| StoreError::not_found("content", id).into())
    }

    async fn write_variant(&self, id: i32, update: &ContentUpdate) -> SparcResult<()> {
        if self.store.update_content(id, update).await? {
            Ok(())
        } else {
            Err(StoreError::not_found("content", id).into())
        }
    }

    /// Generate and store canonical content for a campaign and persona.
    ///
    /// Missing campaign or persona is a `ReferentialIntegrityError`, raised
    /// before any generation call.
    #[instrument(skip(self, request), fields(campaign_id = request.campaign_id, persona_id = request.persona_id))]
    pub async fn generate(&self, request: &ContentRequest) -> SparcResult<GeneratedContent> {
        let campaign = self
            .store
            .get_campaign(request.campaign_id)
            .await?
            .ok_or_else(|| {
                ReferentialIntegrityError::new("campaign", request.campaign_id, "does not exist")
            })?;
        let persona = self
            .store
            .get_persona(request.persona_id)
            .await?
            .ok_or_else(|| {
                ReferentialIntegrityError::new("persona", request.persona_id, "does not exist")
            })?;

        let prompt = PromptBuilder::new(
            &campaign.goal,
            &persona.profile,
            request.content_type,
            request.tone,
        )
        .with_industries(&campaign.industries)
        .build();
        let body = self.adapter.generator().generate_custom(&prompt).await?;

        let id = self
            .store
            .save_content(&NewContent {
                campaign_id: campaign.id,
                persona_id: persona.id,
                content_type: request.content_type,
                tone: request.tone,
                body,
                hashtags: request.hashtags.clone(),
                keywords: request.keywords.clone(),
            })
            .await?;
        info!(content_id = id, "Stored generated content");

        self.require_content(id).await
    }

    /// Produce and store the short-form variant of a content row.
    #[instrument(skip(self))]
    pub async fn adapt_short_form(&self, content_id: i32, limit: Option<usize>) -> SparcResult<String> {
        let content = self.require_content(content_id).await?;
        let limit = limit.unwrap_or(self.short_form_limit);
        let variant = self
            .adapter
            .adapt_for_short_form(&content.body, &content.hashtags, limit)
            .await?;

        self.write_variant(
            content_id,
            &ContentUpdate::default().with_twitter_variant(variant.clone()),
        )
        .await?;
        Ok(variant)
    }

    /// Produce and store the email variant of a content row.
    #[instrument(skip(self))]
    pub async fn adapt_email(
        &self,
        content_id: i32,
        subject_hint: Option<&str>,
    ) -> SparcResult<EmailDraft> {
        let content = self.require_content(content_id).await?;
        let draft = self.adapter.adapt_for_email(&content.body, subject_hint).await?;

        self.write_variant(
            content_id,
            &ContentUpdate::default()
                .with_email_subject(draft.subject.clone())
                .with_email_body(draft.body.clone()),
        )
        .await?;
        Ok(draft)
    }

    /// Post the stored short-form variant, adapting first if there is none.
    ///
    /// Stores the post link and seeds zero-valued metrics for the post.
    #[instrument(skip(self, publisher), fields(platform = publisher.platform_name()))]
    pub async fn publish_short_form(
        &self,
        content_id: i32,
        publisher: &dyn ShortFormPublisher,
    ) -> SparcResult<PostReceipt> {
        let content = self.require_content(content_id).await?;
        let text = match content.twitter_variant {
            Some(variant) if !variant.trim().is_empty() => variant,
            _ => {
                debug!("No short-form variant stored, adapting first");
                self.adapt_short_form(content_id, None).await?
            }
        };

        let receipt = publisher.post_short_form(&text).await?;
        info!(post_id = %receipt.id, url = %receipt.url, "Published short-form post");

        self.write_variant(
            content_id,
            &ContentUpdate::default().with_external_post_url(receipt.url.clone()),
        )
        .await?;

        for metric in [
            MetricKind::Impressions,
            MetricKind::Clicks,
            MetricKind::Conversions,
            MetricKind::Roi,
        ] {
            self.store
                .record_metric(&NewMetricRecord {
                    campaign_id: content.campaign_id,
                    content_id: Some(content_id),
                    platform: Platform::Twitter,
                    metric,
                    value: 0.0,
                })
                .await?;
        }

        Ok(receipt)
    }

    /// Email the stored email variant, adapting first if there is none.
    #[instrument(skip(self, recipients, sender), fields(recipients = recipients.len()))]
    pub async fn send_email(
        &self,
        content_id: i32,
        recipients: &[String],
        sender: &dyn EmailSender,
    ) -> SparcResult<EmailDraft> {
        if recipients.is_empty() {
            return Err(InvalidArgumentError::new("at least one recipient is required").into());
        }

        let content = self.require_content(content_id).await?;
        let draft = match (content.email_subject, content.email_body) {
            (Some(subject), Some(body)) if !body.trim().is_empty() => EmailDraft { subject, body },
            _ => {
                debug!("No email variant stored, adapting first");
                self.adapt_email(content_id, None).await?
            }
        };

        sender
            .send_email(recipients, &draft.subject, &draft.body)
            .await?;
        info!(subject = %draft.subject, "Sent campaign email");
        Ok(draft)
    }
}

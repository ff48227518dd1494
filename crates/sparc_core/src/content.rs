//! Generated content and its channel variants.

use crate::TagSet;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Kind of content to generate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Thought leadership pieces
    #[strum(to_string = "Leadership Content", serialize = "leadership")]
    LeadershipContent,
    /// Feature and product explainers
    #[strum(to_string = "Product Deep Dives", serialize = "deep-dive")]
    ProductDeepDive,
    /// Customer success narratives
    #[strum(to_string = "Customer Stories", serialize = "customer-story")]
    CustomerStory,
    /// Reference and how-to material
    #[strum(to_string = "Technical Documentation", serialize = "documentation")]
    TechnicalDocumentation,
    /// Short social post
    #[strum(to_string = "Social Media Post", serialize = "social-post")]
    SocialMediaPost,
    /// Newsletter email
    #[strum(to_string = "Email Newsletter", serialize = "email-newsletter")]
    EmailNewsletter,
}

/// Voice of the generated content.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Precise and detailed
    Technical,
    /// Polished business voice
    Professional,
    /// Friendly and direct
    Conversational,
    /// Relaxed
    Casual,
}

/// Fields written when content is first generated.
///
/// # Examples
///
/// ```
/// use sparc_core::{NewContent, ContentType, Tone, TagSet};
///
/// let content = NewContent::builder()
///     .campaign_id(1)
///     .persona_id(2)
///     .content_type(ContentType::CustomerStory)
///     .tone(Tone::Professional)
///     .body("How Acme cut pipeline costs in half")
///     .hashtags(TagSet::from_csv("#Data"))
///     .build()
///     .unwrap();
///
/// assert_eq!(content.keywords, TagSet::new());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct NewContent {
    /// Owning campaign
    pub campaign_id: i32,
    /// Target persona
    pub persona_id: i32,
    /// Kind of content
    pub content_type: ContentType,
    /// Voice
    pub tone: Tone,
    /// Canonical, channel-neutral text
    pub body: String,
    /// Hashtags to weave into channel variants
    #[builder(default)]
    pub hashtags: TagSet,
    /// Search keywords
    #[builder(default)]
    pub keywords: TagSet,
}

impl NewContent {
    /// Creates a new builder.
    pub fn builder() -> NewContentBuilder {
        NewContentBuilder::default()
    }
}

/// A stored content row.
///
/// `body` is the canonical artifact. Channel adaptation only ever writes the
/// variant fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedContent {
    /// Primary key
    pub id: i32,
    /// Owning campaign
    pub campaign_id: i32,
    /// Target persona
    pub persona_id: i32,
    /// Kind of content
    pub content_type: ContentType,
    /// Voice
    pub tone: Tone,
    /// Canonical, channel-neutral text
    pub body: String,
    /// Hashtags
    pub hashtags: TagSet,
    /// Keywords
    pub keywords: TagSet,
    /// Short-form social variant
    pub twitter_variant: Option<String>,
    /// Email subject line
    pub email_subject: Option<String>,
    /// Email body
    pub email_body: Option<String>,
    /// Link to the published post
    pub external_post_url: Option<String>,
    /// When the row was created (UTC)
    pub created_at: NaiveDateTime,
    /// When the row was last changed (UTC)
    pub updated_at: NaiveDateTime,
}

/// Partial content edit; `None` fields are left untouched.
///
/// # Examples
///
/// ```
/// use sparc_core::ContentUpdate;
///
/// let update = ContentUpdate::default()
///     .with_email_subject("Q1 Update".to_string())
///     .with_email_body("Hello team...".to_string());
/// assert!(update.body.is_none());
/// assert!(!update.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", strip_option)]
pub struct ContentUpdate {
    /// Replacement canonical body (manual edits only)
    pub body: Option<String>,
    /// Replacement hashtags
    pub hashtags: Option<TagSet>,
    /// Replacement keywords
    pub keywords: Option<TagSet>,
    /// Short-form social variant
    pub twitter_variant: Option<String>,
    /// Email subject line
    pub email_subject: Option<String>,
    /// Email body
    pub email_body: Option<String>,
    /// Link to the published post
    pub external_post_url: Option<String>,
}

impl ContentUpdate {
    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self.body.is_none()
            && self.hashtags.is_none()
            && self.keywords.is_none()
            && self.twitter_variant.is_none()
            && self.email_subject.is_none()
            && self.email_body.is_none()
            && self.external_post_url.is_none()
    }

    /// Apply the set fields to a stored row, bumping `updated_at`.
    pub fn apply_to(&self, content: &mut GeneratedContent, now: NaiveDateTime) {
        if let Some(body) = &self.body {
            content.body = body.clone();
        }
        if let Some(hashtags) = &self.hashtags {
            content.hashtags = hashtags.clone();
        }
        if let Some(keywords) = &self.keywords {
            content.keywords = keywords.clone();
        }
        if let Some(variant) = &self.twitter_variant {
            content.twitter_variant = Some(variant.clone());
        }
        if let Some(subject) = &self.email_subject {
            content.email_subject = Some(subject.clone());
        }
        if let Some(body) = &self.email_body {
            content.email_body = Some(body.clone());
        }
        if let Some(url) = &self.external_post_url {
            content.external_post_url = Some(url.clone());
        }
        content.updated_at = now;
    }
}

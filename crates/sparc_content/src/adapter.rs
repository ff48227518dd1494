//! Channel adaptation of canonical content.

use crate::{ContentGenerator, EmailFormat, SubjectLineFormat};
use sparc_core::{EmailDraft, TagSet};
use sparc_error::{InvalidArgumentError, SparcResult};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Default character ceiling for short-form posts.
pub const DEFAULT_SHORT_FORM_LIMIT: usize = 280;

/// Default subject when none is given or recovered.
pub const DEFAULT_EMAIL_SUBJECT: &str = "New Campaign Update";

/// Reshapes canonical content for a channel.
///
/// Every adaptation is a fresh generation round-trip. The adapter never
/// touches stored content; it only returns the variant.
#[derive(Debug, Clone)]
pub struct ChannelAdapter {
    generator: ContentGenerator,
    email_format: Arc<dyn EmailFormat>,
    default_subject: String,
}

impl ChannelAdapter {
    /// Adapter using the subject-line email strategy.
    pub fn new(generator: ContentGenerator) -> Self {
        Self {
            generator,
            email_format: Arc::new(SubjectLineFormat),
            default_subject: DEFAULT_EMAIL_SUBJECT.to_string(),
        }
    }

    /// Replace the email strategy.
    pub fn with_email_format(mut self, format: Arc<dyn EmailFormat>) -> Self {
        self.email_format = format;
        self
    }

    /// The generator used for every adaptation call.
    pub fn generator(&self) -> &ContentGenerator {
        &self.generator
    }

    /// Replace the fallback subject.
    pub fn with_default_subject(mut self, subject: impl Into<String>) -> Self {
        self.default_subject = subject.into();
        self
    }

    /// Rewrite `body` as a post of at most `limit` characters.
    ///
    /// Makes one generation call, plus one escalation call when the first
    /// result is still over the limit. The result is then cut to `limit`
    /// characters regardless, so the ceiling always holds.
    ///
    /// # Errors
    ///
    /// `InvalidArgumentError` when `limit` is zero, before any call is made.
    /// A failed generation call is returned as-is.
    #[instrument(skip(self, body, tags), fields(body_chars = body.chars().count(), tags = tags.len()))]
    pub async fn adapt_for_short_form(
        &self,
        body: &str,
        tags: &TagSet,
        limit: usize,
    ) -> SparcResult<String> {
        if limit == 0 {
            return Err(InvalidArgumentError::new("short-form limit must be positive").into());
        }

        let draft = self
            .generator
            .generate_custom(&short_form_instruction(body, tags, limit))
            .await?;
        let length = draft.chars().count();

        let text = if length > limit {
            warn!(length, limit, "Short-form draft over limit, asking for a shorter one");
            self.generator
                .generate_custom(&escalation_instruction(&draft, length, tags, limit))
                .await?
        } else {
            draft
        };

        let fitted = truncate_chars(&text, limit);
        debug!(chars = fitted.chars().count(), "Short-form variant ready");
        Ok(fitted)
    }

    /// Rewrite `body` as a professional email.
    ///
    /// The subject is `subject_hint` when it is non-blank, else whatever the
    /// email strategy recovers, else the configured default.
    #[instrument(skip(self, body), fields(body_chars = body.chars().count()))]
    pub async fn adapt_for_email(
        &self,
        body: &str,
        subject_hint: Option<&str>,
    ) -> SparcResult<EmailDraft> {
        let response = self
            .generator
            .generate_custom(&self.email_format.instruction(body))
            .await?;
        let parsed = self.email_format.parse(&response);

        let subject = subject_hint
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .or(parsed.subject)
            .unwrap_or_else(|| {
                debug!("No subject recovered, using default");
                self.default_subject.clone()
            });

        Ok(EmailDraft {
            subject,
            body: parsed.body,
        })
    }
}

fn short_form_instruction(body: &str, tags: &TagSet, limit: usize) -> String {
    format!(
        "Rewrite the following content for Twitter (max {limit} characters).\n\
         Make it engaging and concise. Include these hashtags where appropriate: {}\n\n\
         Original content:\n{body}",
        tags.joined(" ")
    )
}

fn escalation_instruction(draft: &str, length: usize, tags: &TagSet, limit: usize) -> String {
    format!(
        "The following content is too long for Twitter ({length} chars).\n\
         Please shorten it to under {limit} characters while maintaining the key message. \
         Include these hashtags if space permits: {}\n\n\
         Content:\n{draft}",
        tags.joined(" ")
    )
}

/// First `limit` characters of `text`, without trailing whitespace.
fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => text[..end].trim_end().to_string(),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let text = "héllo wörld";
        assert_eq!(truncate_chars(text, 5), "héllo");
        assert_eq!(truncate_chars(text, 50), text);
    }

    #[test]
    fn truncation_drops_dangling_whitespace() {
        assert_eq!(truncate_chars("one two", 4), "one");
    }

    #[test]
    fn instructions_quote_limit_and_tags() {
        let tags = TagSet::from_csv("#AI,#Data");
        let first = short_form_instruction("body", &tags, 280);
        assert!(first.contains("max 280 characters"));
        assert!(first.contains("#AI #Data"));

        let second = escalation_instruction("long draft", 310, &tags, 280);
        assert!(second.contains("(310 chars)"));
        assert!(second.contains("under 280 characters"));
        assert!(second.ends_with("long draft"));
    }
}

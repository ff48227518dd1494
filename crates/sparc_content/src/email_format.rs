//! How email subjects are requested from and recovered out of model output.

use serde::Deserialize;
use sparc_config::EmailFormatMode;
use std::sync::Arc;
use tracing::debug;

/// What could be recovered from an email response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEmail {
    /// Subject, when one was found
    pub subject: Option<String>,
    /// Email text
    pub body: String,
}

/// Strategy for requesting an email and splitting the reply.
///
/// Recovery is best effort. Failing to find a subject is not an error; the
/// caller substitutes its default.
pub trait EmailFormat: Send + Sync + std::fmt::Debug {
    /// Instruction asking the model to rewrite `content` as an email.
    fn instruction(&self, content: &str) -> String;

    /// Split a model reply into subject and body.
    fn parse(&self, response: &str) -> ParsedEmail;
}

/// Asks for a free-form email and scans for a `Subject:` line.
///
/// # Examples
///
/// ```
/// use sparc_content::{EmailFormat, SubjectLineFormat};
///
/// let parsed = SubjectLineFormat.parse("Subject: Q1 Update\nHello team...");
/// assert_eq!(parsed.subject.as_deref(), Some("Q1 Update"));
/// assert_eq!(parsed.body, "Subject: Q1 Update\nHello team...");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectLineFormat;

impl EmailFormat for SubjectLineFormat {
    fn instruction(&self, content: &str) -> String {
        format!(
            "Rewrite the following content as a professional email.\n\
             Include a subject line, greeting, body, and signature.\n\
             Make it engaging and professional.\n\n\
             Original content:\n{}",
            content
        )
    }

    fn parse(&self, response: &str) -> ParsedEmail {
        let subject = response
            .lines()
            .find_map(|line| line.trim_start().strip_prefix("Subject:"))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        ParsedEmail {
            subject,
            body: response.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct JsonEmail {
    subject: String,
    body: String,
}

/// Asks for a `{"subject": ..., "body": ...}` object.
///
/// Replies that are not valid JSON fall back to [`SubjectLineFormat`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEmailFormat;

impl JsonEmailFormat {
    fn strip_fence(response: &str) -> &str {
        let trimmed = response.trim();
        let Some(inner) = trimmed.strip_prefix("```") else {
            return trimmed;
        };
        let inner = inner.strip_prefix("json").unwrap_or(inner);
        inner.strip_suffix("```").unwrap_or(inner).trim()
    }
}

impl EmailFormat for JsonEmailFormat {
    fn instruction(&self, content: &str) -> String {
        format!(
            "Rewrite the following content as a professional email with a greeting, body, \
             and signature. Respond with only a JSON object of the form \
             {{\"subject\": \"...\", \"body\": \"...\"}} and no other text.\n\n\
             Original content:\n{}",
            content
        )
    }

    fn parse(&self, response: &str) -> ParsedEmail {
        match serde_json::from_str::<JsonEmail>(Self::strip_fence(response)) {
            Ok(email) => {
                let subject = Some(email.subject.trim().to_string()).filter(|s| !s.is_empty());
                ParsedEmail {
                    subject,
                    body: email.body,
                }
            }
            Err(e) => {
                debug!(error = %e, "Email reply was not JSON, scanning for subject line");
                SubjectLineFormat.parse(response)
            }
        }
    }
}

/// The strategy named by configuration.
pub fn email_format_for(mode: EmailFormatMode) -> Arc<dyn EmailFormat> {
    match mode {
        EmailFormatMode::SubjectLine => Arc::new(SubjectLineFormat),
        EmailFormatMode::Json => Arc::new(JsonEmailFormat),
    }
}

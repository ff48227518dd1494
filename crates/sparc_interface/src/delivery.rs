//! Delivery channel traits.
//!
//! Both are thin single-attempt wrappers over third-party transport. Failures
//! are classified into `DeliveryError` kinds and returned; nothing retries.

use async_trait::async_trait;
use sparc_core::PostReceipt;
use sparc_error::SparcResult;

/// Posts short-form text to a social platform.
#[async_trait]
pub trait ShortFormPublisher: Send + Sync {
    /// Publish `text` and return where it landed.
    async fn post_short_form(&self, text: &str) -> SparcResult<PostReceipt>;

    /// Platform name for logs (e.g., "twitter").
    fn platform_name(&self) -> &'static str;
}

/// Sends email to a list of recipients.
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Send one message to every address in `recipients`.
    ///
    /// An empty recipient list is an `InvalidArgumentError`.
    async fn send_email(&self, recipients: &[String], subject: &str, body: &str)
    -> SparcResult<()>;
}

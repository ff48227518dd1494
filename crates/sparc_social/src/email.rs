//! SMTP email delivery.

use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use sparc_config::{EmailSettings, SmtpCredentials};
use sparc_error::{DeliveryError, DeliveryErrorKind, InvalidArgumentError, SparcResult};
use sparc_interface::EmailSender;
use tracing::{error, info, instrument};

fn mailbox(address: &str) -> Result<Mailbox, DeliveryError> {
    address.trim().parse::<Mailbox>().map_err(|e| {
        DeliveryError::new(DeliveryErrorKind::InvalidAddress(format!(
            "{}: {}",
            address, e
        )))
    })
}

/// Builds the HTML message sent to every recipient.
///
/// All recipients go in the `To` header of a single message.
pub fn build_message(
    sender: &str,
    recipients: &[String],
    subject: &str,
    body: &str,
) -> SparcResult<Message> {
    if recipients.is_empty() {
        return Err(InvalidArgumentError::new("at least one recipient is required").into());
    }

    let mut builder = Message::builder().from(mailbox(sender)?).subject(subject);
    for recipient in recipients {
        builder = builder.to(mailbox(recipient)?);
    }

    builder
        .header(ContentType::TEXT_HTML)
        .body(body.to_string())
        .map_err(|e| DeliveryError::new(DeliveryErrorKind::InvalidAddress(e.to_string())).into())
}

/// Sends email through an authenticated STARTTLS relay.
#[derive(Clone)]
pub struct SmtpEmailSender {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: String,
}

impl std::fmt::Debug for SmtpEmailSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpEmailSender")
            .field("sender", &self.sender)
            .finish_non_exhaustive()
    }
}

impl SmtpEmailSender {
    /// Creates a sender for the configured relay.
    #[instrument(skip(credentials), fields(server = %settings.smtp_server, port = settings.smtp_port))]
    pub fn from_config(credentials: &SmtpCredentials, settings: &EmailSettings) -> SparcResult<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.smtp_server)
            .map_err(|e| DeliveryError::new(DeliveryErrorKind::Transport(e.to_string())))?
            .port(settings.smtp_port)
            .credentials(Credentials::new(
                credentials.username.clone(),
                credentials.password.clone(),
            ))
            .build();

        Ok(Self {
            transport,
            sender: credentials.sender.clone(),
        })
    }

    fn classify(err: lettre::transport::smtp::Error) -> DeliveryError {
        let code = err
            .status()
            .and_then(|code| code.to_string().parse::<u16>().ok());
        let kind = match code {
            Some(530 | 534 | 535) => DeliveryErrorKind::Authentication(err.to_string()),
            Some(421 | 450 | 451 | 452) => DeliveryErrorKind::RateLimited(err.to_string()),
            Some(status) if err.is_permanent() => DeliveryErrorKind::Rejected {
                status,
                message: err.to_string(),
            },
            _ => DeliveryErrorKind::Transport(err.to_string()),
        };
        DeliveryError::new(kind)
    }
}

#[async_trait::async_trait]
impl EmailSender for SmtpEmailSender {
    #[instrument(skip(self, body), fields(recipients = recipients.len(), subject = %subject))]
    async fn send_email(&self, recipients: &[String], subject: &str, body: &str) -> SparcResult<()> {
        let message = build_message(&self.sender, recipients, subject, body)?;

        self.transport.send(message).await.map_err(|e| {
            error!(error = %e, "SMTP delivery failed");
            Self::classify(e)
        })?;

        info!("Email sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sparc_error::SparcErrorKind;

    fn recipients(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn message_lists_every_recipient() {
        let message = build_message(
            "news@example.com",
            &recipients(&["a@example.com", "b@example.com"]),
            "Launch day",
            "<p>Hello</p>",
        )
        .unwrap();

        let raw = String::from_utf8(message.formatted()).unwrap();
        assert!(raw.contains("a@example.com"));
        assert!(raw.contains("b@example.com"));
        assert!(raw.contains("Subject: Launch day"));
        assert!(raw.contains("text/html"));
    }

    #[test]
    fn empty_recipients_is_invalid_argument() {
        let err = build_message("news@example.com", &[], "Subject", "Body").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn malformed_recipient_is_invalid_address() {
        let err = build_message(
            "news@example.com",
            &recipients(&["not an address"]),
            "Subject",
            "Body",
        )
        .unwrap_err();
        assert!(matches!(
            err.kind(),
            SparcErrorKind::Delivery(e) if matches!(e.kind, DeliveryErrorKind::InvalidAddress(_))
        ));
    }

    #[test]
    fn malformed_sender_is_invalid_address() {
        let err = build_message("", &recipients(&["a@example.com"]), "Subject", "Body")
            .unwrap_err();
        assert!(matches!(
            err.kind(),
            SparcErrorKind::Delivery(e) if matches!(e.kind, DeliveryErrorKind::InvalidAddress(_))
        ));
    }
}

//! Mock delivery channels for testing.

use async_trait::async_trait;
use sparc_core::PostReceipt;
use sparc_error::{DeliveryError, DeliveryErrorKind, SparcResult};
use sparc_interface::{EmailSender, ShortFormPublisher};
use std::sync::{Arc, Mutex};

/// Publisher that records posted text.
#[derive(Clone, Default)]
pub struct MockPublisher {
    posts: Arc<Mutex<Vec<String>>>,
    fail_with: Option<DeliveryErrorKind>,
}

#[allow(dead_code)]
impl MockPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(kind: DeliveryErrorKind) -> Self {
        Self {
            fail_with: Some(kind),
            ..Self::default()
        }
    }

    pub fn posts(&self) -> Vec<String> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ShortFormPublisher for MockPublisher {
    async fn post_short_form(&self, text: &str) -> SparcResult<PostReceipt> {
        if let Some(kind) = &self.fail_with {
            return Err(DeliveryError::new(kind.clone()).into());
        }
        let mut posts = self.posts.lock().unwrap();
        posts.push(text.to_string());
        let id = format!("{}", 1000 + posts.len());
        Ok(PostReceipt {
            url: format!("https://twitter.com/user/status/{}", id),
            id,
        })
    }

    fn platform_name(&self) -> &'static str {
        "mock"
    }
}

/// Email sender that records sent messages.
#[derive(Clone, Default)]
pub struct MockEmailSender {
    sent: Arc<Mutex<Vec<(Vec<String>, String, String)>>>,
}

#[allow(dead_code)]
impl MockEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(Vec<String>, String, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for MockEmailSender {
    async fn send_email(&self, recipients: &[String], subject: &str, body: &str) -> SparcResult<()> {
        self.sent
            .lock()
            .unwrap()
            .push((recipients.to_vec(), subject.to_string(), body.to_string()));
        Ok(())
    }
}

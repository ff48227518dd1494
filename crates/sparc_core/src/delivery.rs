//! Channel-ready artifacts handed to delivery collaborators.

use serde::{Deserialize, Serialize};

/// An email produced from canonical content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailDraft {
    /// Subject line
    pub subject: String,
    /// Full email text
    pub body: String,
}

/// Where a short-form post landed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PostReceipt {
    /// Platform identifier of the post
    pub id: String,
    /// Public link to the post
    pub url: String,
}

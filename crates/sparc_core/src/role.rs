//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Sender of a message in a chat-completion request.
///
/// # Examples
///
/// ```
/// use sparc_core::Role;
///
/// assert_eq!(Role::System.as_wire(), "system");
/// assert_eq!(format!("{}", Role::User), "User");
/// ```
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
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions that frame the model's behavior
    System,
    /// The request content
    User,
    /// A previous model reply
    Assistant,
}

impl Role {
    /// Role name as chat-completion APIs spell it.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

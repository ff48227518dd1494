//! Delivery channel failures (social posting, email).

/// Why a delivery attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum DeliveryErrorKind {
    /// Credentials for the channel are missing or were rejected
    #[display("authentication failed: {}", _0)]
    Authentication(String),
    /// The platform throttled the request
    #[display("rate limit reached: {}", _0)]
    RateLimited(String),
    /// The platform refused an identical post
    #[display("content has already been posted")]
    Duplicate,
    /// A recipient or sender address could not be parsed
    #[display("invalid address: {}", _0)]
    InvalidAddress(String),
    /// Network or protocol failure talking to the channel
    #[display("transport failure: {}", _0)]
    Transport(String),
    /// The platform rejected the request for another reason
    #[display("rejected with status {}: {}", status, message)]
    Rejected {
        /// Status code returned by the platform
        status: u16,
        /// Response body or reason phrase
        message: String,
    },
}

/// Delivery error with source location tracking.
///
/// # Examples
///
/// ```
/// use sparc_error::{DeliveryError, DeliveryErrorKind};
///
/// let err = DeliveryError::new(DeliveryErrorKind::Duplicate);
/// assert!(format!("{}", err).contains("already been posted"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Delivery Failed: {} at line {} in {}", kind, line, file)]
pub struct DeliveryError {
    /// The kind of failure
    pub kind: DeliveryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DeliveryError {
    /// Create a new DeliveryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DeliveryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

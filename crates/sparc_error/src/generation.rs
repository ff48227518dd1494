//! Text-generation failures.

/// Why a call to the generation endpoint failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The request did not complete within the configured timeout
    #[display("request timed out after {} seconds", _0)]
    Timeout(u64),
    /// Connection, DNS, or TLS failure before a response arrived
    #[display("transport failure: {}", _0)]
    Transport(String),
    /// The endpoint rejected the credentials (401/403)
    #[display("authentication rejected: {}", _0)]
    Authentication(String),
    /// The endpoint refused the call for quota or rate reasons (429)
    #[display("quota exceeded: {}", _0)]
    Quota(String),
    /// Any other non-success status
    #[display("HTTP {} error: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// The response body could not be decoded
    #[display("malformed response: {}", _0)]
    MalformedResponse(String),
    /// The model answered with no text at all
    #[display("model returned no text")]
    EmptyResponse,
}

/// Generation failure with source location tracking.
///
/// Callers branch on [`GenerationError::kind`]; the failure is never folded
/// into generated text.
///
/// # Examples
///
/// ```
/// use sparc_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::Timeout(30));
/// assert!(format!("{}", err).contains("timed out"));
/// assert!(matches!(err.kind, GenerationErrorKind::Timeout(30)));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Failed: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The cause of the failure
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Classify an HTTP status and body into a failure kind.
    #[track_caller]
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        let kind = match status {
            401 | 403 => GenerationErrorKind::Authentication(message),
            429 => GenerationErrorKind::Quota(message),
            _ => GenerationErrorKind::Api { status, message },
        };
        Self::new(kind)
    }
}

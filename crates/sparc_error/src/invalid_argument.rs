//! Invalid caller input.

/// Malformed input rejected before any remote call is made.
///
/// # Examples
///
/// ```
/// use sparc_error::InvalidArgumentError;
///
/// let err = InvalidArgumentError::new("limit must be positive");
/// assert!(format!("{}", err).contains("limit must be positive"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invalid Argument: {} at line {} in {}", message, line, file)]
pub struct InvalidArgumentError {
    /// What was wrong with the input
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl InvalidArgumentError {
    /// Create a new InvalidArgumentError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

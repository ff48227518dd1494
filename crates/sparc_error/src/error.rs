//! Top-level error wrapper types.

use crate::{
    ConfigError, DeliveryError, GenerationError, HttpError, InvalidArgumentError,
    ReferentialIntegrityError, StoreError,
};

/// Every failure the workspace can report.
///
/// # Examples
///
/// ```
/// use sparc_error::{SparcError, SparcErrorKind, ConfigError};
///
/// let err: SparcError = ConfigError::new("missing endpoint").into();
/// assert!(matches!(err.kind(), SparcErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum SparcErrorKind {
    /// Malformed caller input
    #[from(InvalidArgumentError)]
    InvalidArgument(InvalidArgumentError),
    /// Generation endpoint call failed
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Missing or invalid configuration
    #[from(ConfigError)]
    Config(ConfigError),
    /// Refused write that would orphan or dangle a reference
    #[from(ReferentialIntegrityError)]
    ReferentialIntegrity(ReferentialIntegrityError),
    /// Persistence failure
    #[from(StoreError)]
    Store(StoreError),
    /// Social or email delivery failure
    #[from(DeliveryError)]
    Delivery(DeliveryError),
    /// HTTP client failure outside a generation or delivery call
    #[from(HttpError)]
    Http(HttpError),
}

/// S.P.A.R.C. error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("SPARC Error: {}", _0)]
pub struct SparcError(Box<SparcErrorKind>);

impl SparcError {
    /// Create a new error from a kind.
    pub fn new(kind: SparcErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SparcErrorKind {
        &self.0
    }

    /// Whether this error came from the generation endpoint.
    pub fn is_generation_failure(&self) -> bool {
        matches!(self.kind(), SparcErrorKind::Generation(_))
    }

    /// Whether this error is a referential integrity refusal.
    pub fn is_referential_integrity(&self) -> bool {
        matches!(self.kind(), SparcErrorKind::ReferentialIntegrity(_))
    }

    /// Whether this error rejected caller input.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self.kind(), SparcErrorKind::InvalidArgument(_))
    }
}

// Generic From implementation for any type that converts to SparcErrorKind
impl<T> From<T> for SparcError
where
    T: Into<SparcErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for S.P.A.R.C. operations.
pub type SparcResult<T> = std::result::Result<T, SparcError>;

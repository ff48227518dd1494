//! Persistence error types.

/// Store error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum StoreErrorKind {
    /// Connection or pool checkout failed
    #[display("Store connection error: {}", _0)]
    Connection(String),
    /// Query execution failed
    #[display("Store query error: {}", _0)]
    Query(String),
    /// A column could not be encoded or decoded
    #[display("Serialization error: {}", _0)]
    Serialization(String),
    /// Schema migration failed
    #[display("Migration error: {}", _0)]
    Migration(String),
    /// A required row does not exist
    #[display("{} {} not found", entity, id)]
    NotFound {
        /// Entity name (e.g. "content")
        entity: &'static str,
        /// Primary key that was looked up
        id: i32,
    },
}

/// Store error with source location tracking.
///
/// # Examples
///
/// ```
/// use sparc_error::{StoreError, StoreErrorKind};
///
/// let err = StoreError::new(StoreErrorKind::NotFound { entity: "campaign", id: 7 });
/// assert!(format!("{}", err).contains("campaign 7 not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Store Error: {} at line {} in {}", kind, line, file)]
pub struct StoreError {
    /// The kind of error that occurred
    pub kind: StoreErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl StoreError {
    /// Create a new StoreError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: StoreErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for a missing row.
    #[track_caller]
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::new(StoreErrorKind::NotFound { entity, id })
    }
}

#[cfg(feature = "database")]
impl From<diesel::result::Error> for StoreError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        StoreError::new(StoreErrorKind::Query(err.to_string()))
    }
}

#[cfg(feature = "database")]
impl From<diesel::ConnectionError> for StoreError {
    #[track_caller]
    fn from(err: diesel::ConnectionError) -> Self {
        StoreError::new(StoreErrorKind::Connection(err.to_string()))
    }
}

#[cfg(feature = "database")]
impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        StoreError::new(StoreErrorKind::Serialization(err.to_string()))
    }
}

#[cfg(feature = "database")]
impl From<diesel::result::Error> for crate::SparcErrorKind {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        crate::SparcErrorKind::Store(StoreError::from(err))
    }
}

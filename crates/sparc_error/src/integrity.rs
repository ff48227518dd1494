//! Referential integrity violations.

/// A write was refused because it would break a reference between rows.
///
/// Raised when deleting a persona that generated content still points at, or
/// when creating content for a persona or campaign that does not exist. The
/// operation is aborted with nothing changed.
///
/// # Examples
///
/// ```
/// use sparc_error::ReferentialIntegrityError;
///
/// let err = ReferentialIntegrityError::new("persona", 3, "referenced by 2 content rows");
/// assert_eq!(err.entity, "persona");
/// assert!(format!("{}", err).contains("persona 3"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display(
    "Referential Integrity Error: {} {} {} at line {} in {}",
    entity,
    id,
    reason,
    line,
    file
)]
pub struct ReferentialIntegrityError {
    /// Table or entity name (e.g. "persona")
    pub entity: &'static str,
    /// Primary key of the row involved
    pub id: i32,
    /// Why the operation was refused
    pub reason: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ReferentialIntegrityError {
    /// Create a new ReferentialIntegrityError at the current location.
    #[track_caller]
    pub fn new(entity: &'static str, id: i32, reason: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            entity,
            id,
            reason: reason.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

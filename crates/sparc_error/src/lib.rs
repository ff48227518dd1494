//! Error types for the S.P.A.R.C. campaign content generator.
//!
//! Every error follows the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum names the specific condition
//! - `*Error` struct wraps the kind with the file and line that raised it
//! - constructors use `#[track_caller]` so the location is captured automatically
//!
//! All of them convert into [`SparcError`], the single error type returned
//! across crate boundaries.
//!
//! # Examples
//!
//! ```
//! use sparc_error::{InvalidArgumentError, SparcResult};
//!
//! fn check_limit(limit: usize) -> SparcResult<usize> {
//!     if limit == 0 {
//!         Err(InvalidArgumentError::new("limit must be positive"))?
//!     }
//!     Ok(limit)
//! }
//!
//! assert!(check_limit(0).is_err());
//! assert_eq!(check_limit(280).unwrap(), 280);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod delivery;
mod error;
mod generation;
mod http;
mod integrity;
mod invalid_argument;
mod store;

pub use config::ConfigError;
pub use delivery::{DeliveryError, DeliveryErrorKind};
pub use error::{SparcError, SparcErrorKind, SparcResult};
pub use generation::{GenerationError, GenerationErrorKind};
pub use http::HttpError;
pub use integrity::ReferentialIntegrityError;
pub use invalid_argument::InvalidArgumentError;
pub use store::{StoreError, StoreErrorKind};

//! Delivery channels for S.P.A.R.C.
//!
//! Each channel implements one of the delivery traits from
//! `sparc_interface` and makes a single attempt per call:
//! - [`TwitterPublisher`] - short-form posts via the X/Twitter v2 API
//! - [`SmtpEmailSender`] - email over an authenticated STARTTLS relay
//!
//! Failures are classified into `DeliveryErrorKind` values so callers can
//! tell an authentication problem from throttling or a duplicate post.

#![warn(missing_docs)]

mod email;
mod twitter;

pub use email::{SmtpEmailSender, build_message};
pub use twitter::TwitterPublisher;

//! Test utilities for content pipeline tests.
//!
//! Mock implementations of the generation driver and delivery channels.

pub mod mock_delivery;
pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_delivery::{MockEmailSender, MockPublisher};
#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver, MockResponse};

//! Configuration for the S.P.A.R.C. campaign content generator.
//!
//! Settings come from TOML layered over bundled defaults, see
//! [`SparcConfig::load`]. Secrets are never read from TOML; the credential
//! types in this crate read them from the environment.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod credentials;
mod settings;

pub use credentials::{GenerationCredentials, SmtpCredentials, TwitterCredentials};
pub use settings::{
    ChannelSettings, DatabaseSettings, EmailFormatMode, EmailSettings, GenerationSettings,
    SocialSettings, SparcConfig,
};

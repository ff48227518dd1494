//! Tracing subscriber setup.

use sparc_error::{ConfigError, SparcResult};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` selects DEBUG for the
/// workspace crates and INFO elsewhere. `json` switches to one JSON object
/// per event. Logs go to stderr so command output stays pipeable.
pub fn init_logging(verbose: bool, json: bool) -> SparcResult<()> {
    let default_directive = if verbose {
        "info,sparc=debug,sparc_content=debug,sparc_models=debug,sparc_database=debug,sparc_social=debug"
    } else {
        "warn,sparc=info,sparc_content=info"
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let registry = tracing_subscriber::registry().with(env_filter);
    let result = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    result.map_err(|e| ConfigError::new(format!("Failed to initialize logging: {}", e)).into())
}

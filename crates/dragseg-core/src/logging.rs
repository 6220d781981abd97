#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! Call sites across the workspace log through `tracing` behind the `tracing`
//! feature; with the feature off they compile away entirely. The
//! `tracing-json` feature adds [`init_json`] for hosts that want structured
//! JSON lines on stderr.

use std::fmt;

/// Environment variable consulted for the log filter directive.
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

/// Default directive when [`LOG_FILTER_ENV`] is unset or unparsable.
pub const DEFAULT_FILTER: &str = "dragseg=info";

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, info, trace, warn};

/// Failure to install the global subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingInitError {
    reason: String,
}

impl LoggingInitError {
    /// Human-readable cause reported by the subscriber.
    #[must_use]
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for LoggingInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to install log subscriber: {}", self.reason)
    }
}

impl std::error::Error for LoggingInitError {}

/// Install a JSON formatter filtered by `RUST_LOG` as the global subscriber.
///
/// Returns an error instead of panicking when a global subscriber is already
/// set (tests, embedding hosts).
#[cfg(feature = "tracing-json")]
pub fn init_json() -> Result<(), LoggingInitError> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| LoggingInitError {
            reason: err.to_string(),
        })
}

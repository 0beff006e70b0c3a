//! Tracing subscriber setup.
//!
//! Logs go to stderr so `print` can stream the document on stdout.

use tracing_subscriber::EnvFilter;

use crate::error::SiteError;

/// Install the global subscriber. `RUST_LOG` wins over `default_level`.
pub fn init(default_level: &str) -> Result<(), SiteError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("portfolio_site={default_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| SiteError::Logging(e.to_string()))
}

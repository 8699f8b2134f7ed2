//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber for the binaries
//! - Honour `RUST_LOG`, falling back to a crate-level default
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Logs go to stderr; stdout carries only command results

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "blackhole_deployer=info";

/// Install the global subscriber with [`DEFAULT_FILTER`].
pub fn init() {
    init_with(DEFAULT_FILTER);
}

/// Install the global subscriber, using `default_filter` unless `RUST_LOG` is set.
///
/// A second call is a no-op.
pub fn init_with(default_filter: &str) {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

//! Tracing setup shared by the evcal binary and the unit tests.
//!
//! Log records go to stderr. Stdout is reserved for command replies, so
//! raising the level never changes what a script reading stdout sees.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level used when neither the config file nor `--log-level` set one
pub const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber.
///
/// `level` is any `EnvFilter` directive (`debug`, `evcal_core=trace`, ...).
/// A non-empty `RUST_LOG` takes precedence over it.
pub fn init_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let stderr_layer = fmt::layer().compact().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

/// Debug-level subscriber routed through the test harness; safe to call
/// from every test.
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

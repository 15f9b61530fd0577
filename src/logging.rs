//! Tracing subscriber setup shared by the binaries.
//!
//! Logs go to stderr; stdout belongs to the response protocol.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber, filtered by `RUST_LOG` (default `info`).
///
/// Calling it twice is harmless; the second call is ignored.
pub fn init() {
    init_with_default("info");
}

pub fn init_with_default(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init();
}

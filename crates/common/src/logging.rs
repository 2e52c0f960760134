//! Tracing initialization shared by the editor crates and the CLI.
//!
//! A `RUST_LOG` environment filter overrides the configured level, so
//! per-target directives like `zoomline_editor=debug` work without a
//! config change.

use crate::config::LoggingConfig;

/// Install the global tracing subscriber.
///
/// Safe to call more than once; later calls leave the first subscriber
/// in place.
pub fn init_logging(config: &LoggingConfig) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if config.json {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        // Gesture and seek events identify themselves by target;
        // file/line noise adds nothing at that granularity.
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
}

/// Defaults-only initialization for tests and one-off scripts.
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default());
}

//! Logging utilities for provider-wide output.
//!
//! Stdout is reserved for state output, so every layer writes to stderr.

// Re-exports for convenience
pub use tracing::metadata::LevelFilter;
pub use tracing::{debug, error, info, trace, warn};
use tracing::Subscriber;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter, Layer};

/// Set up basic logging
pub fn setup(level: Option<LevelFilter>) {
    // The user can specify a log level via an env var
    // (such as for testing).
    let rust_log = std::env::var("RUST_LOG").ok();

    // Actually initialize all logging layers. A subscriber may already be
    // installed when running inside tests.
    if subscriber(level, rust_log).try_init().is_err() {
        return;
    }

    debug!("logging set up");
}

/// Directives of the global filter. Without `RUST_LOG`, everything at
/// `level` passes and reqwest is capped at info.
fn directives(level: LevelFilter, rust_log: Option<String>) -> String {
    rust_log
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| format!("{level},reqwest=info"))
}

fn subscriber(
    level: Option<LevelFilter>,
    rust_log: Option<String>,
) -> impl Subscriber + Send + Sync {
    let level = level.unwrap_or(LevelFilter::WARN);
    let mut logging_layers = vec![EnvFilter::new(directives(level, rust_log)).boxed()];

    // The input level overrides any env vars.
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(level)
        .boxed();
    logging_layers.push(layer);

    tracing_subscriber::registry().with(logging_layers)
}

#[cfg(test)]
mod tests {
    use tracing::Level;

    use super::*;

    #[test]
    fn level_enables_events_without_rust_log() {
        tracing::subscriber::with_default(subscriber(Some(LevelFilter::DEBUG), None), || {
            assert!(tracing::enabled!(Level::DEBUG));
            assert!(tracing::enabled!(Level::WARN));
            assert!(!tracing::enabled!(Level::TRACE));
        });
    }

    #[test]
    fn default_level_is_warn() {
        tracing::subscriber::with_default(subscriber(None, None), || {
            assert!(tracing::enabled!(Level::WARN));
            assert!(!tracing::enabled!(Level::INFO));
        });
    }

    #[test]
    fn rust_log_is_honoured() {
        assert_eq!(
            directives(LevelFilter::DEBUG, Some("graviteeam_core=trace".to_owned())),
            "graviteeam_core=trace"
        );
        assert_eq!(
            directives(LevelFilter::INFO, Some(" ".to_owned())),
            "info,reqwest=info"
        );
    }
}

//! Structured logging via `tracing`.
//!
//! Logs go to stderr so stdout stays clean for JSON output. `RUST_LOG`
//! overrides the configured level when set.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter when neither config nor `RUST_LOG` says otherwise
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Build the filter: `RUST_LOG` first, then `level`, then the default.
pub fn env_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.unwrap_or(DEFAULT_LOG_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_logging(level: Option<&str>) {
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter(level))
        .with(console_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_parsing() {
        for filter in ["info", "debug,biome_engine=trace", "warn"] {
            assert!(EnvFilter::try_new(filter).is_ok(), "failed to parse {}", filter);
        }
    }

    #[test]
    fn test_init_twice_does_not_panic() {
        init_logging(Some("warn"));
        init_logging(Some("debug"));
    }
}

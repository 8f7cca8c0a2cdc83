//! # Structured Logging Module
//!
//! Console tracing initialization for applications embedding the resolver.
//! Library code only emits `tracing` events; installing a subscriber is the
//! host application's choice, and this helper is a convenience for binaries
//! and tests that have not set one up.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize console logging, filtered by `DEFAULT_VALUE_LOG` (default `info`).
///
/// Idempotent, and a no-op when the host application already installed a
/// global subscriber.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_env("DEFAULT_VALUE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_filter(filter),
        );

        if subscriber.try_init().is_err() {
            tracing::debug!("Global tracing subscriber already initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_is_idempotent() {
        init_logging();
        init_logging();
    }
}

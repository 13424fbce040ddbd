//! # Structured Logging
//!
//! Environment-aware tracing initialization. Console output in development,
//! JSON in production, filtered by `RUST_LOG` when set.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging once for the process.
///
/// Safe to call multiple times; subsequent calls are no-ops. Uses `try_init`
/// so an already-installed subscriber (e.g. in tests) is not an error.
pub fn init_structured_logging(environment: &str) {
    let environment = environment.to_string();
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(&environment)));

        let registry = tracing_subscriber::registry().with(filter);

        let result = if environment == "production" {
            registry
                .with(fmt::layer().with_target(true).with_ansi(false).json())
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_ansi(true))
                .try_init()
        };

        if result.is_err() {
            tracing::debug!("global tracing subscriber already initialized");
        }
    });
}

fn default_directive(environment: &str) -> &'static str {
    match environment {
        "production" => "info",
        "test" => "warn",
        _ => "debug",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_idempotent() {
        init_structured_logging("test");
        init_structured_logging("production");
    }
}

//! Subscriber setup for the `tracing` macros

use tracing_subscriber::{
    filter::ParseError,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::{LogFormat, LoggingConfig};

const FALLBACK_DIRECTIVES: &str = "info";

/// `RUST_LOG` wins over the configured level when it is set and non-blank
fn select_directives(level: &str, rust_log: Option<String>) -> String {
    rust_log
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| level.to_string())
}

fn build_filter(directives: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(directives)
}

pub fn init_logging(config: &LoggingConfig) {
    let directives = select_directives(
        &config.level,
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
    );
    let (filter, rejected) = match build_filter(&directives) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(FALLBACK_DIRECTIVES), Some(e)),
    };

    match config.format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().json().with_span_events(FmtSpan::CLOSE))
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(filter)
                .with(fmt::layer().pretty().with_span_events(FmtSpan::CLOSE))
                .init();
        }
    }

    if let Some(e) = rejected {
        tracing::warn!(
            directives = %directives,
            error = %e,
            "Invalid log filter, falling back to {}",
            FALLBACK_DIRECTIVES
        );
    }

    tracing::info!(directives = %directives, "Logging initialized");
}

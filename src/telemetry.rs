use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize structured logging.
///
/// - `RUST_LOG` takes precedence over `logging.level`.
/// - `logging.json` switches the formatter to newline-delimited JSON.
pub fn init(logging: &LoggingConfig) {
    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&logging.level)));

    let registry = tracing_subscriber::registry().with(filter_layer);

    if logging.json {
        registry
            .with(fmt::layer().json().with_target(true).with_current_span(false))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .compact(),
            )
            .init();
    }
}

/// Base level for everything, plus the same level for this crate and
/// request traces from tower-http.
fn default_directives(level: &str) -> String {
    format!("{level},docqet_web={level},tower_http={level}")
}

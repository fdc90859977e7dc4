//! tracing subscriber setup

use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogLevel;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(level: LogLevel) -> String {
    let level = level.as_filter();
    format!("chat_shell={level},warp={level}")
}

/// Install the global subscriber, writing human readable lines to stdout.
///
/// `RUST_LOG` takes precedence over `level`.
pub fn init(level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(level))),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stdout)
                .with_timer(ChronoLocal::new(TIMESTAMP_FORMAT.to_string()))
                .with_target(true),
        )
        .init();
}

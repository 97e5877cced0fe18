//! Structured logging setup
//!
//! Installs a `tracing` subscriber writing to stderr. `RUST_LOG` wins over
//! the configured level when it is set.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{LogFormat, LogLevel};
use crate::common::LoggingArgs;

/// Filter used when `RUST_LOG` is not set: our crate and request traces at
/// `level`, hyper and tokio internals at `warn`
pub fn default_filter(level: LogLevel) -> String {
    let level = level.as_str();
    format!("pipeline_dag={level},tower_http={level},hyper=warn,tokio=warn,{level}")
}

/// Install the global subscriber
///
/// Returns `false` when a subscriber was already installed (tests, embedding
/// applications), which is not an error.
pub fn init(args: &LoggingArgs) -> bool {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(args.log_level)));

    let fmt_layer = match args.log_format {
        LogFormat::Text => fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(console::Term::stderr().is_term())
            .compact()
            .boxed(),
        LogFormat::Json => fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .json()
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_ok()
}

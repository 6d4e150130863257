//! Logging setup for prdgen
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` and a `fmt`
//! layer in text or JSON form. Logs go to stderr so stdout stays free for
//! generated documents.

use prdgen_config::{LogFormat, TelemetryConfig};
use tracing_subscriber::EnvFilter;

/// Initialize logging from configuration
///
/// The configured `log_filter` wins; otherwise `RUST_LOG`, otherwise
/// `default_filter`.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or a global
/// subscriber is already installed
pub fn init(config: Option<&TelemetryConfig>, default_filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = build_filter(config.and_then(|c| c.log_filter.as_deref()), default_filter)?;
    let format = config.map(|c| c.format).unwrap_or_default();

    let registry = tracing_subscriber::registry().with(filter);

    let result = match format {
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init(),
    };

    result.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))
}

fn build_filter(configured: Option<&str>, default_filter: &str) -> anyhow::Result<EnvFilter> {
    match configured {
        Some(directive) => {
            EnvFilter::try_new(directive).map_err(|e| anyhow::anyhow!("invalid log filter '{directive}': {e}"))
        }
        None => Ok(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter))),
    }
}

use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;

/// Initialize tracing and logging
///
/// This sets up:
/// - Structured JSON logging (for production, or when `observability.json` is set)
/// - Console logging (for development)
/// - Environment-based log level filtering (RUST_LOG wins over the configured level)
pub fn init_observability(
    service_name: &str,
    service_version: &str,
    config: &ObservabilityConfig,
) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let is_production = std::env::var("ENVIRONMENT")
        .map(|env| env == "production")
        .unwrap_or(false);

    if is_production || config.json {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_filter(env_filter),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr)
                    .with_filter(env_filter),
            )
            .try_init()?;
    }

    tracing::debug!(
        service.name = service_name,
        service.version = service_version,
        log_level = %config.log_level,
        "Observability initialized"
    );

    Ok(())
}

pub mod config;
pub mod error;
pub mod registry;
pub mod telemetry;

use config::AppConfig;
use error::AppError;
use registry::Registry;

/// Load configuration, install the tracing subscriber, and build a registry
/// using the configured age bounds.
pub fn bootstrap() -> Result<(AppConfig, Registry), AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    tracing::info!(
        environment = ?config.environment,
        min_voting_age = config.eligibility.min_voting_age,
        "voter registry ready"
    );

    let registry = Registry::with_config(config.eligibility);
    Ok((config, registry))
}

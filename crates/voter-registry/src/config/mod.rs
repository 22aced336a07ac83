use std::env;

use crate::registry::EligibilityConfig;

/// Distinguishes runtime behavior for different stages of the deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the registry.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub eligibility: EligibilityConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let defaults = EligibilityConfig::default();
        let eligibility = EligibilityConfig {
            min_age: age_var("REGISTRY_MIN_AGE", defaults.min_age)?,
            min_voting_age: age_var("REGISTRY_MIN_VOTING_AGE", defaults.min_voting_age)?,
            max_age: age_var("REGISTRY_MAX_AGE", defaults.max_age)?,
        };
        if !eligibility.is_consistent() {
            return Err(ConfigError::InconsistentAgeBounds {
                min_age: eligibility.min_age,
                min_voting_age: eligibility.min_voting_age,
                max_age: eligibility.max_age,
            });
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            eligibility,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn age_var(name: &'static str, default: i32) -> Result<i32, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<i32>()
            .map_err(|source| ConfigError::InvalidAge { name, source }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid integer")]
    InvalidAge {
        name: &'static str,
        source: std::num::ParseIntError,
    },
    #[error(
        "age bounds must satisfy min_age <= min_voting_age <= max_age (got {min_age}/{min_voting_age}/{max_age})"
    )]
    InconsistentAgeBounds {
        min_age: i32,
        min_voting_age: i32,
        max_age: i32,
    },
}

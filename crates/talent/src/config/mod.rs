use crate::workflows::hiring::{MatchPolicy, UnknownMatchPolicy};
use std::env;
use std::fmt;

pub const DEFAULT_COMPANY_NAME: &str = "The Best Brothers";

/// Distinguishes runtime behavior for different stages of the tool.
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

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub hiring: HiringConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let company_name = non_blank_var("HIRING_COMPANY_NAME")
            .unwrap_or_else(|| DEFAULT_COMPANY_NAME.to_string());

        let match_policy = match non_blank_var("HIRING_MATCH_POLICY") {
            Some(raw) => raw.parse::<MatchPolicy>()?,
            None => MatchPolicy::default(),
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            hiring: HiringConfig {
                company_name,
                match_policy,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Trimmed value of `key`; unset and blank variables both read as absent.
fn non_blank_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Settings for the hiring workflow.
#[derive(Debug, Clone)]
pub struct HiringConfig {
    pub company_name: String,
    pub match_policy: MatchPolicy,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidMatchPolicy { source: UnknownMatchPolicy },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidMatchPolicy { source } => {
                write!(f, "HIRING_MATCH_POLICY is invalid: {}", source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidMatchPolicy { source } => Some(source),
        }
    }
}

impl From<UnknownMatchPolicy> for ConfigError {
    fn from(source: UnknownMatchPolicy) -> Self {
        Self::InvalidMatchPolicy { source }
    }
}

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::applications::evaluation::{EvaluationConfig, DEFAULT_HOME_COUNTRY};

/// Top-level configuration for the screener.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Country reported by the identity validator's country lookup.
    pub office_country: String,
    pub evaluation: EvaluationConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = EvaluationConfig::default();
        let home_country = env::var("APP_HOME_COUNTRY")
            .unwrap_or_else(|_| DEFAULT_HOME_COUNTRY.to_string())
            .trim()
            .to_string();
        let office_country = env::var("APP_OFFICE_COUNTRY")
            .map(|value| value.trim().to_string())
            .unwrap_or_else(|_| home_country.clone());

        let required_tech_stack = match env::var("APP_REQUIRED_TECH_STACK") {
            Ok(raw) => parse_stack(&raw)?,
            Err(_) => defaults.required_tech_stack,
        };

        let evaluation = EvaluationConfig {
            minimum_age: parse_var("APP_MINIMUM_AGE", defaults.minimum_age)?,
            detailed_validation_age: parse_var(
                "APP_DETAILED_VALIDATION_AGE",
                defaults.detailed_validation_age,
            )?,
            home_country,
            required_tech_stack,
            minimum_tech_stack_similarity: parse_percentage(
                "APP_MIN_TECH_STACK_SIMILARITY",
                defaults.minimum_tech_stack_similarity,
            )?,
            auto_accept_tech_stack_similarity: parse_percentage(
                "APP_AUTO_ACCEPT_SIMILARITY",
                defaults.auto_accept_tech_stack_similarity,
            )?,
            auto_accept_years_of_experience: parse_var(
                "APP_AUTO_ACCEPT_EXPERIENCE",
                defaults.auto_accept_years_of_experience,
            )?,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            office_country,
            evaluation,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::InvalidNumber {
            name,
            value: raw,
        }),
        Err(_) => Ok(default),
    }
}

fn parse_percentage(name: &'static str, default: f32) -> Result<f32, ConfigError> {
    let value = parse_var(name, default)?;
    if value.is_finite() && (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidPercentage { name, value })
    }
}

fn parse_stack(raw: &str) -> Result<Vec<String>, ConfigError> {
    let stack: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    if stack.is_empty() {
        return Err(ConfigError::EmptyTechStack);
    }
    Ok(stack)
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber { name: &'static str, value: String },
    InvalidPercentage { name: &'static str, value: f32 },
    EmptyTechStack,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { name, value } => {
                write!(f, "{name} must be an integer (found '{value}')")
            }
            ConfigError::InvalidPercentage { name, value } => {
                write!(f, "{name} must be between 0 and 100 (found {value})")
            }
            ConfigError::EmptyTechStack => {
                write!(f, "APP_REQUIRED_TECH_STACK must list at least one technology")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

use crate::applications::EvaluationError;
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;

/// Failures surfaced to the command-line front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid application payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("evaluation error: {0}")]
    Evaluation(#[from] EvaluationError),
}

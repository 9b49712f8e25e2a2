use crate::scoring::Factor;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("{factor} input {value} is outside the allowed range 0..=10")]
    InputOutOfRange { factor: Factor, value: i64 },
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}'")]
    EnvFilter {
        value: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("unable to open log file {path}")]
    LogFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

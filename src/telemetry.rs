use crate::error::TelemetryError;
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines go. The TUI owns stdout, so interactive runs log to a file.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
}

fn env_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(log_level).map_err(|source| TelemetryError::EnvFilter {
            value: log_level.to_string(),
            source,
        }),
    }
}

pub fn init(target: LogTarget<'_>, log_level: &str) -> Result<(), TelemetryError> {
    let filter = env_filter(log_level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .with_ansi(false);

    match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|source| TelemetryError::LogFile {
                    path: path.display().to_string(),
                    source,
                })?;
            builder
                .with_writer(Mutex::new(file))
                .try_init()
                .map_err(TelemetryError::Subscriber)
        }
        LogTarget::Stderr => builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(TelemetryError::Subscriber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_reported() {
        // only reachable when RUST_LOG is unset or itself invalid
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let err = env_filter("info,committee=loud").unwrap_err();
        assert!(matches!(err, TelemetryError::EnvFilter { .. }));
        assert!(err.to_string().contains("committee=loud"));
    }
}

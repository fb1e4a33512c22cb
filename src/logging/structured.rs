//! `tracing` subscriber for the CLI
//!
//! Console output is always on. With `logging.local_enabled`, JSON lines also go
//! to a rolling file in `logging.local_path`.

use crate::config::LoggingConfig;
use crate::domain::{Result, SwaggerError};
use std::str::FromStr;
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// File name prefix inside `local_path`
const LOG_FILE_PREFIX: &str = "export-swagger.log";

/// Keeps the background file writer alive; drop it to flush.
pub struct LoggingGuard {
    _file_writer: Option<WorkerGuard>,
}

/// Install the global subscriber
///
/// `RUST_LOG` wins over `level` when it is set. Call once per process.
///
/// # Errors
///
/// Unknown `level`, or a `local_path` that cannot be created.
///
/// ```no_run
/// use export_swagger::config::LoggingConfig;
/// use export_swagger::logging::init_logging;
///
/// let _guard = init_logging("debug", &LoggingConfig::default()).expect("logging");
/// ```
pub fn init_logging(level: &str, config: &LoggingConfig) -> Result<LoggingGuard> {
    let level = parse_log_level(level)?;

    let (file_layer, file_writer) = match open_log_file(config)? {
        Some((writer, guard)) => {
            let layer = fmt::layer()
                .json()
                .with_target(true)
                .with_writer(writer)
                .with_filter(filter_for(level));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_filter(filter_for(level)))
        .with(file_layer)
        .init();

    tracing::debug!(
        %level,
        file = config.local_enabled,
        path = %config.local_path,
        "Logging ready"
    );

    Ok(LoggingGuard {
        _file_writer: file_writer,
    })
}

fn filter_for(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("export_swagger={level}")))
}

fn open_log_file(config: &LoggingConfig) -> Result<Option<(NonBlocking, WorkerGuard)>> {
    if !config.local_enabled {
        return Ok(None);
    }

    std::fs::create_dir_all(&config.local_path).map_err(|e| {
        SwaggerError::Configuration(format!("Cannot create {}: {e}", config.local_path))
    })?;

    let appender = RollingFileAppender::new(
        parse_rotation(&config.local_rotation),
        &config.local_path,
        LOG_FILE_PREFIX,
    );
    Ok(Some(tracing_appender::non_blocking(appender)))
}

fn parse_log_level(level: &str) -> Result<Level> {
    if level.trim().chars().all(|c| c.is_ascii_digit()) {
        return Err(unknown_level(level));
    }
    Level::from_str(level.trim()).map_err(|_| unknown_level(level))
}

fn unknown_level(level: &str) -> SwaggerError {
    SwaggerError::Configuration(format!(
        "Unknown log level '{level}' (expected trace, debug, info, warn or error)"
    ))
}

fn parse_rotation(rotation: &str) -> Rotation {
    match rotation {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("trace", Level::TRACE)]
    #[test_case("Debug", Level::DEBUG)]
    #[test_case("INFO", Level::INFO)]
    #[test_case(" warn ", Level::WARN)]
    #[test_case("error", Level::ERROR)]
    fn accepts_level_names(input: &str, expected: Level) {
        assert_eq!(parse_log_level(input).unwrap(), expected);
    }

    #[test_case("verbose")]
    #[test_case("")]
    #[test_case("3")]
    fn rejects_other_levels(input: &str) {
        let err = parse_log_level(input).unwrap_err();
        assert!(err.to_string().contains("Unknown log level"));
    }

    #[test]
    fn rotation_falls_back_to_daily() {
        assert_eq!(parse_rotation("hourly"), Rotation::HOURLY);
        assert_eq!(parse_rotation("never"), Rotation::NEVER);
        assert_eq!(parse_rotation("weekly"), Rotation::DAILY);
    }

    #[test]
    fn disabled_file_logging_opens_nothing() {
        assert!(open_log_file(&LoggingConfig::default()).unwrap().is_none());
    }
}

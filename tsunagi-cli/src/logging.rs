//! Structured logging for the `tsunagi` binary.
//!
//! A single global `tracing` subscriber writes to stderr so the comparison
//! report on stdout stays clean. `TSUNAGI_LOG_FORMAT` picks between the
//! human-readable and JSON formatters, `RUST_LOG` picks the level.

use std::{env, str::FromStr, sync::OnceLock};

use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "TSUNAGI_LOG_FORMAT";
const DEFAULT_FILTER: &str = "info";

static INSTALLED: OnceLock<LogFormat> = OnceLock::new();

/// Output format of the diagnostic stream.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LogFormat {
    /// Multi-line text intended for a terminal.
    #[default]
    Human,
    /// One JSON object per line, including the active span list.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// `TSUNAGI_LOG_FORMAT` was not valid UTF-8.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Offending variable.
        name: &'static str,
        /// Underlying lookup failure.
        #[source]
        source: env::VarError,
    },
    /// `TSUNAGI_LOG_FORMAT` named an unknown format.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Value as supplied, trimmed and lowercased.
        provided: String,
    },
}

/// Installs the global subscriber once; later calls return the format chosen
/// by the first.
///
/// When another subscriber already owns the global slot (for example inside a
/// test harness) the existing one is kept and the call still succeeds.
///
/// # Errors
/// Returns [`LoggingError`] when `TSUNAGI_LOG_FORMAT` is unreadable or names
/// an unsupported format.
pub fn init_logging() -> Result<LogFormat, LoggingError> {
    if let Some(format) = INSTALLED.get() {
        return Ok(*format);
    }
    let format = format_from_env()?;
    install(format);
    Ok(*INSTALLED.get_or_init(|| format))
}

fn format_from_env() -> Result<LogFormat, LoggingError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => raw.parse(),
        Err(env::VarError::NotPresent) => Ok(LogFormat::default()),
        Err(source @ env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
            name: LOG_FORMAT_ENV,
            source,
        }),
    }
}

fn install(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);
    let fmt_layer = match format {
        LogFormat::Human => fmt_layer.boxed(),
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // Best effort: a logger installed elsewhere keeps the `log` facade.
    let _ = LogTracer::init();

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
    {
        tracing::debug!(error = %err, "keeping previously installed subscriber");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("Human", LogFormat::Human)]
    #[case(" JSON\n", LogFormat::Json)]
    fn log_format_parses_known_names(#[case] raw: &str, #[case] expected: LogFormat) {
        assert_eq!(raw.parse::<LogFormat>().expect("format must parse"), expected);
    }

    #[test]
    fn log_format_rejects_unknown_names() {
        match "Logfmt".parse::<LogFormat>() {
            Err(LoggingError::UnsupportedFormat { provided }) => assert_eq!(provided, "logfmt"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn repeated_initialisation_reports_the_first_format() {
        let first = init_logging().expect("logging must initialise");
        let second = init_logging().expect("second call must succeed");
        assert_eq!(first, second);
    }
}

//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Contact fields are personal data. Anything derived from a contact's
//! name, phone, email or address goes through [`redact_value`] before it
//! reaches a log line, unless `log_contact_data` is switched on in the
//! settings file.
//!
//! # Log Levels
//!
//! - `error`: settings that could not be written
//! - `warn`: user actions that failed, such as a missing field
//! - `info`: startup, completed user actions
//! - `debug`: store mutations, prompt lifecycle

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::state::{LogFormat, LoggingSettings};

static CONTACT_DATA_ENABLED: AtomicBool = AtomicBool::new(false);

/// Placeholder used when contact values must not be logged.
pub const REDACTED_VALUE: &str = "[REDACTED]";

/// Returns true if contact values may appear in log output.
pub fn contact_data_enabled() -> bool {
    CONTACT_DATA_ENABLED.load(Ordering::Relaxed)
}

/// Returns the input value when contact logging is enabled, otherwise a redacted token.
pub fn redact_value(value: &str) -> &str {
    if contact_data_enabled() {
        value
    } else {
        REDACTED_VALUE
    }
}

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level filter for the application crates.
    pub level: Level,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    /// Output format.
    pub format: LogFormat,
    /// Optional log file path. When set, logs are written to the file.
    pub log_file: Option<PathBuf>,
    /// Whether contact values may be logged.
    pub log_contact_data: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_ansi: true,
            format: LogFormat::default(),
            log_file: None,
            log_contact_data: false,
        }
    }
}

impl LogConfig {
    /// Build a `LogConfig` from the `[logging]` section of the settings file.
    ///
    /// An unrecognised level name falls back to `info`.
    #[must_use]
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        let level = Level::from_str(&settings.level).unwrap_or(Level::INFO);
        Self {
            level,
            format: settings.format,
            log_file: settings.file.clone(),
            with_ansi: settings.file.is_none(),
            log_contact_data: settings.log_contact_data,
        }
    }
}

/// Initialize the global tracing subscriber with the given configuration.
///
/// This should be called once at application startup.
///
/// # Errors
///
/// Returns the open error if the log file cannot be opened. Logging is still
/// installed in that case, writing to stderr.
///
/// # Panics
///
/// Panics if called more than once.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let Some(path) = &config.log_file else {
        init_logging_with_writer(config, io::stderr);
        return Ok(());
    };

    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => {
            init_logging_with_writer(config, SharedFileWriter::new(file));
            Ok(())
        }
        Err(e) => {
            let fallback = LogConfig {
                log_file: None,
                with_ansi: true,
                ..config.clone()
            };
            init_logging_with_writer(&fallback, io::stderr);
            Err(e)
        }
    }
}

/// Initialize logging with a custom writer.
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W)
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    CONTACT_DATA_ENABLED.store(config.log_contact_data, Ordering::Release);
    let filter = build_env_filter(config.level);

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(config.with_ansi)
        .with_target(false);

    match config.format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .init(),
    }
}

#[derive(Clone)]
struct SharedFileWriter {
    file: Arc<Mutex<std::fs::File>>,
}

impl SharedFileWriter {
    fn new(file: std::fs::File) -> Self {
        Self {
            file: Arc::new(Mutex::new(file)),
        }
    }
}

struct SharedFileGuard {
    file: Arc<Mutex<std::fs::File>>,
}

impl Write for SharedFileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = self
            .file
            .lock()
            .map_err(|_| io::Error::other("log file lock poisoned"))?;
        guard.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
    type Writer = SharedFileGuard;

    fn make_writer(&'a self) -> Self::Writer {
        SharedFileGuard {
            file: Arc::clone(&self.file),
        }
    }
}

/// Build an `EnvFilter` from the given level, respecting `RUST_LOG` env var.
fn build_env_filter(level: Level) -> EnvFilter {
    let level_str = level.as_str().to_lowercase();

    // Renderer and windowing crates stay at warn; they are chatty at info.
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,cb_gui={level},cb_store={level},contact_book={level}",
            level = level_str
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_settings_parses_level() {
        let settings = LoggingSettings {
            level: "debug".to_string(),
            ..Default::default()
        };
        assert_eq!(LogConfig::from_settings(&settings).level, Level::DEBUG);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let settings = LoggingSettings {
            level: "chatty".to_string(),
            ..Default::default()
        };
        assert_eq!(LogConfig::from_settings(&settings).level, Level::INFO);
    }

    #[test]
    fn log_file_disables_ansi() {
        let settings = LoggingSettings {
            file: Some(PathBuf::from("contact-book.log")),
            ..Default::default()
        };
        let config = LogConfig::from_settings(&settings);
        assert!(!config.with_ansi);
        assert_eq!(config.log_file, Some(PathBuf::from("contact-book.log")));
    }

    #[test]
    fn from_settings_carries_format_and_contact_flag() {
        let settings = LoggingSettings {
            format: LogFormat::Compact,
            log_contact_data: true,
            ..Default::default()
        };
        let config = LogConfig::from_settings(&settings);
        assert_eq!(config.format, LogFormat::Compact);
        assert!(config.log_contact_data);
        assert!(config.with_ansi);
    }

    #[test]
    fn values_are_redacted_by_default() {
        assert!(!contact_data_enabled());
        assert_eq!(redact_value("Alice"), REDACTED_VALUE);
    }
}

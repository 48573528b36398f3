//! # powerhub-adapter-log-sink
//!
//! Implementations of the [`Logger`] port and the factory that picks one.
//!
//! | Kind | Destination | Line format |
//! |------|-------------|-------------|
//! | `console` | standard output | `[Console] <message>` |
//! | `file` | append-only text file (default `log.txt`) | `[File] <message>` |
//!
//! ## Dependency rule
//!
//! Depends on `powerhub-app` (port traits) only.

mod console;
mod error;
mod file;

pub use console::ConsoleLogger;
pub use error::LogSinkError;
pub use file::FileLogger;

use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::str::FromStr;

use powerhub_app::ports::SharedLogger;
use serde::Deserialize;

/// Default destination of the file logger.
pub const DEFAULT_LOG_FILE: &str = "log.txt";

/// Which destination log lines go to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum LoggerKind {
    #[default]
    Console,
    File,
}

impl FromStr for LoggerKind {
    type Err = LogSinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "file" => Ok(Self::File),
            _ => Err(LogSinkError::UnknownKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for LoggerKind {
    type Error = LogSinkError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for LoggerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => f.write_str("console"),
            Self::File => f.write_str("file"),
        }
    }
}

/// Logger selection, as read from the `[logger]` configuration table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerSettings {
    /// Destination kind.
    pub kind: LoggerKind,
    /// File used when `kind` is [`LoggerKind::File`].
    pub path: PathBuf,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            kind: LoggerKind::Console,
            path: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Build the logger described by `settings`.
///
/// Every [`LoggerKind`] maps to a working logger; unknown kinds are rejected
/// earlier, when parsing.
#[must_use]
pub fn create_logger(settings: &LoggerSettings) -> SharedLogger {
    tracing::debug!(kind = %settings.kind, "creating logger");
    match settings.kind {
        LoggerKind::Console => Rc::new(ConsoleLogger::new()),
        LoggerKind::File => Rc::new(FileLogger::open(settings.path.clone())),
    }
}

/// Convenience for callers that only know the kind's name.
///
/// # Errors
///
/// Returns [`LogSinkError::UnknownKind`] when `kind` is neither `console`
/// nor `file`.
pub fn create_logger_by_name(kind: &str) -> Result<SharedLogger, LogSinkError> {
    let settings = LoggerSettings {
        kind: kind.parse()?,
        ..LoggerSettings::default()
    };
    Ok(create_logger(&settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use powerhub_app::ports::Logger;

    #[derive(Deserialize)]
    struct Wrapper {
        logger: LoggerSettings,
    }

    #[test]
    fn should_parse_known_kinds_case_insensitively() {
        assert_eq!("console".parse::<LoggerKind>().unwrap(), LoggerKind::Console);
        assert_eq!("FILE".parse::<LoggerKind>().unwrap(), LoggerKind::File);
        assert_eq!(" File ".parse::<LoggerKind>().unwrap(), LoggerKind::File);
    }

    #[test]
    fn should_reject_unknown_kind() {
        let result = "syslog".parse::<LoggerKind>();
        assert!(matches!(result, Err(LogSinkError::UnknownKind(kind)) if kind == "syslog"));
    }

    #[test]
    fn should_fail_instead_of_returning_absent_logger() {
        assert!(create_logger_by_name("database").is_err());
    }

    #[test]
    fn should_display_kind_as_lowercase() {
        assert_eq!(LoggerKind::File.to_string(), "file");
    }

    #[test]
    fn should_default_to_console_and_log_txt() {
        let settings = LoggerSettings::default();
        assert_eq!(settings.kind, LoggerKind::Console);
        assert_eq!(settings.path, PathBuf::from("log.txt"));
    }

    #[test]
    fn should_deserialize_settings_from_toml() {
        let toml = r#"
            [logger]
            kind = "file"
            path = "/var/log/powerhub.txt"
        "#;
        let parsed: Wrapper = toml::from_str(toml).unwrap();
        assert_eq!(parsed.logger.kind, LoggerKind::File);
        assert_eq!(parsed.logger.path, PathBuf::from("/var/log/powerhub.txt"));
    }

    #[test]
    fn should_report_unknown_kind_when_deserializing() {
        let toml = r#"
            [logger]
            kind = "syslog"
        "#;
        let err = toml::from_str::<Wrapper>(toml).err().unwrap();
        assert!(err.to_string().contains("unknown logger kind"));
    }

    #[test]
    fn should_create_file_logger_writing_to_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.log");
        let settings = LoggerSettings {
            kind: LoggerKind::File,
            path: path.clone(),
        };

        let logger = create_logger(&settings);
        logger.log("Device added: Drill");
        drop(logger);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[File] Device added: Drill\n");
    }
}

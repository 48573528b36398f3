//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `powerhub.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;
use std::str::FromStr;

use powerhub_adapter_log_sink::{LogSinkError, LoggerKind, LoggerSettings};
use powerhub_domain::error::PowerHubError;
use powerhub_domain::factory::{DeviceFactory, DeviceSpec, default_factories};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where inventory lifecycle messages go.
    pub logger: LoggerSettings,
    /// Report settings.
    pub report: ReportConfig,
    /// Diagnostics settings.
    pub logging: LoggingConfig,
    /// Devices to register. Empty means the built-in fridge and drill.
    pub devices: Vec<DeviceSpec>,
}

/// Console report configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub format: ReportFormat,
}

/// How the inventory is rendered on standard output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Device list followed by the total power line.
    #[default]
    Text,
    /// Pretty-printed JSON snapshot.
    Json,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unknown report format {other:?}"
            ))),
        }
    }
}

/// Diagnostics configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "powerhub=warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `powerhub.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if an
    /// override names an unknown logger kind or report format.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("powerhub.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("POWERHUB_LOGGER") {
            self.logger.kind = val.parse::<LoggerKind>()?;
        }
        if let Some(val) = var("POWERHUB_LOG_FILE") {
            self.logger.path = PathBuf::from(val);
        }
        if let Some(val) = var("POWERHUB_REPORT") {
            self.report.format = val.parse()?;
        }
        if let Some(val) = var("POWERHUB_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.logger.kind == LoggerKind::File && self.logger.path.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "logger.path must not be empty for the file logger".to_string(),
            ));
        }
        Ok(())
    }

    /// Factories for the configured devices, or the built-in ones when none
    /// are configured.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Device`] when a configured device is invalid.
    pub fn device_factories(&self) -> Result<Vec<Box<dyn DeviceFactory>>, ConfigError> {
        if self.devices.is_empty() {
            return Ok(default_factories());
        }
        self.devices
            .iter()
            .cloned()
            .map(|spec| -> Result<Box<dyn DeviceFactory>, ConfigError> {
                let template = spec.into_template()?;
                Ok(Box::new(template))
            })
            .collect()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Unknown logger kind.
    #[error("invalid logger selection")]
    Logger(#[from] LogSinkError),
    /// A configured device violates a domain invariant.
    #[error("invalid device entry")]
    Device(#[from] PowerHubError),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.logger.kind, LoggerKind::Console);
        assert_eq!(config.logger.path, PathBuf::from("log.txt"));
        assert_eq!(config.report.format, ReportFormat::Text);
        assert_eq!(config.logging.filter, "powerhub=warn");
        assert!(config.devices.is_empty());
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.logger.kind, LoggerKind::Console);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [logger]
            kind = 'file'
            path = 'inventory.log'

            [report]
            format = 'json'

            [logging]
            filter = 'debug'

            [[devices]]
            kind = 'drill'
            name = 'Makita Drill'
            rated_power = 650
            voltage = 18
            rpm = 1900
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logger.kind, LoggerKind::File);
        assert_eq!(config.logger.path, PathBuf::from("inventory.log"));
        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.devices.len(), 1);
    }

    #[test]
    fn should_report_parse_error_for_unknown_logger_kind() {
        let result: Result<Config, _> = toml::from_str("[logger]\nkind = 'syslog'");
        assert!(result.is_err());
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.logger.kind, LoggerKind::Console);
    }

    #[test]
    fn should_apply_env_overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[
                ("POWERHUB_LOGGER", "file"),
                ("POWERHUB_LOG_FILE", "/tmp/powerhub.log"),
                ("POWERHUB_REPORT", "json"),
                ("POWERHUB_LOG", "powerhub=debug"),
            ]))
            .unwrap();
        assert_eq!(config.logger.kind, LoggerKind::File);
        assert_eq!(config.logger.path, PathBuf::from("/tmp/powerhub.log"));
        assert_eq!(config.report.format, ReportFormat::Json);
        assert_eq!(config.logging.filter, "powerhub=debug");
    }

    #[test]
    fn should_prefer_rust_log_over_powerhub_log() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("POWERHUB_LOG", "info"), ("RUST_LOG", "trace")]))
            .unwrap();
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_fail_loudly_on_unknown_logger_override() {
        let mut config = Config::default();
        let result = config.apply_overrides(env(&[("POWERHUB_LOGGER", "database")]));
        assert!(matches!(result, Err(ConfigError::Logger(_))));
    }

    #[test]
    fn should_reject_unknown_report_format() {
        let mut config = Config::default();
        let result = config.apply_overrides(env(&[("POWERHUB_REPORT", "xml")]));
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_reject_empty_log_file_path() {
        let mut config = Config::default();
        config.logger.kind = LoggerKind::File;
        config.logger.path = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_ignore_empty_path_for_console_logger() {
        let mut config = Config::default();
        config.logger.path = PathBuf::new();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_fall_back_to_builtin_factories() {
        let config = Config::default();
        let names: Vec<String> = config
            .device_factories()
            .unwrap()
            .iter()
            .map(|factory| factory.create().name().to_string())
            .collect();
        assert_eq!(names, ["Samsung Fridge", "Bosch Drill"]);
    }

    #[test]
    fn should_build_factories_from_configured_devices() {
        let toml = "
            [[devices]]
            kind = 'refrigerator'
            name = 'LG Fridge'
            rated_power = 120
            brand = 'LG'
            capacity_liters = 250
        ";
        let config: Config = toml::from_str(toml).unwrap();
        let factories = config.device_factories().unwrap();
        assert_eq!(factories.len(), 1);
        assert_eq!(
            factories[0].create().describe(),
            "Refrigerator: LG Fridge, Brand: LG, Capacity: 250L, Power: 120W"
        );
    }

    #[test]
    fn should_reject_invalid_configured_device() {
        let toml = "
            [[devices]]
            kind = 'drill'
            name = 'Broken Drill'
            rated_power = -5
            voltage = 18
            rpm = 1900
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert!(matches!(
            config.device_factories(),
            Err(ConfigError::Device(_))
        ));
    }
}

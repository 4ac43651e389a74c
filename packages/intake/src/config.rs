//! # Application configuration — `intake.toml`
//!
//! Everything the form reads at runtime that is not part of the record
//! itself: the kill switches, the maintenance window, which optional screens
//! are on, the log level and where submissions go. The launcher builds one
//! [`IntakeConfig`] at start-up and hands it to the workflow and the
//! submitter; nothing reads configuration from ambient state.
//!
//! ## Structure
//!
//! ```toml
//! [application]
//! ended = false               # replaces the form with a closing notice
//!
//! [maintenance]
//! enabled = false
//! start = "2024-01-30T14:00:00Z"
//! end = "2024-01-31T22:00:00Z" # active while now <= end
//!
//! [features]
//! privacy_notice = true        # form stays disabled until accepted
//! debug_tools = false
//!
//! [logging]
//! level = "error"              # debug | info | warn | error
//!
//! [sheets]
//! script_url = ""
//!
//! [submission]
//! timeout_secs = 30
//! ```
//!
//! Every section derives `Default`, so a missing or empty file is the
//! default configuration.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialise configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration stored in `intake.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IntakeConfig {
    #[serde(default)]
    pub application: ApplicationConfig,
    #[serde(default)]
    pub maintenance: MaintenanceWindow,
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub sheets: SheetsConfig,
    #[serde(default)]
    pub submission: SubmissionConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Once set, the application period is over and nothing can be submitted.
    #[serde(default)]
    pub ended: bool,
}

/// Scheduled downtime. Only `end` decides whether it is active.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceWindow {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_maintenance_start")]
    pub start: DateTime<Utc>,
    #[serde(default = "default_maintenance_end")]
    pub end: DateTime<Utc>,
}

fn default_maintenance_start() -> DateTime<Utc> {
    DateTime::from_timestamp(1_706_623_200, 0).unwrap_or_default()
}

fn default_maintenance_end() -> DateTime<Utc> {
    DateTime::from_timestamp(1_706_738_400, 0).unwrap_or_default()
}

impl Default for MaintenanceWindow {
    fn default() -> Self {
        Self {
            enabled: false,
            start: default_maintenance_start(),
            end: default_maintenance_end(),
        }
    }
}

impl MaintenanceWindow {
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.enabled && now <= self.end
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeatureFlags {
    #[serde(default = "default_true")]
    pub privacy_notice: bool,
    #[serde(default)]
    pub debug_tools: bool,
}

fn default_true() -> bool {
    true
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            privacy_notice: true,
            debug_tools: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    #[default]
    Error,
}

impl LogLevel {
    /// Floor for the global subscriber. Info, warn and error lines always
    /// pass; this level only gates debug and performance output, which
    /// [`TracingLogger`](crate::TracingLogger) filters itself.
    pub fn subscriber_level(self) -> tracing::Level {
        match self {
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info | LogLevel::Warn | LogLevel::Error => tracing::Level::INFO,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SheetsConfig {
    /// Apps Script web app URL the form posts to. Empty means unconfigured.
    #[serde(default)]
    pub script_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SubmissionConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl IntakeConfig {
    pub fn new(script_url: impl Into<String>) -> Self {
        Self::default().with_script_url(script_url)
    }

    pub fn with_script_url(mut self, url: impl Into<String>) -> Self {
        self.sheets.script_url = url.into();
        self
    }

    pub fn with_maintenance(mut self, enabled: bool, end: DateTime<Utc>) -> Self {
        self.maintenance.enabled = enabled;
        self.maintenance.end = end;
        self
    }

    pub fn with_application_ended(mut self, ended: bool) -> Self {
        self.application.ended = ended;
        self
    }

    pub fn with_privacy_notice(mut self, enabled: bool) -> Self {
        self.features.privacy_notice = enabled;
        self
    }

    pub fn with_debug_tools(mut self, enabled: bool) -> Self {
        self.features.debug_tools = enabled;
        self
    }

    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.logging.level = level;
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.submission.timeout_secs = secs;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "intake.toml"
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = IntakeConfig::from_toml("").unwrap();
        assert_eq!(config, IntakeConfig::default());
        assert!(config.features.privacy_notice);
        assert_eq!(config.logging.level, LogLevel::Error);
        assert_eq!(config.submission.timeout(), Duration::from_secs(30));
        assert_eq!(
            config.maintenance.end.to_rfc3339(),
            "2024-01-31T22:00:00+00:00"
        );
        assert_eq!(
            config.maintenance.start.to_rfc3339(),
            "2024-01-30T14:00:00+00:00"
        );
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = IntakeConfig::from_toml(
            r#"
            [sheets]
            script_url = "https://script.example/exec"

            [logging]
            level = "debug"

            [maintenance]
            enabled = true
            end = "2030-05-01T00:00:00Z"
            "#,
        )
        .unwrap();
        assert_eq!(config.sheets.script_url, "https://script.example/exec");
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert!(config.maintenance.enabled);
        assert_eq!(config.maintenance.start, default_maintenance_start());
        assert_eq!(config.submission.timeout_secs, 30);
    }

    #[test]
    fn test_bad_level_is_rejected() {
        let err = IntakeConfig::from_toml("[logging]\nlevel = \"loud\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_subscriber_never_drops_info() {
        assert_eq!(LogLevel::Error.subscriber_level(), tracing::Level::INFO);
        assert_eq!(LogLevel::Warn.subscriber_level(), tracing::Level::INFO);
        assert_eq!(LogLevel::Info.subscriber_level(), tracing::Level::INFO);
        assert_eq!(LogLevel::Debug.subscriber_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_maintenance_is_active_until_end() {
        let end = DateTime::from_timestamp(1_000_000, 0).unwrap();
        let window = IntakeConfig::default().with_maintenance(true, end).maintenance;
        assert!(window.is_active(end - chrono::TimeDelta::seconds(1)));
        assert!(window.is_active(end));
        assert!(!window.is_active(end + chrono::TimeDelta::seconds(1)));

        let disabled = IntakeConfig::default().with_maintenance(false, end).maintenance;
        assert!(!disabled.is_active(end));
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = IntakeConfig::new("https://script.example/exec")
            .with_debug_tools(true)
            .with_timeout_secs(10);
        let text = config.to_toml().unwrap();
        assert_eq!(IntakeConfig::from_toml(&text).unwrap(), config);
    }
}

//! Configuration data model
//!
//! `PartialConfig` is what every source produces, `Config` is the merge
//! output, and `ResolvedConfig` is the validated form handed to the
//! initializer.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A configuration field known to the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ProjectId,
    LogLevel,
}

impl Field {
    /// Fields in validation order: required fields before enum-constrained ones.
    pub const ALL: [Field; 2] = [Field::ProjectId, Field::LogLevel];

    pub fn name(self) -> &'static str {
        match self {
            Field::ProjectId => "ProjectID",
            Field::LogLevel => "LogLevel",
        }
    }

    pub fn flag(self) -> &'static str {
        match self {
            Field::ProjectId => "--project-id",
            Field::LogLevel => "--log-level",
        }
    }

    pub fn env_var(self) -> &'static str {
        match self {
            Field::ProjectId => "SEASHELL_PROJECT_ID",
            Field::LogLevel => "SEASHELL_LOG_LEVEL",
        }
    }

    pub fn file_key(self) -> &'static str {
        match self {
            Field::ProjectId => "project_id",
            Field::LogLevel => "log_level",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a partial configuration came from, in ascending precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SourceKind {
    Defaults,
    File,
    Env,
    Flags,
}

impl SourceKind {
    pub const PRECEDENCE: [SourceKind; 4] =
        [SourceKind::Defaults, SourceKind::File, SourceKind::Env, SourceKind::Flags];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceKind::Defaults => "Defaults",
            SourceKind::File => "File",
            SourceKind::Env => "Env",
            SourceKind::Flags => "Flags",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Logging verbosity accepted by `--log-level`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LogLevel {
    #[default]
    Info,
    Warn,
    Debug,
    Error,
    Fatal,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] =
        [LogLevel::Info, LogLevel::Warn, LogLevel::Debug, LogLevel::Error, LogLevel::Fatal];

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Debug => "DEBUG",
            LogLevel::Error => "ERROR",
            LogLevel::Fatal => "FATAL",
        }
    }

    /// `tracing` has no fatal level; FATAL logs at ERROR.
    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Error | LogLevel::Fatal => tracing::Level::ERROR,
        }
    }

    /// Comma-separated list of accepted values, for messages.
    pub fn allowed_values() -> String {
        LogLevel::ALL.iter().map(|l| l.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log level '{0}' (expected one of {})", LogLevel::allowed_values())]
pub struct UnknownLogLevel(pub String);

impl FromStr for LogLevel {
    type Err = UnknownLogLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownLogLevel(s.to_string()))
    }
}

/// One source's view of the configuration. `None` means the source did not
/// set the field; `Some("")` is kept as-is here and treated as unset by the
/// merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartialConfig {
    #[serde(alias = "project-id", alias = "ProjectID")]
    pub project_id: Option<String>,
    #[serde(alias = "log-level", alias = "LogLevel")]
    pub log_level: Option<String>,
}

impl PartialConfig {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::ProjectId => self.project_id.as_deref(),
            Field::LogLevel => self.log_level.as_deref(),
        }
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match field {
            Field::ProjectId => self.project_id = value,
            Field::LogLevel => self.log_level = value,
        }
        self
    }

    /// Fields this partial would override during a merge.
    pub fn set_fields(&self) -> Vec<Field> {
        Field::ALL.into_iter().filter(|f| self.get(*f).is_some_and(|v| !v.is_empty())).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.set_fields().is_empty()
    }
}

/// The merged configuration. Fields no source set stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub(crate) project_id: Option<String>,
    pub(crate) log_level: Option<String>,
}

impl Config {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::ProjectId => self.project_id.as_deref(),
            Field::LogLevel => self.log_level.as_deref(),
        }
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }

    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }
}

/// A configuration that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub project_id: String,
    pub log_level: LogLevel,
}

//! Built-in defaults

use super::ConfigSource;
use crate::config::error::SourceError;
use crate::config::types::{Field, LogLevel, PartialConfig, SourceKind};

/// Lowest-precedence source. There is no default project: it names a
/// remote resource and has to come from the user.
#[derive(Debug, Clone, Default)]
pub struct Defaults;

impl Defaults {
    pub fn partial() -> PartialConfig {
        PartialConfig::default().with(Field::LogLevel, LogLevel::default().as_str())
    }
}

impl ConfigSource for Defaults {
    fn kind(&self) -> SourceKind {
        SourceKind::Defaults
    }

    fn load(&self) -> Result<PartialConfig, SourceError> {
        Ok(Self::partial())
    }
}

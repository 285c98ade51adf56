//! Validation of the merged configuration
//!
//! Checks run in a fixed order (required fields, then enum-constrained
//! fields) and stop at the first violation. A caller that wants every
//! problem has to fix the reported one and validate again.

use super::error::ValidationError;
use super::types::{Config, Field, LogLevel, ResolvedConfig};

const REQUIRED: &[Field] = &[Field::ProjectId];

pub fn validate(config: &Config) -> Result<(), ValidationError> {
    for &field in REQUIRED {
        if config.get(field).map_or(true, str::is_empty) {
            return Err(ValidationError::required(field));
        }
    }

    // Empty is fine here: the level falls back to its default.
    if let Some(level) = config.log_level().filter(|l| !l.is_empty()) {
        if level.parse::<LogLevel>().is_err() {
            return Err(ValidationError::not_allowed(Field::LogLevel, level));
        }
    }

    Ok(())
}

impl TryFrom<Config> for ResolvedConfig {
    type Error = ValidationError;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        validate(&config)?;

        let log_level = match config.log_level.as_deref() {
            Some(level) if !level.is_empty() => level
                .parse::<LogLevel>()
                .map_err(|_| ValidationError::not_allowed(Field::LogLevel, level))?,
            _ => LogLevel::default(),
        };

        Ok(ResolvedConfig { project_id: config.project_id.unwrap_or_default(), log_level })
    }
}

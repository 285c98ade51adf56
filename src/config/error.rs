//! Resolution errors

use std::path::PathBuf;
use thiserror::Error;

use super::types::{Field, LogLevel, SourceKind};

/// Why a source adapter could not produce a partial configuration.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    #[error("unsupported config extension '.{extension}' for file {}", path.display())]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("error parsing env file {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("{}", flag_error_summary(.0))]
    Flags(#[from] clap::Error),
}

/// First line of clap's rendering, without its `error:` prefix or the usage
/// block.
fn flag_error_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let line = rendered.lines().map(str::trim).find(|l| !l.is_empty()).unwrap_or_default();
    line.strip_prefix("error:").unwrap_or(line).trim().to_string()
}

/// The rule a merged configuration broke.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    Required,
    AllowedValues { value: String },
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Required => "required",
            Rule::AllowedValues { .. } => "allowed-values",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(.field, .rule))]
pub struct ValidationError {
    pub field: Field,
    pub rule: Rule,
}

impl ValidationError {
    pub fn required(field: Field) -> Self {
        Self { field, rule: Rule::Required }
    }

    pub fn not_allowed(field: Field, value: impl Into<String>) -> Self {
        Self { field, rule: Rule::AllowedValues { value: value.into() } }
    }

    /// Where the user can set the offending field.
    pub fn hint(&self) -> String {
        format!(
            "set it with {}, the {} environment variable, or `{}` in a config file",
            self.field.flag(),
            self.field.env_var(),
            self.field.file_key()
        )
    }
}

fn describe(field: &Field, rule: &Rule) -> String {
    match rule {
        Rule::Required => format!("missing required field {field}"),
        Rule::AllowedValues { value } => {
            format!("{field} '{value}' is not one of {}", LogLevel::allowed_values())
        }
    }
}

/// Stage reported for a failed resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailedStage {
    Load(SourceKind),
    Validate,
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("failed to load {stage} configuration: {source}")]
    Adapter {
        stage: SourceKind,
        #[source]
        source: SourceError,
    },

    #[error("invalid configuration: {0}")]
    Validation(#[from] ValidationError),
}

impl ResolveError {
    pub fn stage(&self) -> FailedStage {
        match self {
            ResolveError::Adapter { stage, .. } => FailedStage::Load(*stage),
            ResolveError::Validation(_) => FailedStage::Validate,
        }
    }

    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            ResolveError::Validation(err) => Some(err),
            ResolveError::Adapter { .. } => None,
        }
    }
}

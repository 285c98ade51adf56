//! Config file loading

use std::fs;
use std::path::{Path, PathBuf};

use super::ConfigSource;
use crate::config::error::SourceError;
use crate::config::merge::merge_all;
use crate::config::types::{PartialConfig, SourceKind};

/// Section that scopes settings to `dev` commands inside a shared file.
const SECTION: &str = "dev";

/// Reads zero or more config files. Later files override earlier ones with
/// the same rules as the cross-source merge.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    paths: Vec<PathBuf>,
}

impl FileSource {
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self { paths: paths.into_iter().map(Into::into).collect() }
    }
}

impl ConfigSource for FileSource {
    fn kind(&self) -> SourceKind {
        SourceKind::File
    }

    fn load(&self) -> Result<PartialConfig, SourceError> {
        if self.paths.is_empty() {
            return Ok(PartialConfig::default());
        }

        tracing::info!("Loading configurations from: {:?}", self.paths);

        let partials =
            self.paths.iter().map(|path| load_file(path)).collect::<Result<Vec<_>, _>>()?;
        let merged = merge_all(&partials);

        Ok(PartialConfig { project_id: merged.project_id, log_level: merged.log_level })
    }
}

fn load_file(path: &Path) -> Result<PartialConfig, SourceError> {
    let content = fs::read_to_string(path)
        .map_err(|source| SourceError::Io { path: path.to_path_buf(), source })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();

    let parsed = match ext.as_str() {
        "toml" => parse_toml_config(&content, path)?,
        "yaml" | "yml" => parse_yaml_config(&content, path)?,
        "json" => parse_json_config(&content, path)?,
        other => {
            return Err(SourceError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: other.to_string(),
            })
        }
    };

    tracing::debug!(path = %path.display(), fields = ?parsed.set_fields(), "Loaded config file");
    Ok(parsed)
}

fn parse_error(path: &Path, err: impl std::fmt::Display) -> SourceError {
    SourceError::Parse { path: path.to_path_buf(), message: err.to_string() }
}

/// Parse TOML config, preferring a nested `[dev]` table when present.
fn parse_toml_config(content: &str, path: &Path) -> Result<PartialConfig, SourceError> {
    let raw: toml::Value = toml::from_str(content).map_err(|e| parse_error(path, e))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    config_val.try_into().map_err(|e| parse_error(path, e))
}

/// Parse YAML config, preferring a nested `dev` mapping when present.
fn parse_yaml_config(content: &str, path: &Path) -> Result<PartialConfig, SourceError> {
    let raw: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| parse_error(path, e))?;

    // An empty document has no settings.
    if raw.is_null() {
        return Ok(PartialConfig::default());
    }

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_yaml::from_value(config_val).map_err(|e| parse_error(path, e))
}

fn parse_json_config(content: &str, path: &Path) -> Result<PartialConfig, SourceError> {
    let raw: serde_json::Value =
        serde_json::from_str(content).map_err(|e| parse_error(path, e))?;

    let config_val = match raw.get(SECTION) {
        Some(nested) => nested.clone(),
        None => raw,
    };

    serde_json::from_value(config_val).map_err(|e| parse_error(path, e))
}

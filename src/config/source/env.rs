//! Environment variables and `.env` files
//!
//! Env files are parsed into a local map; the adapter never writes to the
//! process environment itself. Callers that need the file variables visible
//! to downstream code inject an exporter.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use super::ConfigSource;
use crate::config::error::SourceError;
use crate::config::types::{Field, PartialConfig, SourceKind};

type Lookup = Box<dyn Fn(&str) -> Option<String>>;
type Exporter = Box<dyn Fn(&str, &str)>;

pub struct EnvSource {
    paths: Vec<PathBuf>,
    lookup: Lookup,
    exporter: Option<Exporter>,
}

impl EnvSource {
    /// Reads the process environment, plus any env files given.
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
            lookup: Box::new(|key| std::env::var(key).ok()),
            exporter: None,
        }
    }

    /// Replace the process environment with another variable lookup.
    pub fn with_lookup(mut self, lookup: impl Fn(&str) -> Option<String> + 'static) -> Self {
        self.lookup = Box::new(lookup);
        self
    }

    /// Called once per env-file variable that the lookup does not already
    /// define.
    pub fn with_exporter(mut self, exporter: impl Fn(&str, &str) + 'static) -> Self {
        self.exporter = Some(Box::new(exporter));
        self
    }

    /// Variables from all env files. The first file to define a key wins.
    fn read_env_files(&self) -> Result<BTreeMap<String, String>, SourceError> {
        let mut vars = BTreeMap::new();
        if self.paths.is_empty() {
            return Ok(vars);
        }

        tracing::info!("Loading environment variables from: {:?}", self.paths);
        tracing::warn!("This will not override already existing variables!");

        for path in &self.paths {
            for (key, value) in read_env_file(path)? {
                vars.entry(key).or_insert(value);
            }
        }
        Ok(vars)
    }
}

fn read_env_file(path: &Path) -> Result<Vec<(String, String)>, SourceError> {
    let env_file_error =
        |source: dotenvy::Error| SourceError::EnvFile { path: path.to_path_buf(), source };

    dotenvy::from_path_iter(path)
        .map_err(env_file_error)?
        .map(|item| item.map_err(env_file_error))
        .collect()
}

impl ConfigSource for EnvSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Env
    }

    fn load(&self) -> Result<PartialConfig, SourceError> {
        let file_vars = self.read_env_files()?;

        // Existing variables win over env-file values.
        let value = |field: Field| {
            let key = field.env_var();
            (self.lookup)(key).or_else(|| file_vars.get(key).cloned())
        };
        let partial = PartialConfig {
            project_id: value(Field::ProjectId),
            log_level: value(Field::LogLevel),
        };

        if let Some(export) = &self.exporter {
            for (key, val) in &file_vars {
                if (self.lookup)(key).is_none() {
                    export(key, val);
                }
            }
        }

        tracing::debug!(fields = ?partial.set_fields(), "Loaded environment");
        Ok(partial)
    }
}

impl fmt::Debug for EnvSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvSource")
            .field("paths", &self.paths)
            .field("exporter", &self.exporter.is_some())
            .finish_non_exhaustive()
    }
}

//! Resolution pipeline
//!
//! Runs Defaults, File, Env and Flags in that order, merges the results and
//! validates them. The order is fixed; callers can only choose which adapter
//! fills each stage. Any failure ends the run, and nothing is retried.

use std::path::PathBuf;

use super::error::ResolveError;
use super::merge::merge_all;
use super::source::{ConfigSource, Defaults, EnvSource, FileSource, FlagSource};
use super::types::{PartialConfig, ResolvedConfig};

#[derive(Debug)]
pub struct Resolver {
    defaults: Defaults,
    file: FileSource,
    env: EnvSource,
    flags: FlagSource,
}

impl Default for Resolver {
    fn default() -> Self {
        Self {
            defaults: Defaults,
            file: FileSource::default(),
            env: EnvSource::new(Vec::<PathBuf>::new()),
            flags: FlagSource::default(),
        }
    }
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, file: FileSource) -> Self {
        self.file = file;
        self
    }

    pub fn env(mut self, env: EnvSource) -> Self {
        self.env = env;
        self
    }

    pub fn flags(mut self, flags: FlagSource) -> Self {
        self.flags = flags;
        self
    }

    pub fn resolve(&self) -> Result<ResolvedConfig, ResolveError> {
        tracing::debug!("Resolving configuration");

        let sources: [&dyn ConfigSource; 4] = [&self.defaults, &self.file, &self.env, &self.flags];
        let partials = sources.iter().map(|source| load(*source)).collect::<Result<Vec<_>, _>>()?;

        tracing::debug!("Merging {} configuration layers", partials.len());
        let merged = merge_all(&partials);

        tracing::debug!(config = ?merged, "Validating configuration");
        let resolved = ResolvedConfig::try_from(merged).map_err(|err| {
            tracing::debug!(field = %err.field, rule = err.rule.name(), "Validation failed");
            err
        })?;

        tracing::debug!(
            project_id = %resolved.project_id,
            log_level = %resolved.log_level,
            "Resolved configuration"
        );
        Ok(resolved)
    }
}

fn load(source: &dyn ConfigSource) -> Result<PartialConfig, ResolveError> {
    let stage = source.kind();
    tracing::debug!(%stage, "Loading configuration layer");

    source.load().map_err(|err| {
        tracing::debug!(%stage, error = %err, "Configuration layer failed");
        ResolveError::Adapter { stage, source: err }
    })
}

/// Resolve with the standard adapters: defaults, the given config and env
/// files, the process environment, and `raw_args` (without program name).
pub fn resolve<A, F, E>(
    raw_args: A,
    file_paths: F,
    env_paths: E,
) -> Result<ResolvedConfig, ResolveError>
where
    A: IntoIterator,
    A::Item: Into<String>,
    F: IntoIterator,
    F::Item: Into<PathBuf>,
    E: IntoIterator,
    E::Item: Into<PathBuf>,
{
    Resolver::new()
        .file(FileSource::new(file_paths))
        .env(EnvSource::new(env_paths))
        .flags(FlagSource::raw(raw_args))
        .resolve()
}

//! Development environment initialization

use anyhow::Result;

use crate::config::ResolvedConfig;

/// Receives the validated configuration. This is the only consumer of a
/// resolution; it never sees an unvalidated config.
pub trait Initializer {
    fn init(&mut self, config: &ResolvedConfig) -> Result<()>;
}

/// Announces the environment it would set up for the resolved project.
#[derive(Debug, Default)]
pub struct ConsoleInitializer;

impl Initializer for ConsoleInitializer {
    fn init(&mut self, config: &ResolvedConfig) -> Result<()> {
        println!(
            "==> Initializing development environment for project {}. This will take several \
             minutes on the first run ...",
            config.project_id
        );
        tracing::info!(
            project_id = %config.project_id,
            log_level = %config.log_level,
            "Initialized"
        );
        Ok(())
    }
}

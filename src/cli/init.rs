//! Init command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::Logging;
use crate::config::{EnvSource, FileSource, FlagArgs, FlagSource, ResolveError, Resolver};
use crate::dev::{ConsoleInitializer, Initializer};

#[derive(Args)]
pub struct InitArgs {
    /// Config file to load (repeatable; .toml, .yaml/.yml or .json)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Vec<PathBuf>,

    /// Env file to load (repeatable); never overrides variables already set
    #[arg(short = 'e', long = "env-file", value_name = "FILE")]
    pub env_file: Vec<PathBuf>,

    #[command(flatten)]
    pub flags: FlagArgs,
}

pub fn run(args: InitArgs, logging: &Logging) -> Result<()> {
    let resolver = Resolver::new()
        .file(FileSource::new(args.config))
        .env(EnvSource::new(args.env_file).with_exporter(|key, val| std::env::set_var(key, val)))
        .flags(FlagSource::parsed(args.flags));

    let config = resolver.resolve().map_err(with_hint)?;

    logging.apply(config.log_level);
    ConsoleInitializer.init(&config)
}

/// Validation failures say where the field can be set; load failures
/// already name the stage and file.
fn with_hint(err: ResolveError) -> anyhow::Error {
    match err.validation().map(|v| v.hint()) {
        Some(hint) => anyhow::anyhow!("{err} ({hint})"),
        None => anyhow::Error::new(err),
    }
}

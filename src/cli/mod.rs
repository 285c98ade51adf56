//! Command-line interface for seashell-dev
//!
//! Provides the `init` subcommand, which resolves configuration and hands it
//! to the development environment initializer.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

use crate::config::LogLevel;

mod init;

/// Manage Seashell development environments
#[derive(Parser)]
#[command(name = "seashell-dev")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true, args_override_self = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a Seashell development environment for the current directory
    Init(init::InitArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let logging = Logging::init(cli.verbose);

    match cli.command {
        Commands::Init(args) => init::run(args, &logging),
    }
}

/// The installed subscriber's filter, swappable once the configured log
/// level is known.
pub struct Logging {
    handle: Option<reload::Handle<EnvFilter, Registry>>,
    verbose: bool,
    from_env: bool,
}

impl Logging {
    fn init(verbose: bool) -> Self {
        // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
        let from_env = std::env::var("RUST_LOG").is_ok_and(|v| !v.trim().is_empty());
        let level = if verbose { Level::DEBUG } else { Level::INFO };
        let (filter, handle) = reload::Layer::new(filter_for(from_env, level));
        let installed = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .try_init()
            .is_ok();

        Self { handle: installed.then_some(handle), verbose, from_env }
    }

    /// Switch to the resolved log level. `--verbose` and RUST_LOG keep
    /// their filter.
    pub fn apply(&self, level: LogLevel) {
        if self.verbose || self.from_env {
            return;
        }
        if let Some(handle) = &self.handle {
            if let Err(err) = handle.reload(filter_for(false, level.as_tracing_level())) {
                tracing::warn!("Failed to apply log level {}: {}", level, err);
            }
        }
    }
}

fn filter_for(from_env: bool, level: Level) -> EnvFilter {
    if from_env {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::default().add_directive(level.into())
    }
}

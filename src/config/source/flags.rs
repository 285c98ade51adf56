//! Command-line flags

use clap::{Args, Parser};

use super::ConfigSource;
use crate::config::error::SourceError;
use crate::config::types::{PartialConfig, SourceKind};

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagArgs {
    /// The ID for a Seashell Cloud project. Must match the name of an
    /// already existing project that the user has access to.
    #[arg(long, value_name = "ID")]
    pub project_id: Option<String>,

    /// The logging level to run at. Valid values are INFO, WARN, DEBUG,
    /// ERROR, FATAL.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl From<FlagArgs> for PartialConfig {
    fn from(args: FlagArgs) -> Self {
        PartialConfig { project_id: args.project_id, log_level: args.log_level }
    }
}

#[derive(Parser)]
#[command(
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
struct FlagParser {
    #[command(flatten)]
    flags: FlagArgs,
}

/// Flags either still to be parsed, or already parsed by the caller's
/// command line.
#[derive(Debug, Clone)]
pub enum FlagSource {
    Raw(Vec<String>),
    Parsed(FlagArgs),
}

impl FlagSource {
    /// `args` must not include the program name.
    pub fn raw<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FlagSource::Raw(args.into_iter().map(Into::into).collect())
    }

    pub fn parsed(args: FlagArgs) -> Self {
        FlagSource::Parsed(args)
    }
}

impl Default for FlagSource {
    fn default() -> Self {
        FlagSource::Parsed(FlagArgs::default())
    }
}

impl ConfigSource for FlagSource {
    fn kind(&self) -> SourceKind {
        SourceKind::Flags
    }

    fn load(&self) -> Result<PartialConfig, SourceError> {
        let flags = match self {
            FlagSource::Raw(args) => FlagParser::try_parse_from(args)?.flags,
            FlagSource::Parsed(flags) => flags.clone(),
        };
        Ok(flags.into())
    }
}

//! Configuration loading and merging
//!
//! Handles loading from defaults, config files, environment variables, and
//! CLI flags with fixed precedence (Flags > Env > File > Defaults), then
//! validates the merged result.

pub mod error;
pub mod merge;
pub mod pipeline;
pub mod source;
pub mod types;
pub mod validate;

pub use error::{FailedStage, ResolveError, Rule, SourceError, ValidationError};
pub use merge::merge_all;
pub use pipeline::{resolve, Resolver};
pub use source::{ConfigSource, Defaults, EnvSource, FileSource, FlagArgs, FlagSource};
pub use types::{Config, Field, LogLevel, PartialConfig, ResolvedConfig, SourceKind};
pub use validate::validate;

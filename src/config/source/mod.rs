//! Source adapters
//!
//! Each adapter turns one origin (built-in defaults, config files, the
//! environment, command-line flags) into a `PartialConfig`.

pub mod defaults;
pub mod env;
pub mod file;
pub mod flags;

pub use defaults::Defaults;
pub use env::EnvSource;
pub use file::FileSource;
pub use flags::{FlagArgs, FlagSource};

use super::error::SourceError;
use super::types::{PartialConfig, SourceKind};

pub trait ConfigSource {
    fn kind(&self) -> SourceKind;

    fn load(&self) -> Result<PartialConfig, SourceError>;
}

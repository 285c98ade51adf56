//! seashell-dev: initialize Seashell development environments
//!
//! Resolves the `dev init` configuration from built-in defaults, config
//! files, environment variables and command-line flags, validates it, and
//! hands it to the environment initializer.

pub mod cli;
pub mod config;
pub mod dev;

pub use config::{resolve, ResolveError, ResolvedConfig, Resolver};

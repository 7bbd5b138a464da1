//! Execution context shared by CLI commands.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;
use crate::output::Output;

/// Context for CLI command execution.
///
/// Carries the resolved output writer and the config file location. The
/// configuration itself is loaded lazily so commands that bootstrap a
/// project (`init`) can run before one exists.
pub struct Context {
    /// Explicit config path from `--config`, if any.
    pub config_path: Option<PathBuf>,

    /// Output writer.
    pub output: Output,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Debug mode.
    pub debug: bool,
}

impl Context {
    /// Create a new context from CLI options.
    pub fn new(
        config_path: Option<PathBuf>,
        output_format: &str,
        color: &str,
        quiet: bool,
        debug: bool,
    ) -> Result<Self> {
        let output = Output::from_cli(output_format, color, quiet)?;

        Ok(Self { config_path, output, quiet, debug })
    }

    /// Load the project configuration.
    pub fn config(&self) -> Result<Config> {
        Config::load(self.config_path.as_deref())
    }
}

//! Command pattern interfaces
//!
//! This module defines the Command pattern interfaces for the CLI.

use crate::config::ExtractConfig;
use crate::errors::ExtractResult;
use crate::utils::logger::Logger;

/// Represents an executable command in the application
pub trait Command {
    /// Execute the command
    fn execute(&self) -> ExtractResult<()>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Paths resolved from the arguments
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A command that implements the Command trait, or an error
    fn create_command(&self, args: &clap::ArgMatches, config: ExtractConfig,
                      logger: &'a Logger) -> ExtractResult<Box<dyn Command + 'a>>;
}

//! CLI command implementations
//!
//! This module contains implementations of the commands supported by the
//! CLI application using the Command pattern.

pub mod command_traits;
pub mod extract_command;
pub mod list_command;

pub use command_traits::{Command, CommandFactory};
pub use extract_command::ExtractCommand;
pub use list_command::ListCommand;

use clap::ArgMatches;
use crate::config::ExtractConfig;
use crate::errors::ExtractResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct IconsCommandFactory;

impl IconsCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        IconsCommandFactory
    }
}

impl<'a> CommandFactory<'a> for IconsCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: ExtractConfig,
                      logger: &'a Logger) -> ExtractResult<Box<dyn Command + 'a>> {
        if args.get_flag("list") {
            Ok(Box::new(ListCommand::new(config, logger)))
        } else {
            // Extraction is the default
            Ok(Box::new(ExtractCommand::new(config, logger)))
        }
    }
}

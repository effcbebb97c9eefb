//! Utility modules for common functionality
//!
//! Logging and progress reporting shared by the extractor and the commands.

pub mod logger;
pub(crate) mod progress;

//! Icon extraction command
//!
//! Runs the crop-and-save pass over the built-in crop table.

use log::{error, info};

use crate::commands::command_traits::Command;
use crate::config::ExtractConfig;
use crate::errors::ExtractResult;
use crate::extractor::{icon_table, CropOutcome, IconExtractor};
use crate::utils::logger::Logger;

/// Command for cutting every icon out of the source image
pub struct ExtractCommand<'a> {
    /// Resolved paths for this run
    config: ExtractConfig,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    pub fn new(config: ExtractConfig, logger: &'a Logger) -> Self {
        info!("Input file: {}", config.input_path.display());
        info!("Output directory: {}", config.output_dir.display());

        ExtractCommand { config, logger }
    }

    /// Run the extraction and return what was written
    pub fn extract(&self) -> ExtractResult<Vec<CropOutcome>> {
        let table = icon_table()?;
        let extractor = IconExtractor::new(self.logger, &self.config.output_dir);

        let outcomes = extractor.run(&self.config.input_path, table)?;

        self.logger.report("")?;
        self.logger.report(&format!("Done! Icons extracted to {}/ folder", self.config.output_dir.display()))?;
        Ok(outcomes)
    }
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> ExtractResult<()> {
        info!("Executing extract command");

        match self.extract() {
            Ok(outcomes) => {
                info!("Icon extraction successful, {} files written", outcomes.len());
                Ok(())
            },
            Err(e) => {
                error!("Icon extraction failed: {}", e);
                Err(e)
            }
        }
    }
}

//! Crop table listing command
//!
//! Prints the built-in crop table. When the source image is present it is
//! decoded and the size each icon would come out at is shown as well.
//! Nothing is written besides the log.

use log::{info, warn};
use image::GenericImageView;

use crate::commands::command_traits::Command;
use crate::config::ExtractConfig;
use crate::errors::ExtractResult;
use crate::extractor::{icon_table, IconExtractor, PlannedCrop};
use crate::utils::logger::Logger;

/// Command for showing the crop table without extracting
pub struct ListCommand<'a> {
    /// Resolved paths for this run
    config: ExtractConfig,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command
    pub fn new(config: ExtractConfig, logger: &'a Logger) -> Self {
        ListCommand { config, logger }
    }

    /// Format one planned crop as a report line
    fn describe(planned: &PlannedCrop) -> String {
        let size = match planned.region {
            Some(region) if planned.clipped => format!("{}x{} (clipped)", region.width, region.height),
            Some(region) => format!("{}x{}", region.width, region.height),
            None => "outside image".to_string(),
        };
        format!("  {} {} -> {}", planned.spec.name, planned.spec.crop_box, size)
    }
}

impl<'a> Command for ListCommand<'a> {
    fn execute(&self) -> ExtractResult<()> {
        info!("Executing list command");

        let table = icon_table()?;
        let extractor = IconExtractor::new(self.logger, &self.config.output_dir);

        self.logger.report(&format!("Crop table ({} entries):", table.len()))?;
        for spec in table {
            self.logger.report(&format!("  {} {} - {}", spec.name, spec.crop_box, spec.description))?;
        }

        if !self.config.input_path.exists() {
            warn!("Source image {} not found, skipping size check", self.config.input_path.display());
            return Ok(());
        }

        let image = extractor.load(&self.config.input_path)?;
        let (width, height) = image.dimensions();

        self.logger.report("")?;
        self.logger.report(&format!("Planned output for {}x{} source:", width, height))?;
        for planned in extractor.plan(table, width, height) {
            self.logger.report(&Self::describe(&planned))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::{CropBox, CropSpec, Region};

    #[test]
    fn test_describe_marks_clipping() {
        let spec = CropSpec::new("icon.png", CropBox::new(0, 0, 20, 20), "icon");

        let planned = PlannedCrop { spec: &spec, region: Some(Region::new(0, 0, 20, 20)), clipped: false };
        assert_eq!(ListCommand::describe(&planned), "  icon.png (0, 0, 20, 20) -> 20x20");

        let planned = PlannedCrop { spec: &spec, region: Some(Region::new(0, 0, 10, 20)), clipped: true };
        assert_eq!(ListCommand::describe(&planned), "  icon.png (0, 0, 20, 20) -> 10x20 (clipped)");

        let planned = PlannedCrop { spec: &spec, region: None, clipped: true };
        assert_eq!(ListCommand::describe(&planned), "  icon.png (0, 0, 20, 20) -> outside image");
    }
}

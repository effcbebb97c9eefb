//! Crop-and-save pass over the crop table
//!
//! The extractor loads the source image once and then walks the crop table
//! in declaration order, cutting each box out and writing it next to the
//! other icons. The first failure stops the run; files already written
//! stay on disk.

use std::io;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageReader};
use log::{debug, info, warn};

use crate::errors::{ExtractError, ExtractResult};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

use super::crop_spec::CropSpec;
use super::region::Region;

/// Result of one crop-and-save step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropOutcome {
    /// Output filename from the crop table
    pub name: String,
    /// Label from the crop table
    pub description: String,
    /// Where the cropped image was written
    pub output_path: PathBuf,
    /// Width of the written image
    pub width: u32,
    /// Height of the written image
    pub height: u32,
    /// Whether the box had to be clipped to the image bounds
    pub clipped: bool,
}

/// Planned crop for one table entry against a known image size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCrop<'s> {
    pub spec: &'s CropSpec,
    /// Clipped region, `None` if nothing of the box lies inside the image
    pub region: Option<Region>,
    pub clipped: bool,
}

/// Cuts named regions out of a source image
pub struct IconExtractor<'a> {
    /// Logger for recording operations and reporting results
    logger: &'a Logger,
    /// Directory the cropped icons are written into
    output_dir: PathBuf,
}

impl<'a> IconExtractor<'a> {
    /// Create a new extractor writing into `output_dir`
    pub fn new(logger: &'a Logger, output_dir: impl Into<PathBuf>) -> Self {
        IconExtractor {
            logger,
            output_dir: output_dir.into(),
        }
    }

    /// Load and decode the source image
    ///
    /// The format is sniffed from the file content, falling back to the
    /// extension.
    ///
    /// # Errors
    /// `NotFound` if opening reports the path as missing, `Decode` for any
    /// other open failure or if the file is not a readable raster image.
    pub fn load(&self, path: &Path) -> ExtractResult<DynamicImage> {
        info!("Loading source image {}", path.display());

        let decode_err = |source: image::ImageError| ExtractError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let reader = ImageReader::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ExtractError::NotFound(path.to_path_buf()),
            _ => decode_err(image::ImageError::IoError(e)),
        })?;

        let image = reader
            .with_guessed_format()
            .map_err(|e| decode_err(image::ImageError::IoError(e)))?
            .decode()
            .map_err(decode_err)?;

        let (width, height) = image.dimensions();
        debug!("Decoded {} as {:?}, {}x{}", path.display(), image.color(), width, height);

        Ok(image)
    }

    /// Cut the spec's box out of `image`
    ///
    /// Boxes reaching past the image edges are clipped to the intersection.
    /// Returns the cropped image and the region actually used.
    pub fn crop(&self, image: &DynamicImage, spec: &CropSpec) -> ExtractResult<(DynamicImage, Region)> {
        let (width, height) = image.dimensions();

        let region = spec.crop_box.clip_to(width, height)
            .ok_or_else(|| ExtractError::InvalidBox {
                name: spec.name.clone(),
                crop_box: spec.crop_box,
            })?;

        if !spec.crop_box.fits_within(width, height) {
            warn!("Crop box {} for {} exceeds {}x{}, clipped to x={}, y={}, width={}, height={}",
                  spec.crop_box, spec.name, width, height,
                  region.x, region.y, region.width, region.height);
        }

        debug!("Cropping {}: x={}, y={}, end_x={}, end_y={}",
               spec.name, region.x, region.y, region.end_x(), region.end_y());

        let cropped = image.crop_imm(region.x, region.y, region.width, region.height);
        Ok((cropped, region))
    }

    /// Write an image to `output_path`, replacing any existing file
    ///
    /// The encoding follows the file extension. Missing directories are not
    /// created.
    pub fn save(&self, image: &DynamicImage, output_path: &Path) -> ExtractResult<()> {
        debug!("Writing {}", output_path.display());

        image.save(output_path).map_err(|source| ExtractError::Write {
            path: output_path.to_path_buf(),
            source,
        })
    }

    /// Work out what each spec would produce for an image of the given size
    pub fn plan<'s>(&self, specs: &'s [CropSpec], width: u32, height: u32) -> Vec<PlannedCrop<'s>> {
        specs.iter()
            .map(|spec| PlannedCrop {
                spec,
                region: spec.crop_box.clip_to(width, height),
                clipped: !spec.crop_box.fits_within(width, height),
            })
            .collect()
    }

    /// Load `source_path` once and crop every spec out of it, in order
    ///
    /// # Returns
    /// One outcome per spec, or the first error encountered
    pub fn run(&self, source_path: &Path, specs: &[CropSpec]) -> ExtractResult<Vec<CropOutcome>> {
        let image = self.load(source_path)?;
        let (width, height) = image.dimensions();
        self.logger.report(&format!("Image size: {}x{}", width, height))?;

        let progress = ProgressTracker::new(specs.len() as u64, "Extracting icons");
        let mut outcomes = Vec::with_capacity(specs.len());

        for spec in specs {
            progress.set_message(&spec.name);

            let (icon, region) = self.crop(&image, spec)?;
            let output_path = self.output_dir.join(&spec.name);
            self.save(&icon, &output_path)?;

            progress.suspend(|| -> ExtractResult<()> {
                self.logger.report(&format!("Saved {} - {}", spec.name, spec.description))?;
                self.logger.report(&format!("  Size: ({}, {})", region.width, region.height))?;
                Ok(())
            })?;
            progress.increment(1);

            outcomes.push(CropOutcome {
                name: spec.name.clone(),
                description: spec.description.clone(),
                output_path,
                width: region.width,
                height: region.height,
                clipped: !spec.crop_box.fits_within(width, height),
            });
        }

        progress.finish();
        info!("Extracted {} icons into {}", outcomes.len(), self.output_dir.display());

        Ok(outcomes)
    }
}

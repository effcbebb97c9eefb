//! Icon extraction from a source image
//!
//! This module holds the crop table, the geometry types used to describe
//! crops, and the extractor that performs the crop-and-save pass.

mod region;
mod crop_box;
mod crop_spec;
mod table;
mod icon_extractor;

// Public exports
pub use region::Region;
pub use crop_box::CropBox;
pub use crop_spec::CropSpec;
pub use table::{icon_table, parse_crop_table};
pub use icon_extractor::{CropOutcome, IconExtractor, PlannedCrop};

//! Named crop specifications

use super::crop_box::CropBox;

/// One entry of the crop table: where to cut and what to call the result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropSpec {
    /// Output filename, unique within the table
    pub name: String,
    /// Rectangle to cut out of the source image
    pub crop_box: CropBox,
    /// Human-readable label, informational only
    pub description: String,
}

impl CropSpec {
    pub fn new(name: impl Into<String>, crop_box: CropBox, description: impl Into<String>) -> Self {
        CropSpec {
            name: name.into(),
            crop_box,
            description: description.into(),
        }
    }
}

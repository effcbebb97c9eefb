//! Custom error types for icon extraction

use std::fmt;
use std::io;
use std::path::PathBuf;

use crate::extractor::CropBox;

/// Extraction error types
#[derive(Debug)]
pub enum ExtractError {
    /// Source image does not exist
    NotFound(PathBuf),
    /// Source image could not be decoded
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    /// Cropped image could not be written
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
    /// Crop box is degenerate or lies entirely outside the image
    InvalidBox {
        name: String,
        crop_box: CropBox,
    },
    /// Embedded crop table is malformed
    Table(String),
    /// I/O error
    Io(io::Error),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::NotFound(path) => write!(f, "Source image not found: {}", path.display()),
            ExtractError::Decode { path, source } => {
                write!(f, "Failed to decode {}: {}", path.display(), source)
            }
            ExtractError::Write { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
            ExtractError::InvalidBox { name, crop_box } => {
                write!(f, "Invalid crop box for {}: {}", name, crop_box)
            }
            ExtractError::Table(msg) => write!(f, "Crop table error: {}", msg),
            ExtractError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::Decode { source, .. } => Some(source),
            ExtractError::Write { source, .. } => Some(source),
            ExtractError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ExtractError {
    fn from(error: io::Error) -> Self {
        ExtractError::Io(error)
    }
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

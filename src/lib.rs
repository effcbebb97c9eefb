pub mod errors;
pub mod config;
pub mod utils;
pub mod extractor;
pub mod commands;

pub use errors::{ExtractError, ExtractResult};
pub use config::ExtractConfig;
pub use extractor::{icon_table, CropBox, CropOutcome, CropSpec, IconExtractor, Region};

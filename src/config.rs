use std::path::PathBuf;

/// Default location of the source image
pub const DEFAULT_INPUT_PATH: &str = "public/pyramid.png";
/// Default directory for the extracted icons
pub const DEFAULT_OUTPUT_DIR: &str = "public";
/// Default log file
pub const DEFAULT_LOG_FILE: &str = "iconslicer.log";

/// Paths and switches for one extraction run
///
/// The defaults follow the site asset layout, so a run with no
/// arguments reads `public/pyramid.png` and writes the icons beside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Source image to crop from
    pub input_path: PathBuf,

    /// Directory the icons are written into; must already exist
    pub output_dir: PathBuf,

    /// File that receives every log record and report line
    pub log_file: PathBuf,

    /// Echo debug records to the console
    pub verbose: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            verbose: false,
        }
    }
}

impl ExtractConfig {
    // Create a new instance
    pub fn new() -> Self {
        Self::default()
    }

    // Set source image path
    pub fn set_input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = path.into();
        self
    }

    // Set output directory
    pub fn set_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    // Set log file path
    pub fn set_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    pub fn set_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

//! Extraction run configuration

use std::path::PathBuf;

use crate::filter::PmidRange;

/// Runtime configuration for an extraction run
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory under which per-package subdirectories are created
    pub output_dir: PathBuf,
    /// Optional PMID bounds; citations outside are skipped, not errors
    pub range: PmidRange,
    /// Join structured-abstract sections with spaces instead of newlines
    pub single_line_abstract: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("texts"),
            range: PmidRange::default(),
            single_line_abstract: false,
        }
    }
}

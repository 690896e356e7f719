//! Input stream opening with transparent gzip decompression

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;

use crate::error::ExtractError;

/// Open an input file for XML tokenization.
///
/// A `.gz` suffix selects streaming decompression; anything else is read
/// as-is. Either way the whole file is never buffered in memory, since
/// baseline files can run to gigabytes uncompressed.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>, ExtractError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(BufReader::new(
            file,
        )))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

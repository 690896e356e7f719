//! Per-record text file output

use std::path::{Path, PathBuf};

use crate::error::ExtractError;

/// Write one record as `<package_dir>/<pmid>.txt`.
///
/// First line is the title; the abstract follows only when non-empty.
/// Content is UTF-8 regardless of platform defaults (Rust strings are
/// written as raw bytes, no encoding conversion).
pub fn write_record(
    package_dir: &Path,
    pmid: &str,
    title: &str,
    abstract_text: &str,
) -> Result<PathBuf, ExtractError> {
    let path = package_dir.join(format!("{pmid}.txt"));

    let mut content = String::with_capacity(title.len() + abstract_text.len() + 2);
    content.push_str(title);
    content.push('\n');
    if !abstract_text.is_empty() {
        content.push_str(abstract_text);
        content.push('\n');
    }

    std::fs::write(&path, content.as_bytes())?;
    Ok(path)
}

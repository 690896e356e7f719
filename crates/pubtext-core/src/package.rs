//! Distribution filename classification
//!
//! Baseline files are named like `medline12n0123.xml` or
//! `pubmed26n0001.xml.gz`. The stem doubles as the per-file output
//! subdirectory ("package") name, so an unrecognized name is a hard error
//! rather than something to guess around.

use crate::error::ExtractError;

/// Extract the package id from an input base name.
///
/// Accepts `<alphabetic prefix><2 digits>n<digits>.xml` with an optional
/// `.gz` suffix and returns the stem without extensions.
pub fn package_id(filename: &str) -> Result<String, ExtractError> {
    parse_stem(filename).ok_or_else(|| ExtractError::BadFilename {
        name: filename.to_string(),
    })
}

fn parse_stem(filename: &str) -> Option<String> {
    let base = filename.strip_suffix(".gz").unwrap_or(filename);
    let stem = base.strip_suffix(".xml")?;

    // stem = <prefix><YY>n<sequence>; the sequence separator is the last 'n'
    let n_pos = stem.rfind('n')?;
    let (head, tail) = stem.split_at(n_pos);
    let sequence = &tail[1..];
    if sequence.is_empty() || !sequence.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if head.len() < 3 {
        return None;
    }
    let (prefix, year) = head.split_at(head.len() - 2);
    if !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !prefix.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }

    Some(stem.to_string())
}

//! Abstract text assembly
//!
//! Single-segment abstracts pass through verbatim. Structured abstracts
//! (multiple `<AbstractText>` sections, in the data since 2011) get their
//! `Label` attributes folded into the text, one section per line by
//! default or space-joined in single-line mode.

use crate::error::ExtractError;
use crate::parser::Segment;

/// Placeholder label marking an empty section that must be dropped rather
/// than rendered.
pub const UNLABELLED: &str = "UNLABELLED";

/// Assemble the abstract text from the segments of a chosen block.
///
/// The block exists, so an empty segment list is invalid input. The
/// result may still be empty (single segment with no text).
pub fn assemble_abstract(
    segments: &[Segment],
    pmid: &str,
    single_line: bool,
) -> Result<String, ExtractError> {
    if segments.is_empty() {
        return Err(ExtractError::EmptyAbstract {
            pmid: pmid.to_string(),
        });
    }

    if segments.len() == 1 {
        return Ok(segments[0].text.clone());
    }

    log::info!("multiple <AbstractText>s for {pmid}");
    let sep = if single_line { " " } else { "\n" };

    let mut sections = Vec::new();
    for segment in segments {
        let empty = segment.text.trim().is_empty();

        // Known data artifact: an empty section labeled UNLABELLED
        // (e.g. PMID 20619000 in the 2012 baseline) is dropped entirely.
        if empty && segment.label.as_deref() == Some(UNLABELLED) {
            log::info!("skipping empty <AbstractText> with label \"UNLABELLED\" in {pmid}");
            continue;
        }

        let mut section = String::new();
        match &segment.label {
            Some(label) => {
                section.push_str(label);
                section.push(':');
            }
            None => {
                log::warn!("missing 'Label' for one of multiple <AbstractText>s in {pmid}");
            }
        }

        if empty {
            log::warn!("empty text for one of multiple <AbstractText>s in {pmid}");
        } else {
            if !section.is_empty() {
                section.push_str(sep);
            }
            section.push_str(&segment.text);
        }

        sections.push(section);
    }

    Ok(sections.join(sep))
}

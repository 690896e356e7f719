//! Per-file extraction driver
//!
//! Validation order per citation matters: PMID cardinality and numeric
//! form first, then the range filter, and only then the Article/Title
//! checks, so filtered-out citations never pay for validation they don't
//! need.

use std::path::Path;

use crate::assemble::assemble_abstract;
use crate::config::Config;
use crate::emit::write_record;
use crate::error::ExtractError;
use crate::package::package_id;
use crate::parser::{RawCitation, Segment, for_each_citation};
use crate::stream::open_input;

/// Run-wide counters, threaded through the run and reported at the end.
#[derive(Debug, Default)]
pub struct Summary {
    /// Records written
    pub output: usize,
    /// Records skipped by the PMID range filter
    pub skipped: usize,
}

/// Process input files strictly in order; any fatal error stops the run.
/// Files already written stay on disk (no rollback).
pub fn run(config: &Config, files: &[impl AsRef<Path>]) -> Result<Summary, ExtractError> {
    let mut summary = Summary::default();
    for path in files {
        process_file(path.as_ref(), config, &mut summary)?;
    }
    Ok(summary)
}

/// Extract one distribution file into its package directory.
pub fn process_file(
    path: &Path,
    config: &Config,
    summary: &mut Summary,
) -> Result<(), ExtractError> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| ExtractError::BadFilename {
            name: path.display().to_string(),
        })?;
    let package = package_id(filename)?;

    // One subdirectory per input file; a pre-existing one means a previous
    // run already touched this package, and overwriting would hide that.
    let package_dir = config.output_dir.join(&package);
    if package_dir.exists() {
        return Err(ExtractError::OutputDirExists { path: package_dir });
    }
    std::fs::create_dir_all(&config.output_dir)?;
    std::fs::create_dir(&package_dir)?;

    log::info!("processing {filename} into {}", package_dir.display());

    let source = open_input(path)?;
    for_each_citation(source, |citation| {
        process_citation(citation, &package_dir, config, summary)
    })
}

fn process_citation(
    citation: RawCitation,
    package_dir: &Path,
    config: &Config,
    summary: &mut Summary,
) -> Result<(), ExtractError> {
    if citation.pmids.len() != 1 {
        return Err(ExtractError::PmidCardinality {
            count: citation.pmids.len(),
        });
    }
    let pmid_text = &citation.pmids[0];
    let pmid = parse_pmid(pmid_text)?;

    if config.range.excludes(pmid) {
        log::info!("skipping {pmid} (outside configured PMID range)");
        summary.skipped += 1;
        return Ok(());
    }

    if citation.articles.len() != 1 {
        return Err(ExtractError::ArticleCardinality {
            pmid: pmid_text.clone(),
            count: citation.articles.len(),
        });
    }
    let article = &citation.articles[0];

    if article.titles.len() != 1 {
        return Err(ExtractError::TitleCardinality {
            pmid: pmid_text.clone(),
            count: article.titles.len(),
        });
    }
    if article.abstracts.len() > 1 {
        return Err(ExtractError::AbstractCardinality {
            pmid: pmid_text.clone(),
            count: article.abstracts.len(),
        });
    }

    let segments = choose_abstract(&citation, pmid_text);
    let abstract_text = match segments {
        Some(segments) => assemble_abstract(segments, pmid_text, config.single_line_abstract)?,
        None => String::new(),
    };
    if abstract_text.is_empty() {
        log::info!("no abstract for {pmid_text}");
    }

    write_record(package_dir, pmid_text, &article.titles[0], &abstract_text)?;
    summary.output += 1;
    Ok(())
}

/// Prefer the Article's Abstract; fall back to the first citation-level
/// OtherAbstract, which some records use instead.
fn choose_abstract<'a>(citation: &'a RawCitation, pmid: &str) -> Option<&'a [Segment]> {
    if let Some(segments) = citation.articles[0].abstracts.first() {
        return Some(segments);
    }
    if citation.other_abstracts.len() > 1 {
        log::info!(
            "{} 'other' abstracts for PMID {pmid}; only using first",
            citation.other_abstracts.len()
        );
    }
    citation.other_abstracts.first().map(Vec::as_slice)
}

fn parse_pmid(text: &str) -> Result<u64, ExtractError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ExtractError::BadPmid {
            text: text.to_string(),
        });
    }
    text.parse().map_err(|_| ExtractError::BadPmid {
        text: text.to_string(),
    })
}

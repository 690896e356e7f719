//! Fatal error conditions for the extraction run
//!
//! Every variant aborts the whole run when it propagates to the binary;
//! there is no skip-and-continue for malformed records.

use std::path::PathBuf;

/// Error raised while extracting texts from a distribution file.
///
/// Cardinality variants carry the PMID (when known) so the diagnostic
/// identifies the offending citation.
#[derive(Debug)]
pub enum ExtractError {
    /// Input base name does not match the distribution naming scheme.
    BadFilename { name: String },
    /// Package output directory already exists (likely a partial earlier run).
    OutputDirExists { path: PathBuf },
    /// Citation did not have exactly one PMID child.
    PmidCardinality { count: usize },
    /// PMID text is not purely numeric.
    BadPmid { text: String },
    /// Citation did not have exactly one Article child.
    ArticleCardinality { pmid: String, count: usize },
    /// Article did not have exactly one ArticleTitle child.
    TitleCardinality { pmid: String, count: usize },
    /// Article had more than one Abstract child.
    AbstractCardinality { pmid: String, count: usize },
    /// An Abstract/OtherAbstract block with no AbstractText children.
    EmptyAbstract { pmid: String },
    Xml(quick_xml::Error),
    Io(std::io::Error),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadFilename { name } => write!(f, "unexpected filename '{name}'"),
            Self::OutputDirExists { path } => {
                write!(f, "output directory {} already exists", path.display())
            }
            Self::PmidCardinality { count } => write!(f, "expected 1 PMID, got {count}"),
            Self::BadPmid { text } => write!(f, "unexpected characters in PMID: '{text}'"),
            Self::ArticleCardinality { pmid, count } => {
                write!(f, "{count} articles for PMID {pmid}")
            }
            Self::TitleCardinality { pmid, count } => write!(f, "{count} titles for PMID {pmid}"),
            Self::AbstractCardinality { pmid, count } => {
                write!(f, "{count} abstracts for PMID {pmid}")
            }
            Self::EmptyAbstract { pmid } => write!(f, "0 abstract texts for PMID {pmid}"),
            Self::Xml(e) => write!(f, "XML parse error: {e}"),
            Self::Io(e) => write!(f, "IO: {e}"),
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<quick_xml::Error> for ExtractError {
    fn from(e: quick_xml::Error) -> Self {
        Self::Xml(e)
    }
}

impl From<std::io::Error> for ExtractError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl ExtractError {
    /// Whether the error describes invalid input data (as opposed to an
    /// environmental failure such as I/O or an output-path collision).
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::OutputDirExists { .. } | Self::Io(_))
    }
}

//! pubtext - extract per-document title and abstract texts
//!
//! Turns PubMed baseline distribution XML files into one plain-text file
//! per citation under `<output-dir>/<package>/<pmid>.txt`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use pubtext_core::{Config, PmidRange};

#[derive(Parser)]
#[command(name = "pubtext")]
#[command(about = "Extract per-document title and abstract texts from PubMed distribution XML files")]
#[command(version)]
struct Cli {
    /// Input PubMed distribution XML file(s), plain or gzip-compressed
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Base output directory
    #[arg(short, long, default_value = "texts", value_name = "DIR")]
    output_dir: PathBuf,

    /// Only process citations with PMIDs greater than the given value
    #[arg(long, value_name = "PMID")]
    pmid_greater_than: Option<u64>,

    /// Only process citations with PMIDs lower than the given value
    #[arg(long, value_name = "PMID")]
    pmid_lower_than: Option<u64>,

    /// Always output structured abstracts on a single line
    #[arg(short = 's', long)]
    single_line_abstract: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    pubtext_core::init_logging(cli.verbose);

    let config = Config {
        output_dir: cli.output_dir,
        range: PmidRange {
            greater_than: cli.pmid_greater_than,
            lower_than: cli.pmid_lower_than,
        },
        single_line_abstract: cli.single_line_abstract,
    };

    let summary = pubtext_core::run(&config, &cli.files)?;

    eprintln!(
        "Done. Output texts for {} PMIDs, skipped {}.",
        summary.output, summary.skipped
    );
    Ok(())
}

//! pubtext-core - PubMed title/abstract text extraction
//!
//! Streams citations out of PubMed baseline distribution XML files (plain
//! or gzipped) and writes one UTF-8 text file per citation: first line is
//! the title, the rest the abstract. Structured abstracts get their
//! section labels folded into the text.
//!
//! # Example
//!
//! ```ignore
//! use pubtext_core::{Config, run};
//!
//! let config = Config::default();
//! let summary = run(&config, &["pubmed26n0001.xml.gz"])?;
//! eprintln!("wrote {} records", summary.output);
//! ```

pub mod assemble;
pub mod config;
pub mod emit;
pub mod error;
pub mod filter;
pub mod logging;
pub mod package;
pub mod parser;
pub mod runner;
pub mod stream;

// Re-exports
pub use config::Config;
pub use error::ExtractError;
pub use filter::PmidRange;
pub use logging::init_logging;
pub use runner::{Summary, run};

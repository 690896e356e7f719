//! Logging setup
//!
//! Diagnostics go to stderr as `[LEVEL] message` lines. Informational
//! notes use `log::info!` and only show up with `--verbose`; warnings
//! about questionable-but-tolerated input always show.

use std::io::Write;

fn level_label(level: log::Level) -> &'static str {
    match level {
        log::Level::Error => "ERROR",
        log::Level::Warn => "WARN ",
        log::Level::Info => "NOTE ",
        log::Level::Debug => "DEBUG",
        log::Level::Trace => "TRACE",
    }
}

/// Initialize stderr logging; `verbose` raises the default filter from
/// `warn` to `info`. `RUST_LOG` still overrides either.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| writeln!(buf, "[{}] {}", level_label(record.level()), record.args()))
        .init();
}

use colored::Colorize;
use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::Write;

/// Initialize the process-wide logger. Warnings and errors are prefixed with a
/// colored level tag; info/debug lines carry only the crate tag. `verbose`
/// raises this crate's filter to Debug; dependencies stay at Warn.
pub fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    Builder::from_default_env()
        .filter_level(LevelFilter::Warn)
        .filter_module(env!("CARGO_PKG_NAME"), level)
        .format(|buf, record| {
            let tag = env!("CARGO_PKG_NAME").cyan();
            match record.level() {
                Level::Error => writeln!(buf, "[{} {}] {}", tag, "ERROR".red(), record.args()),
                Level::Warn => writeln!(buf, "[{} {}] {}", tag, "WARN".yellow(), record.args()),
                _ => writeln!(buf, "[{}] {}", tag, record.args()),
            }
        })
        .init();
}

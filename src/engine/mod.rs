//! Engine module: classification, per-file reduction, merge, reporting, CLI.

pub mod arg_parser;
pub mod classify;
pub mod cli;
pub mod merge;
pub mod progress;
pub mod report;
pub mod summarize;
pub mod tools;

pub use arg_parser::Cli;
pub use classify::{Classified, Classify, DefaultClassifier, LogKeys, truncate_chars};
pub use cli::handle_run;
pub use merge::{finalize, merge_summary};
pub use report::{format_bytes, print_summary, to_json};
pub use summarize::summarize_file;
pub use tools::{glob_match, should_include_file};

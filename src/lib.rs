//! logsum: parallel summarizer for folders of line-delimited JSON log files.
//!
//! Each file is reduced to a [`FileSummary`] by a pool worker; the coordinator
//! folds them, in whatever order they complete, into one [`GlobalSummary`]
//! whose merge is commutative and associative, then sorts each category's
//! message groups by count for presentation.

pub mod engine;
pub mod pipeline;
pub mod summary;
pub mod types;
pub mod utils;

/// Re-export types for API
pub use types::*;

/// Result alias used by the public logsum API
pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub use summary::{summarize_dir, summarize_dir_with};

//! Pipeline components: channels, enumeration, worker pool, fold loop.

pub mod context;
pub mod error_handler;
pub mod orchestrator;
pub mod walk;
pub mod workers;

pub use context::{CancelFlag, Outcome, PipelineChannels, create_pipeline_channels};
pub use error_handler::check_for_failures;
pub use orchestrator::{FoldResult, fold_summaries};
pub use walk::list_log_files;
pub use workers::spawn_summary_workers;

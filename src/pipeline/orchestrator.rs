//! Fan-out/fan-in coordinator: feed the backlog, drain outcomes, fold.
//!
//! The global summary is mutated only inside the drain loop here, never by a
//! worker, so the aggregate needs no lock.

use anyhow::Result;
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread::JoinHandle;

use crate::engine::classify::Classify;
use crate::engine::merge::merge_summary;
use crate::engine::progress::{ProgressBar, update_progress_bar};
use crate::pipeline::context::{CancelFlag, create_pipeline_channels};
use crate::pipeline::workers::spawn_summary_workers;
use crate::types::{FileFailure, GlobalSummary, Opts};
use crate::utils::config::effective_num_threads;

/// Everything the run lifecycle needs after the fold: the summary, the
/// failures seen (collect mode), and the first failure (strict mode).
pub struct FoldResult {
    pub global: GlobalSummary,
    pub failures: Vec<FileFailure>,
    pub first_error: Option<FileFailure>,
    pub outcomes: usize,
}

/// Run the pool over `paths` and fold every successful summary into one
/// [`GlobalSummary`].
///
/// All paths are submitted up front (FIFO admission; the channel holds the
/// whole backlog so submission never blocks). Completion order is whatever
/// the workers produce. In strict mode the failing worker records the first
/// failure and raises `cancel`; peers observe the flag and exit without
/// taking further paths, leaving the rest of the backlog unprocessed.
pub fn fold_summaries(
    paths: Vec<PathBuf>,
    opts: &Opts,
    classifier: Arc<dyn Classify>,
    cancel: &CancelFlag,
    bar: Option<&ProgressBar>,
) -> Result<FoldResult> {
    let backlog = paths.len();
    let mut global = GlobalSummary::default();
    if backlog == 0 {
        // Zero files is a successful run with sentinel extremes, not an error.
        return Ok(FoldResult {
            global,
            failures: Vec::new(),
            first_error: None,
            outcomes: 0,
        });
    }

    let num_threads =
        effective_num_threads(opts.num_threads, rayon::current_num_threads(), backlog);
    debug!("summarizing {} files on {} workers", backlog, num_threads);

    let channels = create_pipeline_channels(backlog, Arc::clone(cancel));

    for path in paths {
        channels
            .path_tx
            .send(path)
            .map_err(|_| anyhow::anyhow!("worker pool closed before submission finished"))?;
    }
    drop(channels.path_tx);

    let handles = spawn_summary_workers(
        channels.path_rx,
        &channels.outcome_tx,
        classifier,
        &channels.cancel,
        opts.strict,
        &channels.first_error,
        num_threads,
    );
    // Dropping the last sender closes the outcome channel once workers exit.
    drop(channels.outcome_tx);

    let mut failures = Vec::new();
    let mut outcomes = 0_usize;
    while let Ok(outcome) = channels.outcome_rx.recv() {
        outcomes += 1;
        match outcome {
            Ok(summary) => merge_summary(&mut global, &summary),
            Err(failure) => failures.push(failure),
        }
        if let Some(bar) = bar {
            update_progress_bar(bar, 1);
        }
    }
    debug!("outcome channel closed after {} of {} outcomes", outcomes, backlog);

    join_workers(handles)?;

    let first_error = channels.first_error.lock().unwrap().take();
    Ok(FoldResult {
        global,
        failures,
        first_error,
        outcomes,
    })
}

fn join_workers(handles: Vec<JoinHandle<()>>) -> Result<()> {
    for h in handles {
        h.join()
            .map_err(|_| anyhow::anyhow!("summary worker panicked"))?;
    }
    Ok(())
}

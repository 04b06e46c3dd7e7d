//! The summary run: enumerate, fan out, fold, finalize, render.

use anyhow::{Context, Result};
use log::debug;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::engine::classify::{Classify, DefaultClassifier};
use crate::engine::merge::finalize;
use crate::engine::progress::create_progress_bar;
use crate::engine::report::{print_summary, to_json};
use crate::pipeline::{CancelFlag, check_for_failures, fold_summaries, list_log_files};
use crate::types::{GlobalSummary, Opts, SortedSummary};

/// Summarize every log file under `root` and print the report.
/// This is what the CLI runs; it wires Ctrl+C to the run's cancel flag, so it
/// must be called at most once per process. Library callers wanting the data
/// without rendering use [`summarize_dir_with`] and own their cancel flag.
pub fn summarize_dir(root: &Path, opts: &Opts) -> Result<(GlobalSummary, SortedSummary)> {
    let cancel: CancelFlag = Arc::new(AtomicBool::new(false));
    let cancel_handler = Arc::clone(&cancel);
    ctrlc::set_handler(move || {
        cancel_handler.store(true, Ordering::Relaxed);
    })
    .context("set Ctrl+C handler")?;

    let classifier: Arc<dyn Classify> = Arc::new(DefaultClassifier::new(opts.prefix_len));
    let (global, sorted) = summarize_dir_with(root, opts, classifier, &cancel)?;

    if opts.json {
        println!("{}", to_json(&global, &sorted)?);
    } else {
        print_summary(&global, &sorted, opts.top);
    }
    Ok((global, sorted))
}

/// Summarize with a caller-supplied classifier and cancel flag; no rendering.
pub fn summarize_dir_with(
    root: &Path,
    opts: &Opts,
    classifier: Arc<dyn Classify>,
    cancel: &CancelFlag,
) -> Result<(GlobalSummary, SortedSummary)> {
    let paths = list_log_files(root, opts)?;

    let bar = (opts.verbose && !paths.is_empty())
        .then(|| create_progress_bar(paths.len(), "Summarizing"));

    let result = fold_summaries(paths, opts, classifier, cancel, bar.as_ref())?;
    if cancel.load(Ordering::Relaxed) && result.first_error.is_none() {
        anyhow::bail!("summary cancelled by user");
    }
    check_for_failures(opts, &result)?;

    debug!(
        "folded {} outcomes, total size {} bytes",
        result.outcomes, result.global.size
    );
    let sorted = finalize(&result.global);
    Ok((result.global, sorted))
}

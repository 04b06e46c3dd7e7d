//! The worker pool: bounded parallel execution slots, one task per file.
//! Knows nothing about summary semantics beyond calling the summarizer.

use crossbeam_channel::{Receiver, Sender};
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use crate::engine::classify::Classify;
use crate::engine::summarize::summarize_file;
use crate::pipeline::context::{CancelFlag, Outcome};
use crate::types::FileFailure;

/// One worker: pull the next pending path whenever idle, deliver exactly one
/// outcome per path. A raised cancel flag stops the loop before the next task;
/// the task already in flight runs to completion. In strict mode a failing
/// worker records the first failure and raises the flag itself, so peers stop
/// without waiting for the coordinator to drain the outcome.
fn worker_loop(
    path_rx: Receiver<PathBuf>,
    outcome_tx: Sender<Outcome>,
    classifier: Arc<dyn Classify>,
    cancel: CancelFlag,
    strict: bool,
    first_error: Arc<Mutex<Option<FileFailure>>>,
) {
    while let Ok(path) = path_rx.recv() {
        if cancel.load(Ordering::Relaxed) {
            break;
        }
        let outcome = summarize_file(&path, classifier.as_ref()).map_err(|err| FileFailure {
            path,
            error: format!("{err:#}"),
        });
        if strict && let Err(failure) = &outcome {
            let mut first = first_error.lock().unwrap();
            if first.is_none() {
                *first = Some(failure.clone());
            }
            cancel.store(true, Ordering::Relaxed);
        }
        if outcome_tx.send(outcome).is_err() {
            break;
        }
    }
    drop(outcome_tx);
}

/// Spawn `num_threads` workers. The caller must drop its own copies of
/// `path_rx`/`outcome_tx` after this so channel closure propagates: the
/// coordinator's drain loop ends when the last worker exits.
pub fn spawn_summary_workers(
    path_rx: Receiver<PathBuf>,
    outcome_tx: &Sender<Outcome>,
    classifier: Arc<dyn Classify>,
    cancel: &CancelFlag,
    strict: bool,
    first_error: &Arc<Mutex<Option<FileFailure>>>,
    num_threads: usize,
) -> Vec<JoinHandle<()>> {
    (0..num_threads)
        .map(|_| {
            let path_rx = path_rx.clone();
            let outcome_tx = outcome_tx.clone();
            let classifier = Arc::clone(&classifier);
            let cancel = Arc::clone(cancel);
            let first_error = Arc::clone(first_error);
            thread::spawn(move || {
                worker_loop(path_rx, outcome_tx, classifier, cancel, strict, first_error)
            })
        })
        .collect()
}

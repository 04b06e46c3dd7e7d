//! Pipeline channels and shared failure state.

use crossbeam_channel::{Receiver, Sender, bounded};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use crate::types::{FileFailure, FileSummary};

/// One task outcome, delivered exactly once per submitted file.
pub type Outcome = Result<FileSummary, FileFailure>;

/// Shared cancel flag: raised by Ctrl+C or by a failing worker in strict
/// mode. Workers check it before taking the next task.
pub type CancelFlag = Arc<AtomicBool>;

/// Channels and shared state for one run. The path channel capacity equals the
/// backlog size so submitting every task up front never blocks the coordinator.
pub struct PipelineChannels {
    pub path_tx: Sender<PathBuf>,
    pub path_rx: Receiver<PathBuf>,
    pub outcome_tx: Sender<Outcome>,
    pub outcome_rx: Receiver<Outcome>,
    pub cancel: CancelFlag,
    /// First failure in strict mode; written by the failing worker, read by
    /// the coordinator after the drain.
    pub first_error: Arc<Mutex<Option<FileFailure>>>,
}

pub fn create_pipeline_channels(backlog: usize, cancel: CancelFlag) -> PipelineChannels {
    let (path_tx, path_rx) = bounded::<PathBuf>(backlog.max(1));
    let (outcome_tx, outcome_rx) = bounded::<Outcome>(backlog.max(1));
    PipelineChannels {
        path_tx,
        path_rx,
        outcome_tx,
        outcome_rx,
        cancel,
        first_error: Arc::new(Mutex::new(None)),
    }
}

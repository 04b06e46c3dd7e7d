//! Run-level failure policy: fail fast (strict) or collect-then-report.

use anyhow::Result;
use log::{debug, warn};

use crate::pipeline::orchestrator::FoldResult;
use crate::types::Opts;

/// Apply the configured failure policy after the fold.
///
/// Strict: the first recorded failure aborts the run with an error naming the
/// file (cancellation already stopped the remaining workers). Default: log
/// the failure count (paths at debug level) and let the summary stand.
pub fn check_for_failures(opts: &Opts, result: &FoldResult) -> Result<()> {
    if opts.strict
        && let Some(first) = &result.first_error
    {
        anyhow::bail!("failed to summarize {}: {}", first.path.display(), first.error);
    }
    if !result.failures.is_empty() {
        warn!(
            "skipped {} unreadable files; summary covers the remaining {}",
            result.failures.len(),
            result.outcomes - result.failures.len()
        );
        for failure in &result.failures {
            debug!("  skipped {}: {}", failure.path.display(), failure.error);
        }
    }
    Ok(())
}

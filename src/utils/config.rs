//! Application configuration constants.
//! Tuning and thresholds in one place.

/// Prefix length used to truncate a generic message into its group key.
/// Collapses near-duplicate lines into one bucket, trading fidelity for compactness.
pub const DEFAULT_MSG_PREFIX_LEN: usize = 25;

/// Rows shown per category table (presentation policy, not a core invariant).
pub const DEFAULT_TOP_GROUPS: usize = 30;

// ---- Worker threads ----

/// Default parallelism: `max(1, available − 1)`, leaving one thread for the
/// coordinator; callers additionally cap at the task count.
pub fn default_num_threads(available: usize) -> usize {
    available.saturating_sub(1).max(1)
}

/// Effective worker count for `file_count` tasks: the override (or the default
/// derived from `available`), floored at 1 and never more workers than tasks.
pub fn effective_num_threads(
    override_threads: Option<usize>,
    available: usize,
    file_count: usize,
) -> usize {
    let wanted = match override_threads {
        Some(n) => n.max(1),
        None => default_num_threads(available),
    };
    wanted.min(file_count.max(1))
}

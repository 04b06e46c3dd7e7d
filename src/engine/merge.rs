//! Cross-file fold: commutative, associative merge of per-file summaries
//! into the global one, plus the presentation-order finalizer.
//!
//! Every step is a pointwise count sum, a pointwise `has_errors` OR, a size
//! sum, or a total-order min/max, so the result is independent of the order
//! file summaries arrive in.

use crate::types::{FileSummary, GlobalSummary, SortedSummary};

/// Fold one [`FileSummary`] into the running [`GlobalSummary`].
/// Called only from the coordinator's drain loop (single writer).
pub fn merge_summary(global: &mut GlobalSummary, file: &FileSummary) {
    if let Some(min) = &file.min_time
        && global.min_time.as_deref().is_none_or(|g| min.as_str() < g)
    {
        global.min_time = Some(min.clone());
        global.min_time_file = Some(file.path.clone());
    }

    if let Some(max) = &file.max_time
        && global.max_time.as_deref().is_none_or(|g| max.as_str() > g)
    {
        global.max_time = Some(max.clone());
        global.max_time_file = Some(file.path.clone());
    }

    global.size += file.size;

    global.maps.http_codes.merge_from(&file.maps.http_codes);
    global.maps.jobs.merge_from(&file.maps.jobs);
    global.maps.messages.merge_from(&file.maps.messages);
    global.maps.plugins.merge_from(&file.maps.plugins);
}

/// Order each category's groups by count descending. The sort is stable, so
/// ties keep the global map's first-seen order; across runs with a different
/// completion order only the set and counts are guaranteed, not tie order.
pub fn finalize(global: &GlobalSummary) -> SortedSummary {
    SortedSummary {
        http_codes: global.maps.http_codes.sorted(),
        jobs: global.maps.jobs.sorted(),
        messages: global.maps.messages.sorted(),
        plugins: global.maps.plugins.sorted(),
    }
}

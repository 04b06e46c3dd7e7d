//! Per-file reduction: one file path in, one [`FileSummary`] out.
//! Pure function of file contents; runs inside a pool worker.

use anyhow::{Context, Result};
use std::path::Path;

use crate::engine::classify::{Classify, LogKeys, parse_line};
use crate::types::FileSummary;

/// Reduce one log file. An unreadable or missing file is the only fatal
/// condition; malformed lines are logged and skipped.
pub fn summarize_file(path: &Path, classifier: &dyn Classify) -> Result<FileSummary> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read log file {}", path.display()))?;
    let content = String::from_utf8_lossy(&bytes);

    let mut summary = FileSummary {
        path: path.to_path_buf(),
        size: bytes.len() as u64,
        ..Default::default()
    };

    for (idx, line) in content.split('\n').enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        let Some(record) = parse_line(line, path, idx + 1) else {
            continue;
        };

        // Every decoded record moves the time extremes, bucketed or not.
        if let Some(ts) = record.get(LogKeys::TIMESTAMP).filter(|t| !t.is_empty()) {
            track_extremes(&mut summary, ts);
        }

        if let Some(hit) = classifier.classify(&record) {
            summary
                .maps
                .map_mut(hit.category)
                .record(&hit.group_key, &hit.message, record.is_error());
        }
    }

    Ok(summary)
}

/// Lexicographic running min/max; the first timestamped record seeds both.
fn track_extremes(summary: &mut FileSummary, ts: &str) {
    match &summary.min_time {
        Some(min) if ts >= min.as_str() => {}
        _ => summary.min_time = Some(ts.to_string()),
    }
    match &summary.max_time {
        Some(max) if ts <= max.as_str() => {}
        _ => summary.max_time = Some(ts.to_string()),
    }
}

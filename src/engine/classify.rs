//! Record decoding and classification into the four category buckets.

use log::warn;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;

use crate::types::{Category, LogRecord};

/// Well-known field names in a decoded record.
pub struct LogKeys;

impl LogKeys {
    pub const MSG: &'static str = "msg";
    pub const LEVEL: &'static str = "level";
    pub const ERROR: &'static str = "error";
    pub const TIMESTAMP: &'static str = "timestamp";
    pub const STATUS: &'static str = "status";
    pub const STATUS_CODE: &'static str = "statusCode";
    pub const JOB_ID: &'static str = "jobId";
    pub const JOB: &'static str = "job";
    pub const PLUGIN: &'static str = "plugin";
}

/// Where a record landed: its bucket, the key it groups under, and the
/// message shown for that group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Classified {
    pub category: Category,
    pub group_key: String,
    pub message: String,
}

/// Schema-specific classification, pluggable so alternate log schemas can
/// reuse the pipeline unchanged.
pub trait Classify: Send + Sync {
    fn classify(&self, record: &LogRecord) -> Option<Classified>;
}

/// Default schema: HTTP status beats job id beats plugin beats generic
/// message. Generic messages group under a fixed-length prefix so
/// near-duplicate lines collapse into one bucket.
#[derive(Clone, Debug)]
pub struct DefaultClassifier {
    pub prefix_len: usize,
}

impl DefaultClassifier {
    pub fn new(prefix_len: usize) -> Self {
        Self { prefix_len }
    }
}

impl Classify for DefaultClassifier {
    fn classify(&self, record: &LogRecord) -> Option<Classified> {
        if let Some(code) = record
            .get(LogKeys::STATUS)
            .or_else(|| record.get(LogKeys::STATUS_CODE))
            .filter(|c| looks_like_http_code(c))
        {
            return Some(Classified {
                category: Category::HttpCode,
                group_key: code.to_string(),
                message: format!("HTTP {code}"),
            });
        }

        if let Some(job) = record
            .get(LogKeys::JOB_ID)
            .or_else(|| record.get(LogKeys::JOB))
            .filter(|j| !j.is_empty())
        {
            return Some(Classified {
                category: Category::Job,
                group_key: job.to_string(),
                message: job.to_string(),
            });
        }

        if let Some(plugin) = record.get(LogKeys::PLUGIN).filter(|p| !p.is_empty()) {
            return Some(Classified {
                category: Category::Plugin,
                group_key: plugin.to_string(),
                message: plugin.to_string(),
            });
        }

        let msg = record.get(LogKeys::MSG).filter(|m| !m.is_empty())?;
        let key = truncate_chars(msg, self.prefix_len);
        Some(Classified {
            category: Category::Message,
            message: key.clone(),
            group_key: key,
        })
    }
}

/// Three ASCII digits, e.g. "200", "404", "503".
fn looks_like_http_code(s: &str) -> bool {
    s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit())
}

/// First `max_chars` characters of `s` (char boundaries, not bytes).
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

/// Decode one line into a [`LogRecord`], stringifying non-string JSON values
/// and attaching the raw line. `None` for anything that is not a JSON object;
/// the caller skips the line after the diagnostic logged here.
pub fn parse_line(line: &str, path: &Path, line_no: usize) -> Option<LogRecord> {
    match serde_json::from_str::<Value>(line) {
        Ok(Value::Object(obj)) => {
            let fields: HashMap<String, String> = obj
                .into_iter()
                .map(|(k, v)| match v {
                    Value::String(s) => (k, s),
                    other => (k, other.to_string()),
                })
                .collect();
            Some(LogRecord {
                fields,
                raw: line.to_string(),
            })
        }
        Ok(_) => {
            warn!(
                "skipping non-object line {} in {}",
                line_no,
                path.display()
            );
            None
        }
        Err(err) => {
            warn!(
                "failed to parse line {} in {}: {}",
                line_no,
                path.display(),
                err
            );
            None
        }
    }
}

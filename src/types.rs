//! Public data model for the logsum API and pipeline.

use serde::Serialize;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::PathBuf;

/// One decoded log line: field name → string value, plus the raw line text.
/// Ephemeral; consumed during summarization and never retained.
#[derive(Clone, Debug)]
pub struct LogRecord {
    pub fields: HashMap<String, String>,
    pub raw: String,
}

impl LogRecord {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// True when the `level` field is "error" or the `error` field is non-empty.
    pub fn is_error(&self) -> bool {
        self.get(crate::engine::classify::LogKeys::LEVEL) == Some("error")
            || self
                .get(crate::engine::classify::LogKeys::ERROR)
                .is_some_and(|e| !e.is_empty())
    }
}

/// Aggregate for all log lines that mapped to one group key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GroupedMessage {
    pub message: String,
    pub count: u64,
    pub has_errors: bool,
}

/// The four fixed classification buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    HttpCode,
    Job,
    Message,
    Plugin,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::HttpCode,
        Category::Job,
        Category::Message,
        Category::Plugin,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::HttpCode => "HTTP Codes",
            Category::Job => "Jobs",
            Category::Message => "Top Logs",
            Category::Plugin => "Plugins",
        }
    }
}

/// Insertion-ordered map of group key → [`GroupedMessage`].
/// Keys are unique; order records first-seen so count ties sort deterministically
/// for a fixed merge order.
#[derive(Clone, Debug, Default)]
pub struct CategoryMap {
    entries: HashMap<String, GroupedMessage>,
    order: Vec<String>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&GroupedMessage> {
        self.entries.get(key)
    }

    /// Get the entry for `key`, inserting a zeroed [`GroupedMessage`] carrying
    /// `message` when the key is unseen.
    pub fn get_or_insert(&mut self, key: &str, message: &str) -> &mut GroupedMessage {
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(e) => e.into_mut(),
            Entry::Vacant(e) => {
                self.order.push(key.to_string());
                e.insert(GroupedMessage {
                    message: message.to_string(),
                    count: 0,
                    has_errors: false,
                })
            }
        }
    }

    /// Record one occurrence of `key` (insert-then-increment, ORing the error flag).
    pub fn record(&mut self, key: &str, message: &str, is_error: bool) {
        let grp = self.get_or_insert(key, message);
        grp.count += 1;
        grp.has_errors |= is_error;
    }

    /// Fold `other` into `self`: pointwise count sum and `has_errors` OR per key.
    /// Commutative and associative; the single merge step of the aggregator.
    pub fn merge_from(&mut self, other: &CategoryMap) {
        for key in &other.order {
            let theirs = &other.entries[key];
            let ours = self.get_or_insert(key, &theirs.message);
            ours.has_errors |= theirs.has_errors;
            ours.count += theirs.count;
        }
    }

    /// Values in first-seen order.
    pub fn values(&self) -> impl Iterator<Item = &GroupedMessage> {
        self.order.iter().map(|k| &self.entries[k])
    }

    /// Values sorted by count descending; stable, so ties keep first-seen order.
    pub fn sorted(&self) -> Vec<GroupedMessage> {
        let mut out: Vec<GroupedMessage> = self.values().cloned().collect();
        out.sort_by(|a, b| b.count.cmp(&a.count));
        out
    }
}

/// One [`CategoryMap`] per classification bucket.
#[derive(Clone, Debug, Default)]
pub struct CategoryMaps {
    pub http_codes: CategoryMap,
    pub jobs: CategoryMap,
    pub messages: CategoryMap,
    pub plugins: CategoryMap,
}

impl CategoryMaps {
    pub fn map(&self, category: Category) -> &CategoryMap {
        match category {
            Category::HttpCode => &self.http_codes,
            Category::Job => &self.jobs,
            Category::Message => &self.messages,
            Category::Plugin => &self.plugins,
        }
    }

    pub fn map_mut(&mut self, category: Category) -> &mut CategoryMap {
        match category {
            Category::HttpCode => &mut self.http_codes,
            Category::Job => &mut self.jobs,
            Category::Message => &mut self.messages,
            Category::Plugin => &mut self.plugins,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &CategoryMap)> {
        Category::ALL.iter().map(|&c| (c, self.map(c)))
    }
}

/// One worker's complete reduction of a single file. Produced once, folded
/// into the [`GlobalSummary`] exactly once, then discarded.
#[derive(Clone, Debug, Default)]
pub struct FileSummary {
    pub path: PathBuf,
    /// Lexicographic extremes of the `timestamp` field; `None` until a
    /// timestamped record is seen.
    pub min_time: Option<String>,
    pub max_time: Option<String>,
    pub size: u64,
    pub maps: CategoryMaps,
}

/// Running fold over all [`FileSummary`] values seen so far. Owned and mutated
/// by the coordinator only; workers never see it.
#[derive(Clone, Debug, Default)]
pub struct GlobalSummary {
    pub min_time: Option<String>,
    pub min_time_file: Option<PathBuf>,
    pub max_time: Option<String>,
    pub max_time_file: Option<PathBuf>,
    pub size: u64,
    pub maps: CategoryMaps,
}

/// Read-only presentation ordering of a [`GlobalSummary`]: per category,
/// grouped messages sorted by count descending (first-seen tie-break).
#[derive(Clone, Debug, Serialize)]
pub struct SortedSummary {
    pub http_codes: Vec<GroupedMessage>,
    pub jobs: Vec<GroupedMessage>,
    pub messages: Vec<GroupedMessage>,
    pub plugins: Vec<GroupedMessage>,
}

impl SortedSummary {
    pub fn category(&self, category: Category) -> &[GroupedMessage] {
        match category {
            Category::HttpCode => &self.http_codes,
            Category::Job => &self.jobs,
            Category::Message => &self.messages,
            Category::Plugin => &self.plugins,
        }
    }

    /// Unique group keys in the generic-message bucket.
    pub fn total_unique_messages(&self) -> usize {
        self.messages.len()
    }
}

/// A file whose task failed (unreadable or missing). Line-level parse failures
/// never surface here; they are recovered inside the summarizer.
#[derive(Clone, Debug)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Options for [`summarize_dir`](crate::summarize_dir) and the CLI.
#[derive(Clone, Debug)]
pub struct Opts {
    /// Override worker thread count. When None, `max(1, available − 1)`,
    /// capped at the file count.
    pub num_threads: Option<usize>,
    /// Exclude patterns (glob syntax, e.g. `*.gz`, `archive`).
    pub exclude: Vec<String>,
    /// Show progress bar and debug logging.
    pub verbose: bool,
    /// Fail fast: cancel in-flight workers on the first unreadable file.
    /// When false, failures are collected and reported after the summary.
    pub strict: bool,
    /// Prefix length used to truncate generic messages into group keys.
    pub prefix_len: usize,
    /// Rows shown per category table.
    pub top: usize,
    /// Emit the report as pretty JSON instead of tables.
    pub json: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            num_threads: None,
            exclude: Vec::new(),
            verbose: false,
            strict: false,
            prefix_len: crate::utils::config::DEFAULT_MSG_PREFIX_LEN,
            top: crate::utils::config::DEFAULT_TOP_GROUPS,
            json: false,
        }
    }
}

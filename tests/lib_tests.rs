use logsum::engine::classify::{Classify, DefaultClassifier, parse_line};
use logsum::engine::merge::{finalize, merge_summary};
use logsum::engine::{format_bytes, glob_match, should_include_file, truncate_chars};
use logsum::types::{Category, CategoryMap, FileSummary, GlobalSummary, LogRecord};
use logsum::utils::config::effective_num_threads;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

fn record(pairs: &[(&str, &str)]) -> LogRecord {
    LogRecord {
        fields: pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>(),
        raw: String::new(),
    }
}

fn summary(path: &str, min: Option<&str>, max: Option<&str>, size: u64) -> FileSummary {
    FileSummary {
        path: PathBuf::from(path),
        min_time: min.map(str::to_string),
        max_time: max.map(str::to_string),
        size,
        ..Default::default()
    }
}

// --- is_error ---

#[test]
fn test_is_error_level_error() {
    assert!(record(&[("level", "error"), ("msg", "boom")]).is_error());
}

#[test]
fn test_is_error_error_field() {
    assert!(record(&[("msg", "boom"), ("error", "ENOSPC")]).is_error());
}

#[test]
fn test_is_error_empty_error_field() {
    assert!(!record(&[("msg", "ok"), ("error", "")]).is_error());
}

#[test]
fn test_is_error_plain_record() {
    assert!(!record(&[("level", "info"), ("msg", "ok")]).is_error());
}

// --- parse_line ---

#[test]
fn test_parse_line_object() {
    let rec = parse_line(r#"{"msg":"hello","status":200}"#, Path::new("a.log"), 1).unwrap();
    assert_eq!(rec.get("msg"), Some("hello"));
    // non-string values are stringified
    assert_eq!(rec.get("status"), Some("200"));
    assert_eq!(rec.raw, r#"{"msg":"hello","status":200}"#);
}

#[test]
fn test_parse_line_malformed() {
    assert!(parse_line("{not json", Path::new("a.log"), 2).is_none());
}

#[test]
fn test_parse_line_non_object() {
    assert!(parse_line("[1,2,3]", Path::new("a.log"), 3).is_none());
}

// --- classification ---

#[test]
fn test_classify_http_code_wins() {
    let c = DefaultClassifier::new(25);
    let hit = c
        .classify(&record(&[("status", "404"), ("msg", "not found")]))
        .unwrap();
    assert_eq!(hit.category, Category::HttpCode);
    assert_eq!(hit.group_key, "404");
}

#[test]
fn test_classify_status_code_alias() {
    let c = DefaultClassifier::new(25);
    let hit = c.classify(&record(&[("statusCode", "503")])).unwrap();
    assert_eq!(hit.category, Category::HttpCode);
}

#[test]
fn test_classify_non_numeric_status_falls_through() {
    let c = DefaultClassifier::new(25);
    let hit = c
        .classify(&record(&[("status", "down"), ("msg", "probe")]))
        .unwrap();
    assert_eq!(hit.category, Category::Message);
}

#[test]
fn test_classify_job_before_plugin() {
    let c = DefaultClassifier::new(25);
    let hit = c
        .classify(&record(&[("jobId", "sync-42"), ("plugin", "s3")]))
        .unwrap();
    assert_eq!(hit.category, Category::Job);
    assert_eq!(hit.group_key, "sync-42");
}

#[test]
fn test_classify_plugin() {
    let c = DefaultClassifier::new(25);
    let hit = c.classify(&record(&[("plugin", "s3")])).unwrap();
    assert_eq!(hit.category, Category::Plugin);
}

#[test]
fn test_classify_message_truncated_key() {
    let c = DefaultClassifier::new(10);
    let hit = c
        .classify(&record(&[("msg", "disk full error occurred")]))
        .unwrap();
    assert_eq!(hit.category, Category::Message);
    assert_eq!(hit.group_key, "disk full ");
    assert_eq!(hit.message, "disk full ");
}

#[test]
fn test_classify_nothing() {
    let c = DefaultClassifier::new(25);
    assert!(c.classify(&record(&[("level", "info")])).is_none());
}

// --- truncate_chars ---

#[test]
fn test_truncate_chars_shorter_than_cutoff() {
    assert_eq!(truncate_chars("short", 25), "short");
}

#[test]
fn test_truncate_chars_exact_cutoff() {
    assert_eq!(truncate_chars("abcde", 5), "abcde");
}

#[test]
fn test_truncate_chars_multibyte() {
    // chars, not bytes: must not split a multi-byte character
    assert_eq!(truncate_chars("héllo wörld", 6), "héllo ");
}

// --- glob_match / should_include_file ---

#[test]
fn test_glob_match_literal() {
    assert!(glob_match("app.log", "app.log"));
    assert!(!glob_match("app.log", "app.lo"));
}

#[test]
fn test_glob_match_star() {
    assert!(glob_match("*.gz", "archive.gz"));
    assert!(!glob_match("*.gz", "archive.gz.bak"));
    assert!(glob_match("app-*", "app-2023"));
}

#[test]
fn test_glob_match_question() {
    assert!(glob_match("log?", "log1"));
    assert!(!glob_match("log?", "log"));
}

#[test]
fn test_should_include_excluded_by_name() {
    assert!(!should_include_file(
        Path::new("/logs/archive.gz"),
        &["*.gz".to_string()]
    ));
}

#[test]
fn test_should_include_os_hidden() {
    assert!(!should_include_file(Path::new("/logs/.DS_Store"), &[]));
}

#[test]
fn test_should_include_plain_file() {
    assert!(should_include_file(
        Path::new("/logs/app.log"),
        &["*.gz".to_string()]
    ));
}

// --- format_bytes ---

#[test]
fn test_format_bytes_small() {
    assert_eq!(format_bytes(512), "512 B");
}

#[test]
fn test_format_bytes_kib() {
    assert_eq!(format_bytes(2048), "2.0 KiB");
}

#[test]
fn test_format_bytes_mib() {
    assert_eq!(format_bytes(5 * 1024 * 1024 + 512 * 1024), "5.5 MiB");
}

// --- effective_num_threads ---

#[test]
fn test_threads_default_leaves_one_for_coordinator() {
    assert_eq!(effective_num_threads(None, 8, 100), 7);
}

#[test]
fn test_threads_capped_at_file_count() {
    assert_eq!(effective_num_threads(None, 8, 3), 3);
}

#[test]
fn test_threads_override() {
    assert_eq!(effective_num_threads(Some(4), 8, 100), 4);
}

#[test]
fn test_threads_floor_one() {
    assert_eq!(effective_num_threads(None, 1, 5), 1);
    assert_eq!(effective_num_threads(Some(0), 8, 5), 1);
}

// --- category map ---

#[test]
fn test_category_map_record_and_or() {
    let mut map = CategoryMap::new();
    map.record("k", "k", false);
    map.record("k", "k", true);
    map.record("k", "k", false);
    let grp = map.get("k").unwrap();
    assert_eq!(grp.count, 3);
    assert!(grp.has_errors);
    assert_eq!(map.len(), 1);
}

#[test]
fn test_category_map_merge_counts_add() {
    let mut a = CategoryMap::new();
    a.record("k", "k", false);
    let mut b = CategoryMap::new();
    b.record("k", "k", true);
    b.record("k", "k", false);
    a.merge_from(&b);
    let grp = a.get("k").unwrap();
    assert_eq!(grp.count, 3);
    assert!(grp.has_errors);
}

#[test]
fn test_category_map_sorted_stable_ties() {
    let mut map = CategoryMap::new();
    map.record("first", "first", false);
    map.record("second", "second", false);
    map.record("third", "third", false);
    map.record("third", "third", false);
    let sorted = map.sorted();
    assert_eq!(sorted[0].message, "third");
    // tie between first and second keeps first-seen order
    assert_eq!(sorted[1].message, "first");
    assert_eq!(sorted[2].message, "second");
}

// --- merge properties ---

fn file_with_msgs(path: &str, size: u64, msgs: &[(&str, bool)]) -> FileSummary {
    let mut s = summary(path, None, None, size);
    for (msg, is_err) in msgs {
        s.maps.messages.record(msg, msg, *is_err);
    }
    s
}

fn flat(global: &GlobalSummary) -> Vec<(String, u64, bool)> {
    let mut out: Vec<_> = global
        .maps
        .messages
        .values()
        .map(|g| (g.message.clone(), g.count, g.has_errors))
        .collect();
    out.sort();
    out
}

#[test]
fn test_merge_commutative() {
    let a = {
        let mut s = file_with_msgs("a.log", 100, &[("alpha", false), ("beta", true)]);
        s.min_time = Some("2023-01-01T00:00:00".into());
        s.max_time = Some("2023-01-02T00:00:00".into());
        s
    };
    let b = {
        let mut s = file_with_msgs("b.log", 50, &[("alpha", true), ("gamma", false)]);
        s.min_time = Some("2022-12-31T00:00:00".into());
        s.max_time = Some("2023-01-01T12:00:00".into());
        s
    };

    let mut g1 = GlobalSummary::default();
    merge_summary(&mut g1, &a);
    merge_summary(&mut g1, &b);

    let mut g2 = GlobalSummary::default();
    merge_summary(&mut g2, &b);
    merge_summary(&mut g2, &a);

    assert_eq!(flat(&g1), flat(&g2));
    assert_eq!(g1.size, g2.size);
    assert_eq!(g1.min_time, g2.min_time);
    assert_eq!(g1.min_time_file, g2.min_time_file);
    assert_eq!(g1.max_time, g2.max_time);
    assert_eq!(g1.max_time_file, g2.max_time_file);
}

#[test]
fn test_merge_additivity() {
    let files = [
        file_with_msgs("a.log", 10, &[("x", false), ("x", false), ("y", false)]),
        file_with_msgs("b.log", 20, &[("x", false)]),
        file_with_msgs("c.log", 30, &[("y", false), ("z", false)]),
    ];
    let mut g = GlobalSummary::default();
    for f in &files {
        merge_summary(&mut g, f);
    }
    assert_eq!(g.size, 60);
    assert_eq!(g.maps.messages.get("x").unwrap().count, 3);
    assert_eq!(g.maps.messages.get("y").unwrap().count, 2);
    assert_eq!(g.maps.messages.get("z").unwrap().count, 1);
}

#[test]
fn test_merge_or_propagation() {
    let mut g = GlobalSummary::default();
    merge_summary(&mut g, &file_with_msgs("a.log", 0, &[("k", false)]));
    merge_summary(&mut g, &file_with_msgs("b.log", 0, &[("k", true)]));
    merge_summary(&mut g, &file_with_msgs("c.log", 0, &[("k", false)]));
    assert!(g.maps.messages.get("k").unwrap().has_errors);
}

#[test]
fn test_merge_extremes_track_owning_file() {
    let mut g = GlobalSummary::default();
    merge_summary(
        &mut g,
        &summary("mid.log", Some("2023-06-01"), Some("2023-06-30"), 0),
    );
    merge_summary(
        &mut g,
        &summary("early.log", Some("2023-01-01"), Some("2023-01-31"), 0),
    );
    merge_summary(
        &mut g,
        &summary("late.log", Some("2023-05-01"), Some("2023-12-31"), 0),
    );
    assert_eq!(g.min_time.as_deref(), Some("2023-01-01"));
    assert_eq!(g.min_time_file, Some(PathBuf::from("early.log")));
    assert_eq!(g.max_time.as_deref(), Some("2023-12-31"));
    assert_eq!(g.max_time_file, Some(PathBuf::from("late.log")));
}

#[test]
fn test_merge_timeless_file_keeps_sentinels() {
    let mut g = GlobalSummary::default();
    merge_summary(&mut g, &summary("a.log", None, None, 5));
    assert_eq!(g.min_time, None);
    assert_eq!(g.max_time, None);
    assert_eq!(g.size, 5);
}

#[test]
fn test_merge_empty_summary_is_identity() {
    let mut g = GlobalSummary::default();
    merge_summary(&mut g, &file_with_msgs("a.log", 42, &[("k", true)]));
    let before = (flat(&g), g.size, g.min_time.clone(), g.max_time.clone());

    merge_summary(&mut g, &FileSummary::default());
    assert_eq!(
        (flat(&g), g.size, g.min_time.clone(), g.max_time.clone()),
        before
    );
}

// --- finalize ---

#[test]
fn test_finalize_orders_by_count_desc() {
    let mut g = GlobalSummary::default();
    let mut f = FileSummary::default();
    f.maps.messages.record("rare", "rare", false);
    f.maps.messages.record("common", "common", false);
    f.maps.messages.record("common", "common", false);
    merge_summary(&mut g, &f);

    let sorted = finalize(&g);
    assert_eq!(sorted.messages[0].message, "common");
    assert_eq!(sorted.messages[1].message, "rare");
    assert_eq!(sorted.total_unique_messages(), 2);
}

//! Console and JSON rendering of the final summary.
//! Presentation only; truncation and formatting never feed back into the core.

use anyhow::Result;
use comfy_table::{Cell, Color, Table, presets::UTF8_FULL};
use serde::Serialize;

use crate::types::{Category, GlobalSummary, GroupedMessage, SortedSummary};

/// Human-readable byte size, e.g. "8.2 MiB".
pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * 1024;
    const GIB: u64 = 1024 * 1024 * 1024;

    let (value, unit) = if bytes >= GIB {
        (bytes as f64 / GIB as f64, "GiB")
    } else if bytes >= MIB {
        (bytes as f64 / MIB as f64, "MiB")
    } else if bytes >= KIB {
        (bytes as f64 / KIB as f64, "KiB")
    } else {
        return format!("{bytes} B");
    };
    format!("{value:.1} {unit}")
}

fn path_or_dash(p: &Option<std::path::PathBuf>) -> String {
    p.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn time_or_dash(t: &Option<String>) -> String {
    t.clone().unwrap_or_else(|| "-".to_string())
}

/// Print the overall table plus one top-K table per category.
pub fn print_summary(global: &GlobalSummary, sorted: &SortedSummary, top: usize) {
    let mut overall = Table::new();
    overall.load_preset(UTF8_FULL).set_header(vec![
        "minTime",
        "minTimeFile",
        "maxTime",
        "maxTimeFile",
        "totalUniqueLogs",
        "size",
    ]);
    overall.add_row(vec![
        Cell::new(time_or_dash(&global.min_time)).fg(Color::Green),
        Cell::new(path_or_dash(&global.min_time_file)).fg(Color::Green),
        Cell::new(time_or_dash(&global.max_time)).fg(Color::Green),
        Cell::new(path_or_dash(&global.max_time_file)).fg(Color::Green),
        Cell::new(sorted.total_unique_messages()).fg(Color::Green),
        Cell::new(format_bytes(global.size)).fg(Color::Green),
    ]);
    println!("\nOverall summary of all the logs");
    println!("{overall}");

    for category in Category::ALL {
        print_category(category.label(), sorted.category(category), top);
    }
}

fn print_category(title: &str, groups: &[GroupedMessage], top: usize) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![title, "Count"]);
    for grp in groups.iter().take(top) {
        let color = if grp.has_errors {
            Color::Red
        } else {
            Color::Green
        };
        table.add_row(vec![
            Cell::new(&grp.message).fg(color),
            Cell::new(grp.count).fg(color),
        ]);
    }
    println!();
    println!("{table}");
}

#[derive(Serialize)]
struct JsonReport<'a> {
    min_time: &'a Option<String>,
    min_time_file: Option<String>,
    max_time: &'a Option<String>,
    max_time_file: Option<String>,
    size: u64,
    total_unique_logs: usize,
    #[serde(flatten)]
    categories: &'a SortedSummary,
}

/// Serialize the full report (scalars + sorted categories) as pretty JSON.
pub fn to_json(global: &GlobalSummary, sorted: &SortedSummary) -> Result<String> {
    let report = JsonReport {
        min_time: &global.min_time,
        min_time_file: global.min_time_file.as_ref().map(|p| p.display().to_string()),
        max_time: &global.max_time,
        max_time_file: global.max_time_file.as_ref().map(|p| p.display().to_string()),
        size: global.size,
        total_unique_logs: sorted.total_unique_messages(),
        categories: sorted,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

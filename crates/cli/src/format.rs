//! Search results → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): `2 records found:` followed by one record per line
//! - **JSON** (`--json`): `serde_json::to_string_pretty`

use sift_core::Error;
use sift_search::SearchResult;

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

/// Format a search result.
pub fn format_result(result: &SearchResult, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(result),
        OutputMode::Human => format_result_human(result),
    }
}

fn format_result_human(result: &SearchResult) -> String {
    if result.is_empty() {
        return "No matching records found.".to_string();
    }

    let count = result.len();
    let mut out = format!(
        "{} record{} found:",
        count,
        if count == 1 { "" } else { "s" }
    );
    for record in result.records() {
        out.push('\n');
        out.push_str(record);
    }
    out
}

/// Format the full record listing.
pub fn format_records(records: &[String], mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => to_json(records),
        OutputMode::Human => {
            let mut out = "=== List of records ===".to_string();
            for record in records {
                out.push('\n');
                out.push_str(record);
            }
            out
        }
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("{}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {}\"}}", e))
}

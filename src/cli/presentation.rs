//! Presentation: text tables and JSON for query results.

use crate::error::ApiError;
use crate::session::ReplayReport;
use crate::store::{GroupSummary, StudentStrokeRecord};
use crate::types::GroupKey;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde::Serialize;
use serde_json::json;

pub(crate) fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String, ApiError> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(out)
}

/// Records grouped by key. JSON output flattens to the record list only.
pub fn format_records(
    rows: &[(GroupKey, Vec<StudentStrokeRecord>)],
    format: &str,
    pretty: bool,
) -> Result<String, ApiError> {
    if format == "json" {
        let flat: Vec<&StudentStrokeRecord> = rows.iter().flat_map(|(_, r)| r.iter()).collect();
        return to_json(&flat, pretty);
    }

    if rows.iter().all(|(_, records)| records.is_empty()) {
        return Ok("No stroke records.".to_string());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Group", "Student", "Points"]);
    for (group, records) in rows {
        for record in records {
            table.add_row(vec![
                group.to_string(),
                record.user_id.clone(),
                record.points.len().to_string(),
            ]);
        }
    }
    Ok(table.to_string())
}

pub fn format_summary(
    summaries: &[GroupSummary],
    report: &ReplayReport,
    format: &str,
    pretty: bool,
) -> Result<String, ApiError> {
    if format == "json" {
        return to_json(&json!({ "groups": summaries, "replay": report }), pretty);
    }

    let mut out = format!(
        "Replay: {} applied, {} ignored, {} failed\n",
        report.applied, report.ignored, report.failed
    );
    if summaries.is_empty() {
        out.push_str("No groups.");
        return Ok(out);
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Group", "Students", "Points"]);
    for row in summaries {
        table.add_row(vec![
            row.group.to_string(),
            row.students.to_string(),
            row.points.to_string(),
        ]);
    }
    out.push_str(&table.to_string());
    Ok(out)
}

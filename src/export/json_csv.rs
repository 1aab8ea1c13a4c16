// src/export/json_csv.rs

use crate::core::batch::ShiftReport;
use crate::errors::{AppError, AppResult};
use crate::export::FindingRow;
use crate::models::Finding;

pub(crate) fn findings_json(findings: &[Finding]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(findings)?)
}

pub(crate) fn reports_json(reports: &[ShiftReport]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}

/// CSV with a header row, even when there are no findings.
pub(crate) fn rows_csv(rows: &[FindingRow]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    if rows.is_empty() {
        wtr.write_record([
            "employee",
            "start",
            "end",
            "code",
            "level",
            "computed_hours",
            "threshold_hours",
            "message",
        ])?;
    }

    for row in rows {
        wtr.serialize(row)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Other(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Other(format!("CSV encoding error: {e}")))
}

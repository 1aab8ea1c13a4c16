// src/export/model.rs

use crate::core::batch::ShiftReport;
use crate::models::{Finding, TimeSpan};
use crate::utils::formatting::format_hours;
use serde::Serialize;

/// Flat finding row for CSV output and tables.
#[derive(Serialize, Clone, Debug)]
pub struct FindingRow {
    pub employee: String,
    pub start: String,
    pub end: String,
    pub code: String,
    pub level: String,
    pub computed_hours: String,
    pub threshold_hours: String,
    pub message: String,
}

impl FindingRow {
    pub fn new(employee: Option<&str>, span: &TimeSpan, f: &Finding) -> Self {
        Self {
            employee: employee.unwrap_or_default().to_string(),
            start: span.start_str(),
            end: span.end_str(),
            code: f.code.as_str().to_string(),
            level: f.level.as_str().to_string(),
            computed_hours: format_hours(f.computed_hours),
            threshold_hours: f.threshold_hours.to_string(),
            message: f.message.clone(),
        }
    }
}

pub(crate) fn reports_to_rows(reports: &[ShiftReport]) -> Vec<FindingRow> {
    reports
        .iter()
        .flat_map(|r| {
            r.findings
                .iter()
                .map(|f| FindingRow::new(Some(&r.employee), &r.span, f))
        })
        .collect()
}

//! Batch evaluation: every employee's shifts are checked in chronological
//! order, each one against the shift right before it.

use crate::core::compliance::ComplianceChecker;
use crate::errors::{AppError, AppResult};
use crate::models::{Finding, ShiftRecord, TimeSpan};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Findings for one shift of a batch.
#[derive(Debug, Clone, Serialize)]
pub struct ShiftReport {
    pub employee: String,
    pub span: TimeSpan,
    pub break_minutes: i64,
    pub findings: Vec<Finding>,
}

pub struct BatchLogic;

impl BatchLogic {
    /// Load shift records from a `.csv` (header `employee,start,end,break_minutes`)
    /// or `.json` (array of records) file.
    pub fn load_records(path: &Path) -> AppResult<Vec<ShiftRecord>> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        let records: Vec<ShiftRecord> = match ext.as_str() {
            "csv" => {
                let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
                rdr.deserialize().collect::<Result<Vec<ShiftRecord>, _>>()?
            }
            "json" => serde_json::from_reader(File::open(path)?)?,
            _ => {
                return Err(AppError::InvalidInputFile(format!(
                    "{} (expected a .csv or .json file)",
                    path.display()
                )));
            }
        };

        info!(path = %path.display(), records = records.len(), "batch input loaded");
        Ok(records)
    }

    /// Evaluate all records. Output is ordered by employee, then start.
    ///
    /// With `strict`, the first malformed record aborts the batch with
    /// `AppError::InvalidRecord`.
    pub fn evaluate_records(
        checker: &ComplianceChecker,
        records: &[ShiftRecord],
        strict: bool,
    ) -> AppResult<Vec<ShiftReport>> {
        let mut by_employee: BTreeMap<&str, Vec<&ShiftRecord>> = BTreeMap::new();
        for rec in records {
            by_employee.entry(rec.employee.as_str()).or_default().push(rec);
        }

        let mut reports = Vec::with_capacity(records.len());

        for (employee, mut shifts) in by_employee {
            shifts.sort_by_key(|r| r.start);

            let mut previous: Option<TimeSpan> = None;
            for rec in shifts {
                let span = rec.span();
                let break_minutes = rec.break_minutes();

                let findings = if strict {
                    checker
                        .evaluate_checked(&span, break_minutes, previous.as_ref())
                        .map_err(|e| AppError::InvalidRecord {
                            employee: employee.to_string(),
                            start: span.start_str(),
                            source: Box::new(e),
                        })?
                } else {
                    checker.evaluate(&span, break_minutes, previous.as_ref())
                };

                reports.push(ShiftReport {
                    employee: employee.to_string(),
                    span,
                    break_minutes,
                    findings,
                });

                previous = Some(span);
            }
        }

        let total: usize = reports.iter().map(|r| r.findings.len()).sum();
        info!(shifts = reports.len(), findings = total, "batch evaluated");

        Ok(reports)
    }
}

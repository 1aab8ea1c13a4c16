// src/export/mod.rs

mod json_csv;
mod model;
mod table;

pub use model::FindingRow;
pub use table::{print_findings, print_reports};

use crate::core::batch::ShiftReport;
use crate::errors::AppResult;
use crate::models::{Finding, TimeSpan};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        }
    }
}

/// Print the findings of a single shift in the requested format.
pub fn emit_findings(
    format: OutputFormat,
    span: &TimeSpan,
    break_minutes: i64,
    findings: &[Finding],
) -> AppResult<()> {
    match format {
        OutputFormat::Table => print_findings(span, break_minutes, findings),
        OutputFormat::Json => println!("{}", json_csv::findings_json(findings)?),
        OutputFormat::Csv => {
            let rows: Vec<FindingRow> = findings
                .iter()
                .map(|f| FindingRow::new(None, span, f))
                .collect();
            print!("{}", json_csv::rows_csv(&rows)?);
        }
    }
    Ok(())
}

/// Print a batch result in the requested format.
pub fn emit_reports(format: OutputFormat, reports: &[ShiftReport]) -> AppResult<()> {
    match format {
        OutputFormat::Table => print_reports(reports),
        OutputFormat::Json => println!("{}", json_csv::reports_json(reports)?),
        OutputFormat::Csv => print!("{}", json_csv::rows_csv(&model::reports_to_rows(reports))?),
    }
    Ok(())
}

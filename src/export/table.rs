// src/export/table.rs

use crate::core::batch::ShiftReport;
use crate::export::model::reports_to_rows;
use crate::models::finding::has_blocking;
use crate::models::{Finding, TimeSpan};
use crate::ui::messages::{error, header, success, warning};
use crate::utils::colors::colorize_level;
use crate::utils::hours2readable;
use crate::utils::table::{Column, Table};

pub fn print_findings(span: &TimeSpan, break_minutes: i64, findings: &[Finding]) {
    header(format!(
        "Shift {} → {} (break {} min)",
        span.start_str(),
        span.end_str(),
        break_minutes
    ));

    if findings.is_empty() {
        success("No compliance findings");
        return;
    }

    for f in findings {
        println!(
            "{} {:<10} {:>9}  {}",
            colorize_level(f.level),
            f.code,
            hours2readable(f.computed_hours, false),
            f.message
        );
    }

    println!();
    summary(findings);
}

pub fn print_reports(reports: &[ShiftReport]) {
    header(format!("Batch of {} shift(s)", reports.len()));

    let rows = reports_to_rows(reports);
    if rows.is_empty() {
        success("No compliance findings");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("EMPLOYEE"),
        Column::new("START"),
        Column::new("END"),
        Column::new("LEVEL"),
        Column::new("CODE"),
        Column::new("HOURS"),
        Column::new("MESSAGE"),
    ]);

    for r in rows {
        table.add_row(vec![
            r.employee,
            r.start,
            r.end,
            r.level,
            r.code,
            r.computed_hours,
            r.message,
        ]);
    }

    print!("{}", table.render());
    println!();

    let all: Vec<Finding> = reports.iter().flat_map(|r| r.findings.clone()).collect();
    summary(&all);
}

fn summary(findings: &[Finding]) {
    let blocking = findings.iter().filter(|f| f.is_blocking()).count();
    let msg = format!("{} finding(s), {} blocking", findings.len(), blocking);

    if has_blocking(findings) {
        error(msg);
    } else {
        warning(msg);
    }
}

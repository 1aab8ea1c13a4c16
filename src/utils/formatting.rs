//! Formatting utilities used for CLI and report outputs.

/// Two-decimal rendering used in finding messages.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Hours as "HHh MMm", rounded to the nearest minute.
pub fn hours2readable(hours: f64, want_sign: bool) -> String {
    let total = (hours * 60.0).round() as i64;
    let abs_m = total.abs();

    let sign = if total > 0 && want_sign {
        "+"
    } else if total < 0 {
        "-"
    } else {
        ""
    };

    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

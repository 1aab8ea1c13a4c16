//! Interval arithmetic behind the three rules. No validation happens here:
//! malformed spans simply produce negative values.

use crate::models::TimeSpan;
use crate::utils::time::{SECONDS_PER_HOUR, delta_hours};

/// Elapsed hours from clock-in to clock-out, breaks included (amplitude).
pub fn gross_hours(span: &TimeSpan) -> f64 {
    delta_hours(span.duration())
}

/// Gross hours minus the unpaid break.
///
/// The subtraction happens on whole seconds so a net exactly on a limit
/// converts to that limit.
pub fn net_hours(span: &TimeSpan, break_minutes: i64) -> f64 {
    let net_seconds = span
        .duration()
        .num_seconds()
        .saturating_sub(break_minutes.saturating_mul(60));
    net_seconds as f64 / SECONDS_PER_HOUR
}

/// Hours between the end of `previous` and the start of `current`.
/// Negative when the shifts overlap or are out of order.
pub fn rest_hours(previous: &TimeSpan, current: &TimeSpan) -> f64 {
    delta_hours(current.start - previous.end)
}

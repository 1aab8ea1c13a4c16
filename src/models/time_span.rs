use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

/// One continuous worked period, clock-in to clock-out, breaks included.
///
/// Both instants are expressed in the same reference chosen by the caller
/// (naive local time, or UTC when the input carried an offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSpan {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeSpan {
    /// Build a span without checking `end > start`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Build a span, rejecting `end <= start`.
    pub fn try_new(start: NaiveDateTime, end: NaiveDateTime) -> AppResult<Self> {
        let span = Self::new(start, end);
        span.ensure_valid()?;
        Ok(span)
    }

    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }

    pub fn ensure_valid(&self) -> AppResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(AppError::InvalidSpan {
                start: self.start_str(),
                end: self.end_str(),
            })
        }
    }

    /// Elapsed time from start to end (negative for malformed spans).
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn start_str(&self) -> String {
        self.start.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%Y-%m-%d %H:%M").to_string()
    }
}

use crate::models::time_span::TimeSpan;
use crate::utils::time::deserialize_datetime;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One row of a batch input file (CSV or JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub employee: String,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub start: NaiveDateTime,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub end: NaiveDateTime,
    #[serde(default)]
    pub break_minutes: Option<i64>,
}

impl ShiftRecord {
    pub fn span(&self) -> TimeSpan {
        TimeSpan::new(self.start, self.end)
    }

    pub fn break_minutes(&self) -> i64 {
        self.break_minutes.unwrap_or(0)
    }
}

pub mod finding;
pub mod rules;
pub mod shift_record;
pub mod time_span;

pub use finding::{Finding, FindingCode, Level};
pub use rules::RuleThresholds;
pub use shift_record::ShiftRecord;
pub use time_span::TimeSpan;

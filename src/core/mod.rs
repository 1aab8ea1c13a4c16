pub mod batch;
pub mod calculator;
pub mod compliance;
pub mod config;

pub use batch::{BatchLogic, ShiftReport};
pub use compliance::{ComplianceChecker, evaluate};

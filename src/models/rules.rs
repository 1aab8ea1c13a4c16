use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MAX_DAILY_HOURS: f64 = 10.0;
pub const DEFAULT_MAX_AMPLITUDE_HOURS: f64 = 13.0;
pub const DEFAULT_MIN_REST_HOURS: f64 = 11.0;

/// Thresholds the checker compares against, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleThresholds {
    #[serde(default = "default_max_daily_hours")]
    pub max_daily_hours: f64,
    #[serde(default = "default_max_amplitude_hours")]
    pub max_amplitude_hours: f64,
    #[serde(default = "default_min_rest_hours")]
    pub min_rest_hours: f64,
}

fn default_max_daily_hours() -> f64 {
    DEFAULT_MAX_DAILY_HOURS
}
fn default_max_amplitude_hours() -> f64 {
    DEFAULT_MAX_AMPLITUDE_HOURS
}
fn default_min_rest_hours() -> f64 {
    DEFAULT_MIN_REST_HOURS
}

impl Default for RuleThresholds {
    fn default() -> Self {
        Self {
            max_daily_hours: DEFAULT_MAX_DAILY_HOURS,
            max_amplitude_hours: DEFAULT_MAX_AMPLITUDE_HOURS,
            min_rest_hours: DEFAULT_MIN_REST_HOURS,
        }
    }
}

impl RuleThresholds {
    /// Every threshold must be a finite, strictly positive number of hours.
    pub fn validate(&self) -> AppResult<()> {
        let fields = [
            ("max_daily_hours", self.max_daily_hours),
            ("max_amplitude_hours", self.max_amplitude_hours),
            ("min_rest_hours", self.min_rest_hours),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(AppError::Config(format!(
                    "{name} must be a positive number of hours (got {value})"
                )));
            }
        }

        Ok(())
    }
}

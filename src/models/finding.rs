use serde::{Deserialize, Serialize};
use std::fmt;

/// Rule that produced a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FindingCode {
    /// Net daily hours above the maximum.
    #[serde(rename = "JOUR_MAX")]
    JourMax,
    /// Gross presence window above the maximum.
    #[serde(rename = "AMPLITUDE")]
    Amplitude,
    /// Rest since the previous shift below the minimum.
    #[serde(rename = "REPOS11H")]
    Repos11h,
}

impl FindingCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FindingCode::JourMax => "JOUR_MAX",
            FindingCode::Amplitude => "AMPLITUDE",
            FindingCode::Repos11h => "REPOS11H",
        }
    }

    /// Severity attached to each rule.
    pub fn level(&self) -> Level {
        match self {
            FindingCode::JourMax | FindingCode::Amplitude => Level::Warn,
            FindingCode::Repos11h => Level::Block,
        }
    }
}

impl fmt::Display for FindingCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// WARN is advisory, BLOCK should stop the submission on the caller side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Warn,
    Block,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Warn => "WARN",
            Level::Block => "BLOCK",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A labelled compliance finding.
///
/// `computed_hours` is the unrounded value the rule compared; the rendered
/// `message` shows it with two decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub code: FindingCode,
    pub level: Level,
    pub computed_hours: f64,
    pub threshold_hours: f64,
    pub message: String,
}

impl Finding {
    pub fn is_blocking(&self) -> bool {
        self.level == Level::Block
    }
}

/// True when at least one finding is BLOCK level.
pub fn has_blocking(findings: &[Finding]) -> bool {
    findings.iter().any(Finding::is_blocking)
}

//! Labor-rule compliance checks for a single shift.
//!
//! Three independent rules, evaluated in a fixed order:
//!
//! 1. `JOUR_MAX` (WARN): net hours strictly above the daily maximum.
//! 2. `AMPLITUDE` (WARN): gross hours strictly above the amplitude maximum.
//! 3. `REPOS11H` (BLOCK): rest since the previous shift strictly below the
//!    minimum. Only evaluated when a previous shift is given.
//!
//! Boundary values are compliant. The checker labels findings; enforcing a
//! BLOCK is up to the caller.

use crate::core::calculator::hours::{gross_hours, net_hours, rest_hours};
use crate::errors::{AppError, AppResult};
use crate::models::{Finding, FindingCode, RuleThresholds, TimeSpan};
use crate::ui::templates::{self, Locale};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ComplianceChecker {
    rules: RuleThresholds,
    locale: Locale,
}

impl ComplianceChecker {
    /// Bind thresholds without validating them.
    pub fn new(rules: RuleThresholds, locale: Locale) -> Self {
        Self { rules, locale }
    }

    /// Bind thresholds, rejecting non-finite or non-positive limits. A NaN
    /// limit would otherwise disable its rule.
    pub fn try_new(rules: RuleThresholds, locale: Locale) -> AppResult<Self> {
        rules.validate()?;
        Ok(Self::new(rules, locale))
    }

    pub fn rules(&self) -> &RuleThresholds {
        &self.rules
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Evaluate one shift without validating its inputs.
    ///
    /// A span with `end <= start` yields non-positive hours and therefore no
    /// WARN finding; a negative break inflates net hours. Use
    /// [`ComplianceChecker::evaluate_checked`] to reject such input instead.
    pub fn evaluate(
        &self,
        span: &TimeSpan,
        break_minutes: i64,
        previous: Option<&TimeSpan>,
    ) -> Vec<Finding> {
        let mut findings = Vec::new();

        let net = net_hours(span, break_minutes);
        trace!(net, max = self.rules.max_daily_hours, "daily hours");
        if net > self.rules.max_daily_hours {
            findings.push(self.finding(FindingCode::JourMax, net, self.rules.max_daily_hours));
        }

        let amplitude = gross_hours(span);
        trace!(amplitude, max = self.rules.max_amplitude_hours, "amplitude");
        if amplitude > self.rules.max_amplitude_hours {
            findings.push(self.finding(
                FindingCode::Amplitude,
                amplitude,
                self.rules.max_amplitude_hours,
            ));
        }

        if let Some(prev) = previous {
            let rest = rest_hours(prev, span);
            trace!(rest, min = self.rules.min_rest_hours, "rest period");
            if rest < self.rules.min_rest_hours {
                findings.push(self.finding(FindingCode::Repos11h, rest, self.rules.min_rest_hours));
            }
        }

        debug!(
            start = %span.start,
            end = %span.end,
            break_minutes,
            findings = findings.len(),
            "shift evaluated"
        );

        findings
    }

    /// Same rules as [`ComplianceChecker::evaluate`], after rejecting
    /// malformed input:
    /// - `InvalidSpan` when either span has `end <= start`;
    /// - `InvalidBreak` when the break is negative or longer than the span.
    ///
    /// The order of `previous` relative to `span` is not checked; an overlap
    /// surfaces as a `REPOS11H` finding.
    pub fn evaluate_checked(
        &self,
        span: &TimeSpan,
        break_minutes: i64,
        previous: Option<&TimeSpan>,
    ) -> AppResult<Vec<Finding>> {
        span.ensure_valid()?;
        if let Some(prev) = previous {
            prev.ensure_valid()?;
        }

        if break_minutes < 0 {
            return Err(AppError::InvalidBreak(format!(
                "break of {break_minutes} min is negative"
            )));
        }

        let span_seconds = span.duration().num_seconds();
        if break_minutes.saturating_mul(60) > span_seconds {
            return Err(AppError::InvalidBreak(format!(
                "break of {break_minutes} min exceeds the {} → {} span",
                span.start_str(),
                span.end_str()
            )));
        }

        Ok(self.evaluate(span, break_minutes, previous))
    }

    fn finding(&self, code: FindingCode, computed_hours: f64, threshold_hours: f64) -> Finding {
        Finding {
            code,
            level: code.level(),
            computed_hours,
            threshold_hours,
            message: templates::render(code, computed_hours, threshold_hours, self.locale),
        }
    }
}

/// Evaluate with the default thresholds (10 h / 13 h / 11 h) and locale.
pub fn evaluate(span: &TimeSpan, break_minutes: i64, previous: Option<&TimeSpan>) -> Vec<Finding> {
    ComplianceChecker::default().evaluate(span, break_minutes, previous)
}

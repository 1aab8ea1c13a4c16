//! Message templates for findings.
//!
//! Rule logic only produces `(code, computed, threshold)`; wording lives here
//! so callers can restyle or replace it.

use crate::models::FindingCode;
use crate::utils::formatting::format_hours;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Fr,
    En,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Fr => "fr",
            Locale::En => "en",
        }
    }
}

/// Render the message of a finding: computed value with two decimals,
/// threshold as configured.
pub fn render(
    code: FindingCode,
    computed_hours: f64,
    threshold_hours: f64,
    locale: Locale,
) -> String {
    let h = format_hours(computed_hours);
    let t = threshold_hours;

    match (locale, code) {
        (Locale::Fr, FindingCode::JourMax) => {
            format!("Durée de travail journalière {h} h > {t} h maximum")
        }
        (Locale::Fr, FindingCode::Amplitude) => {
            format!("Amplitude de la journée {h} h > {t} h maximum")
        }
        (Locale::Fr, FindingCode::Repos11h) => {
            format!("Repos entre deux services {h} h < {t} h minimum")
        }
        (Locale::En, FindingCode::JourMax) => {
            format!("Net daily work time {h} h > {t} h maximum")
        }
        (Locale::En, FindingCode::Amplitude) => {
            format!("Daily amplitude {h} h > {t} h maximum")
        }
        (Locale::En, FindingCode::Repos11h) => {
            format!("Rest between shifts {h} h < {t} h minimum")
        }
    }
}

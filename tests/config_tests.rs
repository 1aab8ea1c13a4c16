use rshiftcheck::RuleThresholds;
use rshiftcheck::config::Config;
use rshiftcheck::export::OutputFormat;
use rshiftcheck::ui::templates::Locale;
use std::path::Path;

mod common;
use common::{temp_path, write_temp};

#[test]
fn test_missing_file_gives_defaults() {
    let path = temp_path("cfg_missing", "conf");
    let cfg = Config::load_from(Path::new(&path)).unwrap();

    assert_eq!(cfg.rules, RuleThresholds::default());
    assert_eq!(cfg.rules.max_daily_hours, 10.0);
    assert_eq!(cfg.rules.max_amplitude_hours, 13.0);
    assert_eq!(cfg.rules.min_rest_hours, 11.0);
    assert_eq!(cfg.locale, Locale::Fr);
    assert!(cfg.strict_input);
    assert_eq!(cfg.output, OutputFormat::Table);
}

#[test]
fn test_partial_file_fills_defaults() {
    let path = write_temp(
        "cfg_partial",
        "conf",
        "rules:\n  max_daily_hours: 12\nlocale: en\n",
    );
    let cfg = Config::load_from(Path::new(&path)).unwrap();

    assert_eq!(cfg.rules.max_daily_hours, 12.0);
    assert_eq!(cfg.rules.max_amplitude_hours, 13.0);
    assert_eq!(cfg.locale, Locale::En);
    assert!(cfg.strict_input);

    let missing = Config::missing_keys(Path::new(&path)).unwrap();
    assert_eq!(
        missing,
        vec![
            "strict_input",
            "output",
            "rules.max_amplitude_hours",
            "rules.min_rest_hours"
        ]
    );
}

#[test]
fn test_save_then_load() {
    let path = temp_path("cfg_save", "conf");
    let mut cfg = Config::default();
    cfg.rules.min_rest_hours = 12.0;
    cfg.output = OutputFormat::Json;

    cfg.save_to(Path::new(&path)).unwrap();
    let loaded = Config::load_from(Path::new(&path)).unwrap();

    assert_eq!(loaded.rules.min_rest_hours, 12.0);
    assert_eq!(loaded.output, OutputFormat::Json);
    assert!(Config::missing_keys(Path::new(&path)).unwrap().is_empty());
}

#[test]
fn test_non_positive_threshold_is_rejected() {
    let path = write_temp("cfg_negative", "conf", "rules:\n  min_rest_hours: -1\n");
    let err = Config::load_from(Path::new(&path)).unwrap_err();
    assert!(err.to_string().contains("min_rest_hours"), "{err}");

    let rules = RuleThresholds {
        max_amplitude_hours: f64::NAN,
        ..RuleThresholds::default()
    };
    assert!(rules.validate().is_err());
}

#[test]
fn test_malformed_yaml_is_an_error() {
    let path = write_temp("cfg_malformed", "conf", "rules: [unclosed\n");
    assert!(Config::load_from(Path::new(&path)).is_err());
}

#[test]
fn test_checker_validates_thresholds() {
    assert!(Config::default().checker().is_ok());

    let mut cfg = Config::default();
    cfg.rules.max_amplitude_hours = f64::NAN;
    assert!(cfg.checker().is_err());
}

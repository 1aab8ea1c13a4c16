use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{no_config, rsc, temp_path};

#[test]
fn test_check_compliant_shift() {
    let conf = no_config("check_ok");

    rsc()
        .args([
            "--config",
            &conf,
            "check",
            "--in",
            "2025-09-12 09:00",
            "--out",
            "2025-09-12 17:45",
            "--break",
            "45",
        ])
        .assert()
        .success()
        .stdout(contains("No compliance findings"));
}

#[test]
fn test_check_json_lists_findings_in_rule_order() {
    let conf = no_config("check_json");

    let output = rsc()
        .args([
            "--config",
            &conf,
            "check",
            "--in",
            "2025-09-12 06:00",
            "--out",
            "2025-09-12 20:30",
            "--break",
            "30",
            "--format",
            "json",
        ])
        .output()
        .expect("run check");
    assert!(output.status.success());

    let findings: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(findings[0]["code"], "JOUR_MAX");
    assert_eq!(findings[1]["code"], "AMPLITUDE");
    assert_eq!(findings[1]["level"], "WARN");
    assert_eq!(findings.as_array().map(|a| a.len()), Some(2));
}

#[test]
fn test_check_short_rest_with_fail_on_block() {
    let conf = no_config("check_block");

    rsc()
        .args([
            "--config",
            &conf,
            "check",
            "--in",
            "2025-09-13 03:00",
            "--out",
            "2025-09-13 12:00",
            "--prev-in",
            "2025-09-12 08:00",
            "--prev-out",
            "2025-09-12 18:00",
            "--fail-on-block",
        ])
        .assert()
        .code(2)
        .stdout(contains("REPOS11H").and(contains("9.00")));
}

#[test]
fn test_check_block_without_flag_succeeds() {
    let conf = no_config("check_block_noflag");

    rsc()
        .args([
            "--config",
            &conf,
            "check",
            "--in",
            "2025-09-13T03:00",
            "--out",
            "2025-09-13T12:00",
            "--prev-in",
            "2025-09-12T08:00",
            "--prev-out",
            "2025-09-12T18:00",
        ])
        .assert()
        .success()
        .stdout(contains("REPOS11H"));
}

#[test]
fn test_check_rejects_reversed_span() {
    let conf = no_config("check_reversed");

    rsc()
        .args([
            "--config",
            &conf,
            "check",
            "--in",
            "2025-09-12 17:00",
            "--out",
            "2025-09-12 09:00",
        ])
        .assert()
        .code(1)
        .stderr(contains("Invalid span"));
}

#[test]
fn test_check_lenient_accepts_reversed_span() {
    let conf = no_config("check_lenient");

    rsc()
        .args([
            "--config",
            &conf,
            "check",
            "--in",
            "2025-09-12 17:00",
            "--out",
            "2025-09-12 09:00",
            "--lenient",
        ])
        .assert()
        .success()
        .stdout(contains("No compliance findings"));
}

#[test]
fn test_check_rejects_bad_datetime() {
    let conf = no_config("check_bad_dt");

    rsc()
        .args(["--config", &conf, "check", "--in", "12/09/2025", "--out", "2025-09-12 09:00"])
        .assert()
        .code(1)
        .stderr(contains("Invalid date-time format"));
}

#[test]
fn test_check_prev_in_requires_prev_out() {
    let conf = no_config("check_prev_pair");

    rsc()
        .args([
            "--config",
            &conf,
            "check",
            "--in",
            "2025-09-13 03:00",
            "--out",
            "2025-09-13 12:00",
            "--prev-in",
            "2025-09-12 08:00",
        ])
        .assert()
        .failure();
}

#[test]
fn test_init_writes_config_and_check_uses_it() {
    let conf = temp_path("init_custom", "conf");

    rsc().args(["--config", &conf, "init"]).assert().success();
    assert!(std::path::Path::new(&conf).exists());

    // Tighten the daily maximum: 8h45 net now warns
    std::fs::write(
        &conf,
        "rules:\n  max_daily_hours: 8.5\nlocale: en\nstrict_input: true\noutput: table\n",
    )
    .unwrap();

    rsc()
        .args([
            "--config",
            &conf,
            "check",
            "--in",
            "2025-09-12 09:00",
            "--out",
            "2025-09-12 18:30",
            "--break",
            "45",
        ])
        .assert()
        .success()
        .stdout(contains("JOUR_MAX"))
        .stdout(contains("Net daily work time 8.75 h > 8.5 h maximum"));
}

#[test]
fn test_init_does_not_overwrite_without_force() {
    let conf = temp_path("init_no_overwrite", "conf");
    std::fs::write(&conf, "locale: en\n").unwrap();

    rsc()
        .args(["--config", &conf, "init"])
        .assert()
        .success()
        .stdout(contains("already exists"));
    assert_eq!(std::fs::read_to_string(&conf).unwrap(), "locale: en\n");

    rsc().args(["--config", &conf, "init", "--force"]).assert().success();
    assert!(std::fs::read_to_string(&conf).unwrap().contains("max_daily_hours"));
}

#[test]
fn test_init_test_mode_writes_nothing() {
    let conf = temp_path("init_test_mode", "conf");

    rsc().args(["--config", &conf, "--test", "init"]).assert().success();
    assert!(!std::path::Path::new(&conf).exists());
}

#[test]
fn test_config_check_reports_missing_fields() {
    let conf = temp_path("config_check", "conf");
    std::fs::write(&conf, "rules:\n  min_rest_hours: 12\n").unwrap();

    rsc()
        .args(["--config", &conf, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("locale"))
        .stdout(contains("rules.max_daily_hours"))
        .stdout(contains("rules.min_rest_hours").not());
}

#[test]
fn test_config_print_shows_effective_values() {
    let conf = no_config("config_print");

    rsc()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("max_amplitude_hours: 13"))
        .stdout(contains("locale: fr"));
}

#[test]
fn test_invalid_threshold_in_config_fails() {
    let conf = temp_path("config_invalid", "conf");
    std::fs::write(&conf, "rules:\n  max_daily_hours: 0\n").unwrap();

    rsc()
        .args([
            "--config",
            &conf,
            "check",
            "--in",
            "2025-09-12 09:00",
            "--out",
            "2025-09-12 17:00",
        ])
        .assert()
        .code(1)
        .stderr(contains("max_daily_hours"));
}

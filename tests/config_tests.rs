use chrono::NaiveTime;
use hourbank::config::Config;
use hourbank::config::migrate::{fill_missing_keys, missing_keys};
use hourbank::utils::date::{parse_range, resolve_period};
use hourbank::utils::hours2readable;
use hourbank::utils::time::{parse_duration_hours, parse_time, time_to_db};
use std::fs;
use std::path::Path;

mod common;
use common::{date, temp_out};

#[test]
fn test_daily_target_formats() {
    assert_eq!(parse_duration_hours("8h"), Some(8.0));
    assert_eq!(parse_duration_hours("7h30m"), Some(7.5));
    assert_eq!(parse_duration_hours("450m"), Some(7.5));
    assert_eq!(parse_duration_hours("7.5"), Some(7.5));
    assert_eq!(parse_duration_hours(""), None);
    assert_eq!(parse_duration_hours("eight"), None);
    assert_eq!(parse_duration_hours("-3"), None);
}

#[test]
fn test_invalid_daily_target_is_a_config_error() {
    let cfg = Config {
        daily_target: "lots".into(),
        ..Config::default()
    };
    assert!(cfg.daily_target_hours().is_err());
    assert!(cfg.calendar().is_err());
}

#[test]
fn test_unknown_jurisdiction_is_reported() {
    let cfg = Config {
        jurisdiction: "US-NY".into(),
        ..Config::default()
    };
    let err = cfg.calendar().err().expect("unsupported");
    assert!(err.to_string().contains("US-NY"));
}

#[test]
fn test_calendar_file_replaces_builtin_data() {
    let path = temp_out("config_calendar_file", "yaml");
    fs::write(
        &path,
        "jurisdiction: OFFLINE\nholidays:\n  2025-03-03: Carnaval\n",
    )
    .expect("write calendar");

    let cfg = Config {
        calendar_file: Some(path),
        municipal_holiday: None,
        ..Config::default()
    };
    let oracle = cfg.calendar().expect("oracle");
    assert_eq!(oracle.jurisdiction(), "OFFLINE");

    let map = oracle.holidays_for(2025).expect("2025");
    assert_eq!(map.len(), 1);
    assert!(map.contains_key(&date("2025-03-03")));
}

#[test]
fn test_config_missing_keys_are_filled() {
    let path = temp_out("config_missing_keys", "conf");
    fs::write(&path, "database: /tmp/x.sqlite\njurisdiction: BR-SP\n").expect("write config");
    let path = Path::new(&path);

    let missing = missing_keys(path).expect("missing keys");
    assert!(missing.contains(&"daily_target".to_string()));
    assert!(!missing.contains(&"database".to_string()));

    let added = fill_missing_keys(path).expect("fill");
    assert_eq!(added, missing);
    assert!(missing_keys(path).expect("missing keys").is_empty());

    let cfg: Config =
        serde_yaml::from_str(&fs::read_to_string(path).expect("read")).expect("parse");
    assert_eq!(cfg.database, "/tmp/x.sqlite");
    assert_eq!(cfg.daily_target, "8h");
}

#[test]
fn test_partial_config_uses_defaults() {
    let cfg: Config = serde_yaml::from_str("daily_target: 6h\n").expect("parse");
    assert_eq!(cfg.daily_target_hours().expect("target"), 6.0);
    assert_eq!(cfg.jurisdiction, "BR-SP");
    assert!(cfg.show_weekday);
    assert_eq!(
        cfg.municipal_holiday.map(|m| (m.month, m.day)),
        Some((1, 25))
    );
}

#[test]
fn test_period_expressions() {
    assert_eq!(
        parse_range("2025").expect("year"),
        (date("2025-01-01"), date("2025-12-31"))
    );
    assert_eq!(
        parse_range("2024-02").expect("month"),
        (date("2024-02-01"), date("2024-02-29"))
    );
    assert_eq!(
        parse_range("2025-01-05").expect("day"),
        (date("2025-01-05"), date("2025-01-05"))
    );
    assert_eq!(
        parse_range("2025-11:2026-02").expect("month range"),
        (date("2025-11-01"), date("2026-02-28"))
    );

    assert!(parse_range("2025:2025-01").is_err());
    assert!(parse_range("2025-03:2025-01").is_err());
    assert!(parse_range("20251").is_err());

    assert_eq!(resolve_period(Some("all")).expect("all"), None);
    assert!(resolve_period(None).expect("current month").is_some());
}

#[test]
fn test_time_helpers() {
    assert_eq!(parse_time("7:05"), NaiveTime::from_hms_opt(7, 5, 0));
    assert_eq!(parse_time("24:00"), None);
    assert_eq!(parse_time("noon"), None);

    let t = NaiveTime::from_hms_opt(9, 30, 0).expect("time");
    assert_eq!(time_to_db(t), "09:30");
    let t = NaiveTime::from_hms_opt(9, 30, 15).expect("time");
    assert_eq!(time_to_db(t), "09:30:15");
}

#[test]
fn test_hours2readable() {
    assert_eq!(hours2readable(2.5, true, true), "+02:30");
    assert_eq!(hours2readable(-0.25, true, false), "-00h 15m");
    assert_eq!(hours2readable(0.0, true, true), "00:00");
}

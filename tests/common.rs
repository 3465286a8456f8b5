#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use hourbank::core::CalendarOracle;
use hourbank::core::calendar::StaticHolidays;
use std::env;
use std::fs;
use std::path::PathBuf;

/// hourbank binary with HOME pointed at a throwaway directory, so tests
/// never read or write the real configuration.
pub fn hb() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("hourbank_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("hourbank");
    cmd.env("HOME", &home).env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hourbank.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests:
/// - 2025-01-06 (Mon) 09:00-12:00-13:00-18:00 → 8h, balance 0
/// - 2025-01-07 (Tue) 08:00-12:00-13:00-19:00 → 10h, balance +2
/// - 2025-01-11 (Sat) 09:00-15:00, no lunch → 6h, balance +9
pub fn init_db_with_data(db_path: &str) {
    hb().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    add_office(db_path, "2025-01-06", "09:00", "12:00", "13:00", "18:00");
    add_office(db_path, "2025-01-07", "08:00", "12:00", "13:00", "19:00");

    hb().args([
        "--db",
        db_path,
        "add",
        "2025-01-11",
        "--in",
        "09:00",
        "--out",
        "15:00",
    ])
    .assert()
    .success();
}

pub fn add_office(db_path: &str, date: &str, clock_in: &str, l_out: &str, l_in: &str, out: &str) {
    hb().args([
        "--db",
        db_path,
        "add",
        date,
        "--in",
        clock_in,
        "--lunch-out",
        l_out,
        "--lunch-in",
        l_in,
        "--out",
        out,
    ])
    .assert()
    .success();
}

/// Calendar with fixed data for 2025: only Tiradentes (Mon 04-21) and the
/// municipal anniversary (Sat 01-25).
pub fn test_oracle() -> CalendarOracle {
    let provider = StaticHolidays::new("TEST")
        .with_year(2025)
        .with_holiday(date("2025-04-21"), "Tiradentes");
    CalendarOracle::new(Box::new(provider))
}

pub fn date(s: &str) -> chrono::NaiveDate {
    chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

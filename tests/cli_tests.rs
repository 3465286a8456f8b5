use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_office, hb, init_db_with_data, setup_test_db};

#[test]
fn test_init_creates_schema() {
    let db_path = setup_test_db("cli_init");

    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_prints_enriched_day() {
    let db_path = setup_test_db("cli_add");
    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args([
        "--db",
        &db_path,
        "add",
        "2025-01-11",
        "--in",
        "09:00",
        "--out",
        "15:00",
    ])
    .assert()
    .success()
    .stdout(contains("Saturday").and(contains("+9.00 h")));
}

#[test]
fn test_add_rejected_by_guard() {
    let db_path = setup_test_db("cli_add_guard");
    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args([
        "--db",
        &db_path,
        "add",
        "2025-01-08",
        "--in",
        "09:00",
        "--lunch-out",
        "12:00",
        "--lunch-in",
        "13:00",
        "--out",
        "08:00",
    ])
    .assert()
    .failure()
    .stderr(contains("Checkout cannot be earlier than check-in."));

    hb().args([
        "--db",
        &db_path,
        "add",
        "2025-01-08",
        "--in",
        "09:00",
        "--lunch-out",
        "12:00",
        "--lunch-in",
        "13:00",
        "--out",
        "08:00",
        "--force",
    ])
    .assert()
    .success()
    .stdout(contains("-10.00 h"));
}

#[test]
fn test_add_without_lunch_is_checked() {
    let db_path = setup_test_db("cli_add_no_lunch");
    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "add", "2025-01-06", "--in", "15:00", "--out", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Checkout cannot be earlier than check-in."));

    hb().args(["--db", &db_path, "list", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(contains("No records"));

    hb().args([
        "--db",
        &db_path,
        "add",
        "2025-01-06",
        "--in",
        "15:00",
        "--out",
        "09:00",
        "--force",
    ])
    .assert()
    .success()
    .stdout(contains("-14.00 h"));
}

#[test]
fn test_add_invalid_input() {
    let db_path = setup_test_db("cli_add_invalid");
    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "add", "2025-01-09", "--in", "25:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    hb().args(["--db", &db_path, "add", "2025-13-09", "--in", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_add_day_off_flag() {
    let db_path = setup_test_db("cli_day_off");
    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "add", "2025-01-09", "--day-off"])
        .assert()
        .success()
        .stdout(contains("manual override"));

    hb().args(["--db", &db_path, "add", "2025-01-09", "--day-off=false"])
        .assert()
        .success()
        .stdout(contains("regular workday"));
}

#[test]
fn test_list_period_with_bank_total() {
    let db_path = setup_test_db("cli_list");
    init_db_with_data(&db_path);

    hb().args(["--db", &db_path, "list", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(
            contains("2025-01-06")
                .and(contains("2025-01-07"))
                .and(contains("2025-01-11"))
                .and(contains("Hours bank:"))
                .and(contains("+11.00 h over 3 days")),
        );

    let output = hb()
        .args(["--db", &db_path, "list", "--period", "2025-01"])
        .output()
        .expect("run list");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let row = |day: &str| {
        stdout
            .lines()
            .find(|l| l.contains(day))
            .unwrap_or_default()
            .to_string()
    };

    // day balance then running bank
    assert_eq!(row("2025-01-06").matches("+0.00").count(), 2);
    assert_eq!(row("2025-01-07").matches("+2.00").count(), 2);
    let saturday = row("2025-01-11");
    assert!(saturday.contains("+9.00"));
    assert!(saturday.contains("+11.00"));

    hb().args(["--db", &db_path, "list", "--period", "2025-01-07"])
        .assert()
        .success()
        .stdout(contains("2025-01-07").and(contains("2025-01-06").not()));
}

#[test]
fn test_list_invalid_period() {
    let db_path = setup_test_db("cli_list_invalid");
    init_db_with_data(&db_path);

    hb().args(["--db", &db_path, "list", "--period", "2025-02:2025-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_summary_balance() {
    let db_path = setup_test_db("cli_summary");
    init_db_with_data(&db_path);
    add_office(&db_path, "2025-01-08", "09:00", "12:00", "13:00", "16:00");

    hb().args(["--db", &db_path, "summary", "--period", "all"])
        .assert()
        .success()
        .stdout(
            contains("Balance")
                .and(contains("+9.00 h"))
                .and(contains("Saturday"))
                .and(contains("Wednesday"))
                .and(contains("Not above target")),
        );
}

#[test]
fn test_del_record() {
    let db_path = setup_test_db("cli_del");
    init_db_with_data(&db_path);

    hb().args(["--db", &db_path, "del", "2025-01-06", "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    hb().args(["--db", &db_path, "list", "--period", "2025-01"])
        .assert()
        .success()
        .stdout(contains("2025-01-06").not());

    hb().args(["--db", &db_path, "del", "2025-01-06", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No record found"));
}

#[test]
fn test_calendar_year() {
    hb().args(["calendar", "2025"])
        .assert()
        .success()
        .stdout(
            contains("2025-04-18")
                .and(contains("Sexta-feira Santa"))
                .and(contains("Aniversário de São Paulo"))
                .and(contains("BR-SP")),
        );
}

#[test]
fn test_calendar_out_of_range() {
    hb().args(["calendar", "1800"])
        .assert()
        .failure()
        .stderr(contains("1800"));
}

#[test]
fn test_log_print() {
    let db_path = setup_test_db("cli_log");
    init_db_with_data(&db_path);

    hb().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init").and(contains("add")).and(contains("2025-01-07")));
}

#[test]
fn test_demo_fills_weekdays() {
    let db_path = setup_test_db("cli_demo");
    hb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    hb().args(["--db", &db_path, "demo", "--year", "2024", "--seed", "3"])
        .assert()
        .success()
        .stdout(contains("262 synthetic records stored for 2024"));

    hb().args(["--db", &db_path, "demo", "--year", "2024", "--seed", "3"])
        .assert()
        .success()
        .stdout(contains("0 synthetic records").and(contains("262 days already had a record")));

    hb().args(["--db", &db_path, "summary", "--period", "2024"])
        .assert()
        .success()
        .stdout(contains("Days").and(contains("262")));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db");
    init_db_with_data(&db_path);

    hb().args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Total records").and(contains("Integrity check passed")));
}

#[test]
fn test_config_print_defaults() {
    hb().args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("jurisdiction: BR-SP").and(contains("daily_target: 8h")));
}

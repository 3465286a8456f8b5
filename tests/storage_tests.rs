use chrono::{Datelike, NaiveTime, Weekday};
use hourbank::core::add::{AddLogic, RecordUpdate};
use hourbank::core::del::DeleteLogic;
use hourbank::core::demo::{DEMO_NOTE, DemoLogic};
use hourbank::db::initialize::init_db;
use hourbank::db::pool::DbPool;
use hourbank::db::queries::{count_records, delete_record, load_record, load_records, upsert_record};
use hourbank::errors::AppError;
use hourbank::models::RawDayRecord;

mod common;
use common::date;

fn pool() -> DbPool {
    let pool = DbPool::in_memory().expect("in-memory db");
    init_db(&pool.conn).expect("schema");
    pool
}

fn t(s: &str) -> Option<NaiveTime> {
    Some(NaiveTime::parse_from_str(s, "%H:%M").expect("valid test time"))
}

fn audit_ops(pool: &DbPool) -> Vec<String> {
    let mut stmt = pool
        .conn
        .prepare("SELECT operation FROM log WHERE operation != 'migration_applied' ORDER BY id")
        .expect("prepare");
    stmt.query_map([], |row| row.get(0))
        .expect("query")
        .map(|r| r.expect("row"))
        .collect()
}

#[test]
fn test_migrations_are_idempotent() {
    let pool = pool();
    init_db(&pool.conn).expect("second run");

    let applied: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .expect("count");
    assert_eq!(applied, 2);
}

#[test]
fn test_upsert_is_last_write_wins() {
    let pool = pool();
    let d = date("2025-01-06");

    let mut rec = RawDayRecord::new(d).with_office("09:00", "12:00", "13:00", "18:00");
    upsert_record(&pool.conn, &rec).expect("insert");

    rec.clock_out = Some("19:00".into());
    rec.is_remote_day = true;
    rec.note = "late".into();
    upsert_record(&pool.conn, &rec).expect("update");

    assert_eq!(count_records(&pool.conn).expect("count"), 1);
    assert_eq!(load_record(&pool.conn, &d).expect("load"), Some(rec));
}

#[test]
fn test_load_records_in_bounds_and_order() {
    let pool = pool();
    for d in ["2025-02-03", "2025-01-31", "2025-02-01", "2025-03-01"] {
        upsert_record(&pool.conn, &RawDayRecord::new(date(d))).expect("insert");
    }

    let all = load_records(&pool.conn, None).expect("all");
    assert_eq!(all.len(), 4);
    assert_eq!(all[0].date, date("2025-01-31"));

    let feb = load_records(&pool.conn, Some((date("2025-02-01"), date("2025-02-28"))))
        .expect("february");
    let dates: Vec<_> = feb.iter().map(|r| r.date_str()).collect();
    assert_eq!(dates, vec!["2025-02-01", "2025-02-03"]);
}

#[test]
fn test_delete_record() {
    let pool = pool();
    let d = date("2025-01-06");
    upsert_record(&pool.conn, &RawDayRecord::new(d)).expect("insert");

    assert!(delete_record(&pool.conn, &d).expect("delete"));
    assert!(!delete_record(&pool.conn, &d).expect("delete again"));
    assert_eq!(load_record(&pool.conn, &d).expect("load"), None);
}

#[test]
fn test_add_merges_with_stored_values() {
    let mut pool = pool();
    let d = date("2025-01-06");

    let first = RecordUpdate {
        clock_in: t("09:00"),
        lunch_out: t("12:00"),
        ..RecordUpdate::default()
    };
    AddLogic::apply(&mut pool, d, &first, false).expect("first add");

    let second = RecordUpdate {
        lunch_in: t("13:00"),
        clock_out: t("18:00"),
        note: Some("office".into()),
        ..RecordUpdate::default()
    };
    let stored = AddLogic::apply(&mut pool, d, &second, false).expect("second add");

    assert_eq!(stored.clock_in.as_deref(), Some("09:00"));
    assert_eq!(stored.clock_out.as_deref(), Some("18:00"));
    assert_eq!(stored.note, "office");
    assert_eq!(audit_ops(&pool), vec!["add", "edit"]);
}

#[test]
fn test_add_rejected_by_guard() {
    let mut pool = pool();
    let d = date("2025-01-06");
    let bad = RecordUpdate {
        clock_in: t("09:00"),
        lunch_out: t("12:00"),
        lunch_in: t("13:00"),
        clock_out: t("08:00"),
        ..RecordUpdate::default()
    };

    let err = AddLogic::apply(&mut pool, d, &bad, false).expect_err("guard rejects");
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(load_record(&pool.conn, &d).expect("load"), None);

    // forced entries are stored as they are
    AddLogic::apply(&mut pool, d, &bad, true).expect("forced add");
    assert!(load_record(&pool.conn, &d).expect("load").is_some());
}

#[test]
fn test_add_without_lunch_goes_through_guard() {
    let mut pool = pool();
    let d = date("2025-01-06");
    let reversed = RecordUpdate {
        clock_in: t("15:00"),
        clock_out: t("09:00"),
        ..RecordUpdate::default()
    };

    let err = AddLogic::apply(&mut pool, d, &reversed, false).expect_err("guard rejects");
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(load_record(&pool.conn, &d).expect("load"), None);

    let half_day = RecordUpdate {
        clock_in: t("09:00"),
        clock_out: t("13:00"),
        ..RecordUpdate::default()
    };
    AddLogic::apply(&mut pool, d, &half_day, false).expect("no-lunch day accepted");
}

#[test]
fn test_add_day_off_skips_guard() {
    let mut pool = pool();
    let update = RecordUpdate {
        clock_in: t("18:00"),
        lunch_out: t("12:00"),
        lunch_in: t("11:00"),
        clock_out: t("09:00"),
        day_off: Some(true),
        ..RecordUpdate::default()
    };

    let stored = AddLogic::apply(&mut pool, date("2025-01-06"), &update, false).expect("add");
    assert!(stored.is_manual_override);
}

#[test]
fn test_add_requires_something() {
    let mut pool = pool();
    let err = AddLogic::apply(&mut pool, date("2025-01-06"), &RecordUpdate::default(), false)
        .expect_err("empty update");
    assert!(matches!(err, AppError::InvalidTime(_)));
}

#[test]
fn test_delete_logic_missing_date() {
    let mut pool = pool();
    let err = DeleteLogic::apply(&mut pool, date("2025-01-06")).expect_err("nothing to delete");
    assert!(matches!(err, AppError::NoRecordForDate(_)));
}

#[test]
fn test_demo_is_reproducible() {
    let a = DemoLogic::generate(2025, Some(7)).expect("generate");
    let b = DemoLogic::generate(2025, Some(7)).expect("generate");
    assert_eq!(a, b);

    // 2025 has 261 weekdays
    assert_eq!(a.len(), 261);
    assert!(
        a.iter()
            .all(|r| !matches!(r.date.weekday(), Weekday::Sat | Weekday::Sun))
    );
    assert!(a.iter().all(|r| r.note == DEMO_NOTE && r.clock_in.is_some()));
}

#[test]
fn test_demo_keeps_existing_records() {
    let mut pool = pool();
    let mine = RawDayRecord::new(date("2025-01-06")).with_office("07:00", "11:00", "12:00", "16:00");
    upsert_record(&pool.conn, &mine).expect("insert");

    let report = DemoLogic::apply(&mut pool, 2025, Some(1)).expect("demo");
    assert_eq!(report.skipped, 1);
    assert_eq!(report.inserted, 260);
    assert_eq!(count_records(&pool.conn).expect("count"), 261);
    assert_eq!(
        load_record(&pool.conn, &date("2025-01-06")).expect("load"),
        Some(mine)
    );
}

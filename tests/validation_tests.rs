use chrono::NaiveTime;
use hourbank::core::{EntryTimes, ValidationGuard};

fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid test time")
}

fn entry(clock_in: &str, lunch_out: &str, lunch_in: &str, clock_out: &str) -> EntryTimes {
    EntryTimes {
        clock_in: t(clock_in),
        lunch_out: Some(t(lunch_out)),
        lunch_in: Some(t(lunch_in)),
        clock_out: t(clock_out),
    }
}

#[test]
fn test_valid_day_passes() {
    let out = ValidationGuard::check(&entry("09:00", "12:00", "13:00", "18:00"), false);
    assert!(out.passed);
    assert!(out.message.is_empty());
    assert!(out.warning.is_none());
}

#[test]
fn test_checkout_before_checkin() {
    let out = ValidationGuard::check(&entry("09:00", "12:00", "13:00", "08:00"), false);
    assert!(!out.passed);
    assert_eq!(out.message, "Checkout cannot be earlier than check-in.");

    let same = ValidationGuard::check(&entry("09:00", "09:00", "09:30", "09:00"), false);
    assert!(!same.passed);
}

#[test]
fn test_lunch_outside_shift() {
    let early = ValidationGuard::check(&entry("09:00", "08:30", "09:30", "18:00"), false);
    assert!(!early.passed);
    assert_eq!(early.message, "Lunch must start between check-in and checkout.");

    let late = ValidationGuard::check(&entry("09:00", "18:30", "19:00", "18:00"), false);
    assert!(!late.passed);
}

#[test]
fn test_lunch_return_not_after_start() {
    let out = ValidationGuard::check(&entry("09:00", "12:00", "12:00", "18:00"), false);
    assert!(!out.passed);
    assert_eq!(out.message, "Lunch return must be after lunch start.");
}

#[test]
fn test_first_failure_wins() {
    // checkout and lunch are both wrong, the checkout rule reports
    let out = ValidationGuard::check(&entry("10:00", "13:00", "12:00", "09:00"), false);
    assert_eq!(out.message, "Checkout cannot be earlier than check-in.");
}

#[test]
fn test_absence_skips_checks() {
    let out = ValidationGuard::check(&entry("18:00", "12:00", "11:00", "09:00"), true);
    assert!(out.passed);
}

#[test]
fn test_short_lunch_is_a_warning() {
    let out = ValidationGuard::check(&entry("09:00", "12:00", "12:30", "18:00"), false);
    assert!(out.passed);
    assert_eq!(
        out.warning.as_deref(),
        Some("Lunch break of 30 min is shorter than 60 min.")
    );
}

fn no_lunch(clock_in: &str, clock_out: &str) -> EntryTimes {
    EntryTimes {
        clock_in: t(clock_in),
        lunch_out: None,
        lunch_in: None,
        clock_out: t(clock_out),
    }
}

#[test]
fn test_day_without_lunch() {
    let ok = ValidationGuard::check(&no_lunch("09:00", "15:00"), false);
    assert!(ok.passed);
    assert!(ok.warning.is_none());

    let reversed = ValidationGuard::check(&no_lunch("15:00", "09:00"), false);
    assert!(!reversed.passed);
    assert_eq!(reversed.message, "Checkout cannot be earlier than check-in.");

    // checkout not filled in yet
    let open = ValidationGuard::check(&no_lunch("15:00", "00:00"), false);
    assert!(open.passed);
}

#[test]
fn test_lunch_out_without_return() {
    let mut e = no_lunch("09:00", "18:00");
    e.lunch_out = Some(t("12:00"));
    assert!(ValidationGuard::check(&e, false).passed);

    e.lunch_out = Some(t("19:00"));
    let out = ValidationGuard::check(&e, false);
    assert_eq!(out.message, "Lunch must start between check-in and checkout.");
}

//! Formatting utilities used for CLI and export outputs.

use chrono::{Datelike, NaiveDate, Weekday};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Fractional hours as `HH:MM` (short) or `HHh MMm`, rounded to the minute.
pub fn hours2readable(hours: f64, want_sign: bool, short: bool) -> String {
    let mins = (hours * 60.0).round() as i64;
    let abs_m = mins.abs();
    let h = abs_m / 60;
    let m = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, h, m)
    } else {
        format!("{}{:02}h {:02}m", sign, h, m)
    }
}

/// Two-decimal rendering used in tables and exports.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

pub fn weekday_short(d: NaiveDate) -> &'static str {
    weekday_name(d.weekday(), true)
}

pub fn weekday_name(wd: Weekday, short: bool) -> &'static str {
    match (wd, short) {
        (Weekday::Mon, true) => "Mon",
        (Weekday::Tue, true) => "Tue",
        (Weekday::Wed, true) => "Wed",
        (Weekday::Thu, true) => "Thu",
        (Weekday::Fri, true) => "Fri",
        (Weekday::Sat, true) => "Sat",
        (Weekday::Sun, true) => "Sun",
        (Weekday::Mon, false) => "Monday",
        (Weekday::Tue, false) => "Tuesday",
        (Weekday::Wed, false) => "Wednesday",
        (Weekday::Thu, false) => "Thursday",
        (Weekday::Fri, false) => "Friday",
        (Weekday::Sat, false) => "Saturday",
        (Weekday::Sun, false) => "Sunday",
    }
}

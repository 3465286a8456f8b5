//! Time utilities: strict HH:MM parsing for user input, duration strings.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// Strict parse of a clock time typed on the command line.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let t = t.trim();
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Canonical text stored for a time (`HH:MM`, seconds only when non-zero).
pub fn time_to_db(t: NaiveTime) -> String {
    if t.second() == 0 {
        t.format("%H:%M").to_string()
    } else {
        t.format("%H:%M:%S").to_string()
    }
}

/// Parse a duration such as `8h`, `7h30m`, `450m` or `7.5` into hours.
pub fn parse_duration_hours(s: &str) -> Option<f64> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }

    if let Ok(h) = s.parse::<f64>() {
        return (h.is_finite() && h >= 0.0).then_some(h);
    }

    let (hours_part, rest) = match s.split_once('h') {
        Some((h, rest)) => (Some(h), rest),
        None => (None, s.as_str()),
    };

    let hours: f64 = match hours_part {
        Some(h) => h.trim().parse::<u32>().ok()? as f64,
        None => 0.0,
    };

    let rest = rest.trim();
    let minutes: f64 = if rest.is_empty() {
        0.0
    } else {
        rest.strip_suffix('m')?.trim().parse::<u32>().ok()? as f64
    };

    Some(hours + minutes / 60.0)
}

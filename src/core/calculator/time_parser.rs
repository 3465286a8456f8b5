//! Lenient clock-time parsing: text → duration since midnight.
//!
//! Anything that is not `HH:MM` or `HH:MM:SS` is "no time recorded" and
//! becomes a zero duration. Strict checks live in `core::validation`.

use chrono::TimeDelta;

/// Placeholder some stores write for an unset time column.
const NONE_PLACEHOLDER: &str = "None";

/// Parse an optional clock string into a duration from midnight.
///
/// Never fails: absent, empty, `"None"` and malformed input all yield
/// [`TimeDelta::zero`].
pub fn parse_clock(input: Option<&str>) -> TimeDelta {
    let Some(raw) = input else {
        return TimeDelta::zero();
    };

    let s = raw.trim();
    if s.is_empty() || s == NONE_PLACEHOLDER {
        return TimeDelta::zero();
    }

    let parts: Result<Vec<i64>, _> = s.split(':').map(|p| p.trim().parse::<i64>()).collect();

    let delta = match parts.as_deref() {
        Ok([h, m]) => from_parts(*h, *m, 0),
        Ok([h, m, sec]) => from_parts(*h, *m, *sec),
        _ => None,
    };

    delta.unwrap_or_else(TimeDelta::zero)
}

/// `None` when a component overflows the duration range.
fn from_parts(hours: i64, minutes: i64, seconds: i64) -> Option<TimeDelta> {
    TimeDelta::try_hours(hours)?
        .checked_add(&TimeDelta::try_minutes(minutes)?)?
        .checked_add(&TimeDelta::try_seconds(seconds)?)
}

/// Same as [`parse_clock`], for the `Option<String>` fields of a record.
pub fn parse_field(field: &Option<String>) -> TimeDelta {
    parse_clock(field.as_deref())
}

/// Express a duration as fractional hours.
pub fn to_hours(d: TimeDelta) -> f64 {
    d.num_seconds() as f64 / 3600.0
}

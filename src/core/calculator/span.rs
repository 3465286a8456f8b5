use crate::core::calculator::time_parser::{parse_clock, to_hours};
use chrono::TimeDelta;

/// Elapsed hours from `start` to `end`, wrapping past midnight.
///
/// - equal times → `0.0` (never a full day)
/// - `end` before `start` → the block crossed midnight, add 24h
pub fn span_between(start: TimeDelta, end: TimeDelta) -> f64 {
    if start == end {
        return 0.0;
    }

    let mut delta = difference(start, end);
    if delta < TimeDelta::zero() {
        delta = delta
            .checked_add(&TimeDelta::days(1))
            .unwrap_or_else(TimeDelta::zero);
    }

    to_hours(delta)
}

/// Text form of [`span_between`]; unparsable times count as midnight.
pub fn span_hours(start: Option<&str>, end: Option<&str>) -> f64 {
    span_between(parse_clock(start), parse_clock(end))
}

/// Signed elapsed hours from `start` to `end`, without midnight wrap.
///
/// Used for the office schedule, where `end < start` is bad data and must
/// stay visible as a negative value.
pub fn elapsed_hours(start: TimeDelta, end: TimeDelta) -> f64 {
    to_hours(difference(start, end))
}

// `end - start`, zero if it does not fit in a TimeDelta
fn difference(start: TimeDelta, end: TimeDelta) -> TimeDelta {
    end.checked_sub(&start).unwrap_or_else(TimeDelta::zero)
}

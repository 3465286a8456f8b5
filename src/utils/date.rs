//! Date helpers: today, parsing, and period expressions.
//!
//! A period is one of:
//! - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
//! - `START:END` where both sides use the same shape
//! - `all` (no bounds)

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// First and last day of a month.
pub fn month_bounds(year: i32, month: u32) -> Option<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    Some((first, next.pred_opt()?))
}

pub fn current_month() -> AppResult<(NaiveDate, NaiveDate)> {
    let t = today();
    month_bounds(t.year(), t.month()).ok_or_else(|| AppError::InvalidDate(t.to_string()))
}

/// Resolve an optional `--period`; `None` means the current month.
pub fn resolve_period(period: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match period {
        None => Ok(Some(current_month()?)),
        Some(p) if p.trim().eq_ignore_ascii_case("all") => Ok(None),
        Some(p) => parse_range(p).map(Some),
    }
}

/// Parse a period expression into inclusive bounds.
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    let (start, end) = match r.split_once(':') {
        Some((s, e)) => {
            let (s, e) = (s.trim(), e.trim());
            if s.len() != e.len() {
                return Err(invalid(r, "start and end must have the same format"));
            }
            (bounds_of(s)?.0, bounds_of(e)?.1)
        }
        None => bounds_of(r)?,
    };

    if end < start {
        return Err(invalid(r, "end is before start"));
    }

    Ok((start, end))
}

fn bounds_of(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        // YYYY
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid(p, "invalid year"))?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid(p, "invalid year"))?;
            let d2 =
                NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid(p, "invalid year"))?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let d = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid(p, "invalid month"))?;
            month_bounds(d.year(), d.month()).ok_or_else(|| invalid(p, "invalid month"))
        }
        // YYYY-MM-DD
        10 => {
            let d = parse_date(p).ok_or_else(|| invalid(p, "invalid date"))?;
            Ok((d, d))
        }
        _ => Err(invalid(p, "unsupported period format")),
    }
}

fn invalid(p: &str, why: &str) -> AppError {
    AppError::InvalidPeriod(format!("{p} ({why})"))
}

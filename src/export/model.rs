// src/export/model.rs

use crate::models::EnrichedDayRecord;
use crate::utils::formatting::{round2, weekday_short};
use serde::Serialize;

/// Flat row of an enriched day, hours rounded to two decimals.
#[derive(Serialize, Clone, Debug)]
pub struct DayExport {
    pub date: String,
    pub weekday: String,
    pub clock_in: String,
    pub lunch_out: String,
    pub lunch_in: String,
    pub clock_out: String,
    pub remote_start: String,
    pub remote_end: String,
    pub day_off: bool,
    pub remote_day: bool,
    pub office_hours: f64,
    pub remote_hours: f64,
    pub total_hours: f64,
    pub target_hours: f64,
    pub reason: String,
    pub raw_surplus: f64,
    pub weight: f64,
    pub weighted_balance: f64,
    pub extra_office: f64,
    pub extra_remote: f64,
    pub note: String,
}

impl From<&EnrichedDayRecord> for DayExport {
    fn from(e: &EnrichedDayRecord) -> Self {
        let t = |f: &Option<String>| f.clone().unwrap_or_default();

        Self {
            date: e.raw.date_str(),
            weekday: weekday_short(e.date()).to_string(),
            clock_in: t(&e.raw.clock_in),
            lunch_out: t(&e.raw.lunch_out),
            lunch_in: t(&e.raw.lunch_in),
            clock_out: t(&e.raw.clock_out),
            remote_start: t(&e.raw.remote_start),
            remote_end: t(&e.raw.remote_end),
            day_off: e.raw.is_manual_override,
            remote_day: e.raw.is_remote_day,
            office_hours: round2(e.office_hours),
            remote_hours: round2(e.remote_hours),
            total_hours: round2(e.total_hours),
            target_hours: round2(e.target_hours),
            reason: e.reason_label(),
            raw_surplus: round2(e.raw_surplus),
            weight: e.weight,
            weighted_balance: round2(e.weighted_balance),
            extra_office: round2(e.extra_office),
            extra_remote: round2(e.extra_remote),
            note: e.raw.note.clone(),
        }
    }
}

/// Header for CSV / XLSX, in field order.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "weekday",
        "clock_in",
        "lunch_out",
        "lunch_in",
        "clock_out",
        "remote_start",
        "remote_end",
        "day_off",
        "remote_day",
        "office_hours",
        "remote_hours",
        "total_hours",
        "target_hours",
        "reason",
        "raw_surplus",
        "weight",
        "weighted_balance",
        "extra_office",
        "extra_remote",
        "note",
    ]
}

/// Row as strings, in header order (used by XLSX).
pub(crate) fn day_to_row(d: &DayExport) -> Vec<String> {
    vec![
        d.date.clone(),
        d.weekday.clone(),
        d.clock_in.clone(),
        d.lunch_out.clone(),
        d.lunch_in.clone(),
        d.clock_out.clone(),
        d.remote_start.clone(),
        d.remote_end.clone(),
        d.day_off.to_string(),
        d.remote_day.to_string(),
        d.office_hours.to_string(),
        d.remote_hours.to_string(),
        d.total_hours.to_string(),
        d.target_hours.to_string(),
        d.reason.clone(),
        d.raw_surplus.to_string(),
        d.weight.to_string(),
        d.weighted_balance.to_string(),
        d.extra_office.to_string(),
        d.extra_remote.to_string(),
        d.note.clone(),
    ]
}

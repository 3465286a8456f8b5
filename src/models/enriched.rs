use super::{day_reason::DayReason, day_record::RawDayRecord};
use chrono::NaiveDate;
use serde::Serialize;

/// Derived view of a [`RawDayRecord`]. Never persisted.
///
/// Values are full precision; rounding is a display concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedDayRecord {
    pub raw: RawDayRecord,

    pub office_span: f64, // (out - in) - (lunch_in - lunch_out), signed
    pub remote_span: f64, // remote block, midnight-wrapped

    pub office_hours: f64,
    pub remote_hours: f64,
    pub total_hours: f64,

    pub target_hours: f64,
    pub reason: DayReason,

    pub raw_surplus: f64,
    pub weight: f64,
    pub weighted_balance: f64,
    pub extra_office: f64,
    pub extra_remote: f64,
}

impl EnrichedDayRecord {
    pub fn date(&self) -> NaiveDate {
        self.raw.date
    }

    pub fn reason_label(&self) -> String {
        self.reason.label()
    }

    pub fn is_deficit(&self) -> bool {
        self.raw_surplus <= 0.0
    }
}

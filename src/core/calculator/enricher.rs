use crate::core::calculator::span::{elapsed_hours, span_hours};
use crate::core::calculator::time_parser::parse_field;
use crate::core::calendar::{CalendarError, CalendarOracle, HolidayMap};
use crate::models::{DayReason, EnrichedDayRecord, RawDayRecord};
use chrono::Datelike;
use std::collections::BTreeMap;

/// Turns raw day records into enriched ones.
///
/// Holds nothing but a reference to the calendar: every record is computed
/// on its own, so the same input always gives the same output.
pub struct DayEnricher<'a> {
    oracle: &'a CalendarOracle,
}

/// Office/remote split of one day, before the calendar is consulted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkedHours {
    pub office_span: f64,
    pub remote_span: f64,
    pub office_hours: f64,
    pub remote_hours: f64,
}

impl WorkedHours {
    pub fn total(&self) -> f64 {
        self.office_hours + self.remote_hours
    }
}

/// Surplus after weighting, split by where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedSurplus {
    pub balance: f64,
    pub extra_office: f64,
    pub extra_remote: f64,
}

impl<'a> DayEnricher<'a> {
    pub fn new(oracle: &'a CalendarOracle) -> Self {
        Self { oracle }
    }

    /// Enrich one record, loading the holidays of its year.
    pub fn enrich(&self, record: &RawDayRecord) -> Result<EnrichedDayRecord, CalendarError> {
        let (target, reason) = self.oracle.classify(record.date, record.is_manual_override)?;
        Ok(build(record, target, reason))
    }

    /// Enrich one record against an already loaded holiday map.
    pub fn enrich_with(&self, record: &RawDayRecord, holidays: &HolidayMap) -> EnrichedDayRecord {
        let (target, reason) =
            self.oracle.classify_with(record.date, record.is_manual_override, holidays);
        build(record, target, reason)
    }

    /// Enrich a whole collection, same order and cardinality as the input.
    ///
    /// Holidays are loaded once per year. The first calendar failure aborts
    /// the batch.
    pub fn enrich_all(
        &self,
        records: &[RawDayRecord],
    ) -> Result<Vec<EnrichedDayRecord>, CalendarError> {
        let mut calendars: BTreeMap<i32, HolidayMap> = BTreeMap::new();

        for r in records.iter().filter(|r| !r.is_manual_override) {
            let year = r.date.year();
            if !calendars.contains_key(&year) {
                calendars.insert(year, self.oracle.holidays_for(year)?);
            }
        }

        let empty = HolidayMap::new();
        let out: Vec<EnrichedDayRecord> = records
            .iter()
            .map(|r| {
                let holidays = calendars.get(&r.date.year()).unwrap_or(&empty);
                self.enrich_with(r, holidays)
            })
            .collect();

        tracing::debug!(
            records = out.len(),
            years = calendars.len(),
            "enriched day records"
        );
        Ok(out)
    }
}

/// Office and remote hours of a record.
///
/// The office span is a signed difference: a checkout before check-in shows
/// up as negative hours. Only the remote block wraps past midnight. On a
/// remote day the office span is reclassified as remote.
pub fn worked_hours(record: &RawDayRecord) -> WorkedHours {
    let clock_in = parse_field(&record.clock_in);
    let clock_out = parse_field(&record.clock_out);
    let lunch_out = parse_field(&record.lunch_out);
    let lunch_in = parse_field(&record.lunch_in);

    let office_span = elapsed_hours(clock_in, clock_out) - elapsed_hours(lunch_out, lunch_in);
    let remote_span = span_hours(record.remote_start.as_deref(), record.remote_end.as_deref());

    let (office_hours, remote_hours) = if record.is_remote_day {
        (0.0, office_span + remote_span)
    } else {
        (office_span, remote_span)
    };

    WorkedHours {
        office_span,
        remote_span,
        office_hours,
        remote_hours,
    }
}

/// Apply the overtime weight to a day's surplus.
///
/// Deficits pass through unweighted and are booked entirely on the remote
/// side. A positive surplus is multiplied by `weight`; the office share is
/// the part of office hours above target, the rest comes from remote work.
pub fn weigh_surplus(
    raw_surplus: f64,
    weight: f64,
    office_hours: f64,
    remote_hours: f64,
    target_hours: f64,
) -> WeightedSurplus {
    if raw_surplus <= 0.0 {
        return WeightedSurplus {
            balance: raw_surplus,
            extra_office: 0.0,
            extra_remote: raw_surplus,
        };
    }

    let balance = raw_surplus * weight;

    if office_hours > target_hours {
        WeightedSurplus {
            balance,
            extra_office: (office_hours - target_hours) * weight,
            extra_remote: remote_hours * weight,
        }
    } else {
        WeightedSurplus {
            balance,
            extra_office: 0.0,
            extra_remote: balance,
        }
    }
}

fn build(record: &RawDayRecord, target_hours: f64, reason: DayReason) -> EnrichedDayRecord {
    let hours = worked_hours(record);
    let total_hours = hours.total();
    let raw_surplus = total_hours - target_hours;
    let weight = reason.weight();
    let weighted = weigh_surplus(
        raw_surplus,
        weight,
        hours.office_hours,
        hours.remote_hours,
        target_hours,
    );

    EnrichedDayRecord {
        raw: record.clone(),
        office_span: hours.office_span,
        remote_span: hours.remote_span,
        office_hours: hours.office_hours,
        remote_hours: hours.remote_hours,
        total_hours,
        target_hours,
        reason,
        raw_surplus,
        weight,
        weighted_balance: weighted.balance,
        extra_office: weighted.extra_office,
        extra_remote: weighted.extra_remote,
    }
}

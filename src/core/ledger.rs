//! Reductions over enriched records: hours bank, totals, averages.

use crate::models::EnrichedDayRecord;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub days: usize,
    /// Days whose raw surplus is zero or negative.
    pub deficit_days: usize,
    pub total_office: f64,
    pub total_remote: f64,
    pub total_worked: f64,
    pub total_target: f64,
    pub raw_balance: f64,
    /// The hours bank: sum of weighted balances.
    pub balance: f64,
    pub extra_office: f64,
    pub extra_remote: f64,
    pub average_worked: f64,
    pub by_reason: BTreeMap<String, usize>,
    /// Mean worked hours per weekday, Monday first; only weekdays present.
    pub by_weekday: Vec<(Weekday, f64)>,
    pub office_share: Option<f64>,
}

/// One step of the running hours bank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LedgerPoint {
    pub date: NaiveDate,
    pub balance: f64,
    pub cumulative: f64,
}

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub struct LedgerAggregator;

impl LedgerAggregator {
    pub fn summarize(records: &[EnrichedDayRecord]) -> LedgerSummary {
        let sorted = sorted_by_date(records);
        let mut s = LedgerSummary {
            days: sorted.len(),
            ..LedgerSummary::default()
        };

        let mut weekday_sums: BTreeMap<u32, (f64, usize)> = BTreeMap::new();

        for r in &sorted {
            s.total_office += r.office_hours;
            s.total_remote += r.remote_hours;
            s.total_worked += r.total_hours;
            s.total_target += r.target_hours;
            s.raw_balance += r.raw_surplus;
            s.balance += r.weighted_balance;
            s.extra_office += r.extra_office;
            s.extra_remote += r.extra_remote;
            if r.is_deficit() {
                s.deficit_days += 1;
            }

            *s.by_reason.entry(r.reason_label()).or_insert(0) += 1;

            let slot = weekday_sums
                .entry(r.date().weekday().num_days_from_monday())
                .or_insert((0.0, 0));
            slot.0 += r.total_hours;
            slot.1 += 1;
        }

        if s.days > 0 {
            s.average_worked = s.total_worked / s.days as f64;
        }

        s.by_weekday = WEEK
            .iter()
            .filter_map(|wd| {
                weekday_sums
                    .get(&wd.num_days_from_monday())
                    .map(|(sum, n)| (*wd, sum / *n as f64))
            })
            .collect();

        let worked = s.total_office + s.total_remote;
        s.office_share = if worked != 0.0 {
            Some(s.total_office / worked)
        } else {
            None
        };

        s
    }

    /// Running balance in date order.
    pub fn cumulative(records: &[EnrichedDayRecord]) -> Vec<LedgerPoint> {
        let mut running = 0.0;
        sorted_by_date(records)
            .into_iter()
            .map(|r| {
                running += r.weighted_balance;
                LedgerPoint {
                    date: r.date(),
                    balance: r.weighted_balance,
                    cumulative: running,
                }
            })
            .collect()
    }

    /// Trailing mean of worked hours over `window` records (at least one).
    pub fn rolling_mean(records: &[EnrichedDayRecord], window: usize) -> Vec<(NaiveDate, f64)> {
        let window = window.max(1);
        let sorted = sorted_by_date(records);

        (0..sorted.len())
            .map(|i| {
                let from = (i + 1).saturating_sub(window);
                let slice = &sorted[from..=i];
                let sum: f64 = slice.iter().map(|r| r.total_hours).sum();
                (sorted[i].date(), sum / slice.len() as f64)
            })
            .collect()
    }
}

fn sorted_by_date(records: &[EnrichedDayRecord]) -> Vec<&EnrichedDayRecord> {
    let mut v: Vec<&EnrichedDayRecord> = records.iter().collect();
    v.sort_by_key(|r| r.date());
    v
}

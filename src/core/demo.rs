//! Synthetic records for trying the tool without real data.

use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_record, upsert_record};
use crate::errors::{AppError, AppResult};
use crate::models::RawDayRecord;
use crate::utils::time::time_to_db;
use chrono::{Datelike, NaiveDate, NaiveTime, TimeDelta, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEMO_NOTE: &str = "Synthetic record (demo mode)";

/// Probability that a generated day also has a remote block.
const REMOTE_CHANCE: f64 = 0.2;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DemoReport {
    pub inserted: usize,
    pub skipped: usize,
}

pub struct DemoLogic;

impl DemoLogic {
    /// One record per Monday..Friday of `year`. The same seed always
    /// produces the same records.
    pub fn generate(year: i32, seed: Option<u64>) -> AppResult<Vec<RawDayRecord>> {
        let first = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| AppError::InvalidDate(year.to_string()))?;

        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };

        let records = first
            .iter_days()
            .take_while(|d| d.year() == year)
            .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
            .map(|d| synthetic_day(d, &mut rng))
            .collect();

        Ok(records)
    }

    /// Store the synthetic year. Dates that already hold a record are left
    /// untouched.
    pub fn apply(pool: &mut DbPool, year: i32, seed: Option<u64>) -> AppResult<DemoReport> {
        let mut report = DemoReport::default();

        let tx = pool.conn.transaction()?;
        for rec in Self::generate(year, seed)? {
            if load_record(&tx, &rec.date)?.is_some() {
                report.skipped += 1;
                continue;
            }
            upsert_record(&tx, &rec)?;
            report.inserted += 1;
        }
        tx.commit()?;

        tracing::info!(
            year,
            inserted = report.inserted,
            skipped = report.skipped,
            "demo data"
        );
        ttlog_quiet(
            &pool.conn,
            "demo",
            &year.to_string(),
            &format!("{} synthetic records ({} skipped)", report.inserted, report.skipped),
        );

        Ok(report)
    }
}

fn at(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}

fn shifted(base: NaiveTime, minutes: i64) -> String {
    time_to_db(base + TimeDelta::minutes(minutes))
}

fn synthetic_day(date: NaiveDate, rng: &mut StdRng) -> RawDayRecord {
    let clock_in = shifted(at(9, 0), rng.gen_range(-15..=45));
    let clock_out = shifted(at(18, 0), rng.gen_range(-20..=120));

    let lunch_start = at(12, 0) + TimeDelta::minutes(rng.gen_range(0..=10));
    let lunch_len = 60 + rng.gen_range(-5..=10);
    let lunch_out = time_to_db(lunch_start);
    let lunch_in = shifted(lunch_start, lunch_len);

    let mut rec =
        RawDayRecord::new(date).with_office(&clock_in, &lunch_out, &lunch_in, &clock_out);

    if rng.gen_bool(REMOTE_CHANCE) {
        let end = shifted(at(20, 0), rng.gen_range(30..=120));
        rec = rec.with_remote("20:00", &end);
    }

    rec.note = DEMO_NOTE.to_string();
    rec
}

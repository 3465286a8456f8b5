use crate::core::validation::{EntryTimes, ValidationGuard};
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_record, upsert_record};
use crate::errors::{AppError, AppResult};
use crate::models::RawDayRecord;
use crate::ui::messages::warning;
use crate::utils::time::{parse_time, time_to_db};
use chrono::{NaiveDate, NaiveTime};

/// Fields supplied on the command line. `None` keeps the stored value.
#[derive(Debug, Clone, Default)]
pub struct RecordUpdate {
    pub clock_in: Option<NaiveTime>,
    pub lunch_out: Option<NaiveTime>,
    pub lunch_in: Option<NaiveTime>,
    pub clock_out: Option<NaiveTime>,
    pub remote_start: Option<NaiveTime>,
    pub remote_end: Option<NaiveTime>,
    pub day_off: Option<bool>,
    pub remote_day: Option<bool>,
    pub note: Option<String>,
}

impl RecordUpdate {
    pub fn is_empty(&self) -> bool {
        self.clock_in.is_none()
            && self.lunch_out.is_none()
            && self.lunch_in.is_none()
            && self.clock_out.is_none()
            && self.remote_start.is_none()
            && self.remote_end.is_none()
            && self.day_off.is_none()
            && self.remote_day.is_none()
            && self.note.is_none()
    }

    /// Apply the update on top of `rec`.
    pub fn merge_into(&self, mut rec: RawDayRecord) -> RawDayRecord {
        fn set(field: &mut Option<String>, value: Option<NaiveTime>) {
            if let Some(t) = value {
                *field = Some(time_to_db(t));
            }
        }

        set(&mut rec.clock_in, self.clock_in);
        set(&mut rec.lunch_out, self.lunch_out);
        set(&mut rec.lunch_in, self.lunch_in);
        set(&mut rec.clock_out, self.clock_out);
        set(&mut rec.remote_start, self.remote_start);
        set(&mut rec.remote_end, self.remote_end);

        if let Some(b) = self.day_off {
            rec.is_manual_override = b;
        }
        if let Some(b) = self.remote_day {
            rec.is_remote_day = b;
        }
        if let Some(n) = &self.note {
            rec.note = n.clone();
        }

        rec
    }
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Upsert the record of `date` and return what was stored.
    ///
    /// Once check-in and checkout are both known the day goes through the
    /// validation guard, unless it is off or `force` is set.
    pub fn apply(
        pool: &mut DbPool,
        date: NaiveDate,
        update: &RecordUpdate,
        force: bool,
    ) -> AppResult<RawDayRecord> {
        if update.is_empty() {
            return Err(AppError::InvalidTime(
                "Nothing to do: specify at least one time, flag or note.".into(),
            ));
        }

        let existing = load_record(&pool.conn, &date)?;
        let is_edit = existing.is_some();
        let merged = update.merge_into(existing.unwrap_or_else(|| RawDayRecord::new(date)));

        if !force && let Some(entry) = entry_times(&merged) {
            let outcome = ValidationGuard::check(&entry, merged.is_manual_override);
            if !outcome.passed {
                tracing::info!(%date, reason = %outcome.message, "entry rejected by guard");
                return Err(AppError::Validation(outcome.message));
            }
            if let Some(w) = outcome.warning {
                warning(w);
            }
        }

        upsert_record(&pool.conn, &merged)?;

        let operation = if is_edit { "edit" } else { "add" };
        ttlog_quiet(&pool.conn, operation, &merged.date_str(), &describe(&merged));

        Ok(merged)
    }
}

/// Office schedule of a record, when check-in and checkout are both set.
fn entry_times(rec: &RawDayRecord) -> Option<EntryTimes> {
    let get = |f: &Option<String>| f.as_deref().and_then(parse_time);

    Some(EntryTimes {
        clock_in: get(&rec.clock_in)?,
        lunch_out: get(&rec.lunch_out),
        lunch_in: get(&rec.lunch_in),
        clock_out: get(&rec.clock_out)?,
    })
}

fn describe(rec: &RawDayRecord) -> String {
    let t = |f: &Option<String>| f.clone().unwrap_or_else(|| "--:--".into());
    let mut msg = format!(
        "in={} lunch={}-{} out={} remote={}-{}",
        t(&rec.clock_in),
        t(&rec.lunch_out),
        t(&rec.lunch_in),
        t(&rec.clock_out),
        t(&rec.remote_start),
        t(&rec.remote_end),
    );
    if rec.is_manual_override {
        msg.push_str(" [day off]");
    }
    if rec.is_remote_day {
        msg.push_str(" [remote day]");
    }
    msg
}

use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::delete_record;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply(pool: &mut DbPool, date: NaiveDate) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();

        if !delete_record(&pool.conn, &date)? {
            return Err(AppError::NoRecordForDate(date_str));
        }

        tracing::info!(%date, "record deleted");
        ttlog_quiet(&pool.conn, "del", &date_str, "record deleted");
        Ok(())
    }
}

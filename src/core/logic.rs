use crate::config::Config;
use crate::core::calculator::DayEnricher;
use crate::db::queries::load_records;
use crate::errors::AppResult;
use crate::models::EnrichedDayRecord;
use chrono::NaiveDate;
use rusqlite::Connection;

pub struct Core;

impl Core {
    /// Load the stored records within `bounds` and enrich them with the
    /// calendar described by `cfg`.
    pub fn enriched_records(
        conn: &Connection,
        cfg: &Config,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<Vec<EnrichedDayRecord>> {
        let records = load_records(conn, bounds)?;
        if records.is_empty() {
            return Ok(Vec::new());
        }

        let oracle = cfg.calendar()?;
        let enriched = DayEnricher::new(&oracle).enrich_all(&records)?;
        Ok(enriched)
    }
}

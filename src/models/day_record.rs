use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the hours bank, keyed by date.
///
/// Times are kept as text exactly as they were entered (`HH:MM` or
/// `HH:MM:SS`). A missing value, an empty string, `"None"` or the sentinel
/// `"00:00"` all mean "not applicable".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDayRecord {
    pub date: NaiveDate,              // ⇔ records.date (TEXT "YYYY-MM-DD", primary key)
    pub clock_in: Option<String>,     // ⇔ records.clock_in
    pub lunch_out: Option<String>,    // ⇔ records.lunch_out
    pub lunch_in: Option<String>,     // ⇔ records.lunch_in
    pub clock_out: Option<String>,    // ⇔ records.clock_out
    pub remote_start: Option<String>, // ⇔ records.remote_start
    pub remote_end: Option<String>,   // ⇔ records.remote_end

    pub is_manual_override: bool, // ⇔ records.manual_override (0/1)
    pub is_remote_day: bool,      // ⇔ records.remote_day (0/1)
    pub note: String,             // ⇔ records.note
}

impl RawDayRecord {
    /// Empty record for a date: no times, no flags.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            clock_in: None,
            lunch_out: None,
            lunch_in: None,
            clock_out: None,
            remote_start: None,
            remote_end: None,
            is_manual_override: false,
            is_remote_day: false,
            note: String::new(),
        }
    }

    /// Convenience builder for the office schedule.
    pub fn with_office(
        mut self,
        clock_in: &str,
        lunch_out: &str,
        lunch_in: &str,
        clock_out: &str,
    ) -> Self {
        self.clock_in = Some(clock_in.to_string());
        self.lunch_out = Some(lunch_out.to_string());
        self.lunch_in = Some(lunch_in.to_string());
        self.clock_out = Some(clock_out.to_string());
        self
    }

    pub fn with_remote(mut self, start: &str, end: &str) -> Self {
        self.remote_start = Some(start.to_string());
        self.remote_end = Some(end.to_string());
        self
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

use super::{CalendarError, HolidayMap, HolidayProvider};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Holidays known up front, e.g. a cached calendar file or a test fixture.
///
/// Only the years listed (explicitly or through at least one entry) are
/// covered; any other year is reported as unavailable.
#[derive(Debug, Clone, Default)]
pub struct StaticHolidays {
    jurisdiction: String,
    years: BTreeSet<i32>,
    holidays: HolidayMap,
}

/// On-disk shape of a calendar file.
///
/// ```yaml
/// jurisdiction: BR-SP
/// years: [2026]
/// holidays:
///   2025-01-01: Confraternização Universal
///   2025-04-18: Sexta-feira Santa
/// ```
#[derive(Debug, Deserialize)]
struct CalendarFile {
    jurisdiction: String,
    #[serde(default)]
    years: Vec<i32>,
    #[serde(default)]
    holidays: BTreeMap<NaiveDate, String>,
}

impl StaticHolidays {
    pub fn new(jurisdiction: &str) -> Self {
        Self {
            jurisdiction: jurisdiction.to_string(),
            ..Self::default()
        }
    }

    /// Mark a year as covered even if it has no entries.
    pub fn with_year(mut self, year: i32) -> Self {
        self.years.insert(year);
        self
    }

    pub fn with_holiday(mut self, date: NaiveDate, name: &str) -> Self {
        self.years.insert(date.year());
        self.holidays.insert(date, name.to_string());
        self
    }

    pub fn load(path: &Path) -> Result<Self, CalendarError> {
        let content = fs::read_to_string(path)
            .map_err(|e| CalendarError::Source(format!("{}: {}", path.display(), e)))?;

        let file: CalendarFile = serde_yaml::from_str(&content)
            .map_err(|e| CalendarError::Source(format!("{}: {}", path.display(), e)))?;

        let mut out = Self::new(&file.jurisdiction);
        for y in file.years {
            out = out.with_year(y);
        }
        for (date, name) in file.holidays {
            out = out.with_holiday(date, &name);
        }

        tracing::info!(
            path = %path.display(),
            years = out.years.len(),
            "loaded static holiday calendar"
        );
        Ok(out)
    }
}

impl HolidayProvider for StaticHolidays {
    fn jurisdiction(&self) -> &str {
        &self.jurisdiction
    }

    fn holidays_for(&self, year: i32) -> Result<HolidayMap, CalendarError> {
        if !self.years.contains(&year) {
            return Err(CalendarError::YearOutOfRange(year));
        }

        Ok(self
            .holidays
            .iter()
            .filter(|(d, _)| d.year() == year)
            .map(|(d, n)| (*d, n.clone()))
            .collect())
    }
}

//! Calendar-aware daily targets.
//!
//! The holiday data comes from a [`HolidayProvider`] chosen by jurisdiction;
//! [`CalendarOracle`] layers the configured municipal holiday on top and
//! decides `(target_hours, reason)` for a date.

mod brazil;
mod static_holidays;

pub use brazil::{BrazilSaoPaulo, easter_sunday};
pub use static_holidays::StaticHolidays;

use crate::models::DayReason;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Standard daily target when nothing else is configured.
pub const DEFAULT_DAILY_TARGET: f64 = 8.0;

/// Holidays of one year, by date.
pub type HolidayMap = BTreeMap<NaiveDate, String>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Unsupported jurisdiction: {0}")]
    UnsupportedJurisdiction(String),

    #[error("No holiday data available for year {0}")]
    YearOutOfRange(i32),

    #[error("Holiday source error: {0}")]
    Source(String),
}

/// Source of public holidays for one jurisdiction.
pub trait HolidayProvider: Send + Sync {
    fn jurisdiction(&self) -> &str;

    fn holidays_for(&self, year: i32) -> Result<HolidayMap, CalendarError>;
}

/// Build the built-in provider for a jurisdiction code (e.g. `BR-SP`).
pub fn provider_for(jurisdiction: &str) -> Result<Box<dyn HolidayProvider>, CalendarError> {
    match jurisdiction.trim().to_uppercase().as_str() {
        BrazilSaoPaulo::CODE => Ok(Box::new(BrazilSaoPaulo)),
        other => Err(CalendarError::UnsupportedJurisdiction(other.to_string())),
    }
}

/// A city-only holiday the jurisdiction data does not carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MunicipalHoliday {
    pub month: u32,
    pub day: u32,
    pub name: String,
}

impl MunicipalHoliday {
    pub fn sao_paulo_anniversary() -> Self {
        Self {
            month: 1,
            day: 25,
            name: "Aniversário de São Paulo".to_string(),
        }
    }

    /// Date in `year`, `None` when it does not exist (e.g. 02-29).
    pub fn date_in(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }
}

pub struct CalendarOracle {
    provider: Box<dyn HolidayProvider>,
    municipal: Option<MunicipalHoliday>,
    daily_target: f64,
}

impl CalendarOracle {
    pub fn new(provider: Box<dyn HolidayProvider>) -> Self {
        Self {
            provider,
            municipal: Some(MunicipalHoliday::sao_paulo_anniversary()),
            daily_target: DEFAULT_DAILY_TARGET,
        }
    }

    pub fn with_municipal(mut self, municipal: Option<MunicipalHoliday>) -> Self {
        self.municipal = municipal;
        self
    }

    pub fn with_daily_target(mut self, hours: f64) -> Self {
        self.daily_target = hours;
        self
    }

    pub fn daily_target(&self) -> f64 {
        self.daily_target
    }

    pub fn jurisdiction(&self) -> &str {
        self.provider.jurisdiction()
    }

    /// Provider holidays for `year` plus the municipal holiday.
    ///
    /// When the municipal date is already a holiday both names are kept,
    /// joined by `"; "`.
    pub fn holidays_for(&self, year: i32) -> Result<HolidayMap, CalendarError> {
        let mut map = self.provider.holidays_for(year)?;

        if let Some(m) = &self.municipal
            && let Some(date) = m.date_in(year)
        {
            map.entry(date)
                .and_modify(|existing| {
                    if existing != &m.name {
                        existing.push_str("; ");
                        existing.push_str(&m.name);
                    }
                })
                .or_insert_with(|| m.name.clone());
        }

        tracing::debug!(year, count = map.len(), "holiday calendar loaded");
        Ok(map)
    }

    /// `(target_hours, reason)` for a date.
    ///
    /// A manual override never touches the holiday source, so it cannot fail.
    pub fn classify(
        &self,
        date: NaiveDate,
        manual_override: bool,
    ) -> Result<(f64, DayReason), CalendarError> {
        if manual_override {
            return Ok((0.0, DayReason::ManualOverride));
        }

        let holidays = self.holidays_for(date.year())?;
        Ok(self.classify_with(date, manual_override, &holidays))
    }

    /// [`classify`](Self::classify) against an already loaded holiday map.
    ///
    /// First match wins: override, holiday, Sunday, Saturday, workday.
    pub fn classify_with(
        &self,
        date: NaiveDate,
        manual_override: bool,
        holidays: &HolidayMap,
    ) -> (f64, DayReason) {
        if manual_override {
            return (0.0, DayReason::ManualOverride);
        }

        if let Some(name) = holidays.get(&date) {
            return (0.0, DayReason::Holiday(name.clone()));
        }

        match date.weekday() {
            Weekday::Sun => (0.0, DayReason::Sunday),
            Weekday::Sat => (0.0, DayReason::Saturday),
            _ => (self.daily_target, DayReason::RegularWorkday),
        }
    }
}

use serde::Serialize;
use std::fmt;

/// Why a date has the target it has.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum DayReason {
    RegularWorkday,
    Saturday,
    Sunday,
    Holiday(String),
    ManualOverride,
}

impl DayReason {
    pub fn label(&self) -> String {
        match self {
            DayReason::RegularWorkday => "regular workday".to_string(),
            DayReason::Saturday => "Saturday".to_string(),
            DayReason::Sunday => "Sunday".to_string(),
            DayReason::Holiday(name) => format!("holiday: {}", name),
            DayReason::ManualOverride => "manual override".to_string(),
        }
    }

    /// Overtime multiplier applied to a positive surplus.
    ///
    /// Sunday and holidays pay 100% extra, Saturday 50%, anything else
    /// (including a manual day off) is unweighted.
    pub fn weight(&self) -> f64 {
        match self {
            DayReason::Sunday | DayReason::Holiday(_) => 2.0,
            DayReason::Saturday => 1.5,
            DayReason::RegularWorkday | DayReason::ManualOverride => 1.0,
        }
    }
}

impl fmt::Display for DayReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

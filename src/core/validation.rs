//! Entry-time consistency checks for the office schedule.
//!
//! Advisory only: the `add` command consults it before saving. Enrichment
//! never calls it and stays defined for any input.

use chrono::{NaiveTime, Timelike};

/// Times proposed for a day, as typed into the entry form.
/// A day without lunch leaves both lunch times unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryTimes {
    pub clock_in: NaiveTime,
    pub lunch_out: Option<NaiveTime>,
    pub lunch_in: Option<NaiveTime>,
    pub clock_out: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub passed: bool,
    pub message: String,
    /// Non-blocking remark (the entry is still accepted).
    pub warning: Option<String>,
}

impl ValidationOutcome {
    fn pass() -> Self {
        Self {
            passed: true,
            message: String::new(),
            warning: None,
        }
    }

    fn fail(message: &str) -> Self {
        Self {
            passed: false,
            message: message.to_string(),
            warning: None,
        }
    }
}

/// Minimum lunch break below which a warning is attached.
const MIN_LUNCH_MINUTES: u32 = 60;

pub struct ValidationGuard;

impl ValidationGuard {
    /// Check a proposed entry. Nothing is checked for an absence.
    ///
    /// Rules, first failure wins:
    /// 1. checkout strictly after check-in, unless checkout is `00:00` (not yet filled)
    /// 2. lunch-out within `[check-in, checkout]`
    /// 3. lunch-in strictly after lunch-out
    ///
    /// Rule 2 needs a lunch-out, rule 3 and the short-lunch warning need
    /// both lunch times.
    pub fn check(entry: &EntryTimes, is_absence: bool) -> ValidationOutcome {
        if is_absence {
            return ValidationOutcome::pass();
        }

        let clock_in = minute_of_day(entry.clock_in);
        let clock_out = minute_of_day(entry.clock_out);

        if clock_out <= clock_in && clock_out != 0 {
            return ValidationOutcome::fail("Checkout cannot be earlier than check-in.");
        }

        let Some(lunch_out) = entry.lunch_out.map(minute_of_day) else {
            return ValidationOutcome::pass();
        };

        if lunch_out < clock_in || lunch_out > clock_out {
            return ValidationOutcome::fail("Lunch must start between check-in and checkout.");
        }

        let Some(lunch_in) = entry.lunch_in.map(minute_of_day) else {
            return ValidationOutcome::pass();
        };

        if lunch_in <= lunch_out {
            return ValidationOutcome::fail("Lunch return must be after lunch start.");
        }

        let mut outcome = ValidationOutcome::pass();
        let lunch = lunch_in - lunch_out;
        if lunch < MIN_LUNCH_MINUTES {
            outcome.warning = Some(format!(
                "Lunch break of {} min is shorter than {} min.",
                lunch, MIN_LUNCH_MINUTES
            ));
        }

        outcome
    }
}

// Minute precision, seconds are ignored.
fn minute_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

pub mod add;
pub mod calculator;
pub mod calendar;
pub mod del;
pub mod demo;
pub mod ledger;
pub mod log;
pub mod logic;
pub mod validation;

pub use calculator::DayEnricher;
pub use calendar::CalendarOracle;
pub use ledger::{LedgerAggregator, LedgerSummary};
pub use validation::{EntryTimes, ValidationGuard, ValidationOutcome};

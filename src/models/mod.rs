pub mod day_reason;
pub mod day_record;
pub mod enriched;

pub use day_reason::DayReason;
pub use day_record::RawDayRecord;
pub use enriched::EnrichedDayRecord;

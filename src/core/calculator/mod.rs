pub mod enricher;
pub mod span;
pub mod time_parser;

pub use enricher::DayEnricher;

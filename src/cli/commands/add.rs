use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::{AddLogic, RecordUpdate};
use crate::core::calculator::DayEnricher;
use crate::errors::{AppError, AppResult};
use crate::models::EnrichedDayRecord;
use crate::ui::messages::success;
use crate::utils::colors::{RESET, color_for_balance};
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Add or update the record of a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        clock_in,
        lunch_out,
        lunch_in,
        clock_out,
        remote_start,
        remote_end,
        day_off,
        remote_day,
        note,
        force,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;

        let update = RecordUpdate {
            clock_in: parse_optional_time(clock_in.as_ref())?,
            lunch_out: parse_optional_time(lunch_out.as_ref())?,
            lunch_in: parse_optional_time(lunch_in.as_ref())?,
            clock_out: parse_optional_time(clock_out.as_ref())?,
            remote_start: parse_optional_time(remote_start.as_ref())?,
            remote_end: parse_optional_time(remote_end.as_ref())?,
            day_off: *day_off,
            remote_day: *remote_day,
            note: note.clone(),
        };

        let mut pool = open_pool(cfg)?;
        let stored = AddLogic::apply(&mut pool, d, &update, *force)?;

        let oracle = cfg.calendar()?;
        let enriched = DayEnricher::new(&oracle).enrich(&stored)?;

        success(format!("Record for {} saved.", d));
        print_day(&enriched);
    }

    Ok(())
}

fn print_day(e: &EnrichedDayRecord) {
    println!(
        "   office {:.2} h | remote {:.2} h | total {:.2} h | target {:.2} h",
        e.office_hours, e.remote_hours, e.total_hours, e.target_hours
    );
    println!(
        "   {} (x{}) | balance {}{:+.2} h{}",
        e.reason_label(),
        e.weight,
        color_for_balance(e.weighted_balance),
        e.weighted_balance,
        RESET
    );
}

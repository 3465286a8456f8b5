use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, RESET};
use crate::utils::formatting::weekday_short;

/// Print the holidays of a year, municipal date included.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { year } = cmd {
        let oracle = cfg.calendar()?;
        let holidays = oracle.holidays_for(*year)?;

        header(
            format!("Holidays {} ({})", year, oracle.jurisdiction()),
            &cfg.separator_char,
        );

        if holidays.is_empty() {
            info("No holidays.");
            return Ok(());
        }

        for (date, name) in &holidays {
            println!(
                "{}{}{} {}  {}",
                CYAN,
                date.format("%Y-%m-%d"),
                RESET,
                weekday_short(*date),
                name
            );
        }
    }

    Ok(())
}

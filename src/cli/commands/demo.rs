use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::demo::DemoLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date;
use chrono::Datelike;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Demo { year, seed } = cmd {
        let year = year.unwrap_or_else(|| date::today().year());

        let mut pool = open_pool(cfg)?;
        let report = DemoLogic::apply(&mut pool, year, *seed)?;

        success(format!(
            "{} synthetic records stored for {}.",
            report.inserted, year
        ));
        if report.skipped > 0 {
            info(format!(
                "{} days already had a record and were left untouched.",
                report.skipped
            ));
        }
    }

    Ok(())
}

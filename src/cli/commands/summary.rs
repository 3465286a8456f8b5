use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::{LedgerAggregator, LedgerSummary};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, RESET, color_for_balance};
use crate::utils::date;
use crate::utils::formatting::{hours2readable, weekday_name};

/// Days averaged by the trailing mean printed under the totals.
const ROLLING_WINDOW: usize = 7;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { period } = cmd {
        let bounds = date::resolve_period(period.as_deref())?;

        let pool = open_pool(cfg)?;
        let records = Core::enriched_records(&pool.conn, cfg, bounds)?;

        if records.is_empty() {
            info("No records for the selected period.");
            return Ok(());
        }

        let s = LedgerAggregator::summarize(&records);
        let title = match bounds {
            Some((from, to)) => format!("Hours bank {} .. {}", from, to),
            None => "Hours bank (all records)".to_string(),
        };

        header(title, &cfg.separator_char);
        print_totals(&s);
        print_breakdown(&s);

        let rolling = LedgerAggregator::rolling_mean(&records, ROLLING_WINDOW);
        if let Some((d, mean)) = rolling.last() {
            println!(
                "\n{}{}-day average worked{} (to {}): {:.2} h",
                CYAN, ROLLING_WINDOW, RESET, d, mean
            );
        }
    }

    Ok(())
}

fn line(label: &str, hours: f64) {
    println!("{}{:<16}{} {:>9.2} h", CYAN, label, RESET, hours);
}

fn print_totals(s: &LedgerSummary) {
    println!("{}{:<16}{} {:>9}", CYAN, "Days", RESET, s.days);
    println!("{}{:<16}{} {:>9}", CYAN, "Not above target", RESET, s.deficit_days);
    line("Office", s.total_office);
    line("Remote", s.total_remote);
    line("Worked", s.total_worked);
    line("Target", s.total_target);
    line("Average/day", s.average_worked);
    line("Raw balance", s.raw_balance);
    line("Extra office", s.extra_office);
    line("Extra remote", s.extra_remote);

    println!(
        "{}{:<16}{} {}{:>+9.2} h{} ({})",
        CYAN,
        "Balance",
        RESET,
        color_for_balance(s.balance),
        s.balance,
        RESET,
        hours2readable(s.balance, true, true)
    );

    if let Some(share) = s.office_share {
        println!(
            "{}{:<16}{} {:>8.1} %",
            CYAN,
            "Office share",
            RESET,
            share * 100.0
        );
    }
}

fn print_breakdown(s: &LedgerSummary) {
    println!("\nDays by reason:");
    for (reason, n) in &s.by_reason {
        println!("  {:<32} {:>4}", reason, n);
    }

    println!("\nAverage worked by weekday:");
    for (wd, mean) in &s.by_weekday {
        println!("  {:<10} {:>6.2} h", weekday_name(*wd, false), mean);
    }
}

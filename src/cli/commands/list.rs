use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::LedgerAggregator;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::EnrichedDayRecord;
use crate::ui::messages::info;
use crate::utils::colors::{RESET, color_for_balance, color_for_reason, colorize_optional};
use crate::utils::date;
use crate::utils::formatting::{bold, hours2readable, weekday_short};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, now } = cmd {
        let bounds = if *now {
            let t = date::today();
            Some((t, t))
        } else {
            date::resolve_period(period.as_deref())?
        };

        let pool = open_pool(cfg)?;
        let records = Core::enriched_records(&pool.conn, cfg, bounds)?;

        if records.is_empty() {
            info("No records for the selected period.");
            return Ok(());
        }

        println!("{}", build_table(&records, cfg).render());

        let summary = LedgerAggregator::summarize(&records);
        println!(
            "{} {}{}{} ({:+.2} h over {} days)",
            bold("Hours bank:"),
            color_for_balance(summary.balance),
            hours2readable(summary.balance, true, false),
            RESET,
            summary.balance,
            summary.days
        );
    }

    Ok(())
}

fn time_cell(value: &Option<String>) -> String {
    colorize_optional(value.as_deref().unwrap_or("--:--"))
}

fn build_table(records: &[EnrichedDayRecord], cfg: &Config) -> Table {
    let mut columns = vec![Column::left("Date")];
    if cfg.show_weekday {
        columns.push(Column::left("Day"));
    }
    columns.extend([
        Column::left("In"),
        Column::left("Lunch"),
        Column::left("Out"),
        Column::left("Remote"),
        Column::right("Office"),
        Column::right("Remote h"),
        Column::right("Total"),
        Column::right("Target"),
        Column::right("Balance"),
        Column::right("Bank"),
        Column::left("Reason"),
    ]);

    let mut table = Table::new(columns).with_separator(&cfg.separator_char);

    // records arrive in date order, like the cumulative points
    let bank = LedgerAggregator::cumulative(records);

    for (r, point) in records.iter().zip(&bank) {
        let raw = &r.raw;
        let mut row = vec![raw.date_str()];
        if cfg.show_weekday {
            row.push(weekday_short(r.date()).to_string());
        }

        let lunch = format!("{}-{}", time_cell(&raw.lunch_out), time_cell(&raw.lunch_in));
        let remote = format!(
            "{}-{}",
            time_cell(&raw.remote_start),
            time_cell(&raw.remote_end)
        );
        let label = r.reason_label();

        row.extend([
            time_cell(&raw.clock_in),
            lunch,
            time_cell(&raw.clock_out),
            remote,
            format!("{:.2}", r.office_hours),
            format!("{:.2}", r.remote_hours),
            format!("{:.2}", r.total_hours),
            format!("{:.2}", r.target_hours),
            format!(
                "{}{:+.2}{}",
                color_for_balance(r.weighted_balance),
                r.weighted_balance,
                RESET
            ),
            format!(
                "{}{:+.2}{}",
                color_for_balance(point.cumulative),
                point.cumulative,
                RESET
            ),
            format!("{}{}{}", color_for_reason(&label), label, RESET),
        ]);

        table.add_row(row);
    }

    table
}

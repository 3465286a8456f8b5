use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for hourbank
/// CLI application to keep a personal hours bank with SQLite
#[derive(Parser)]
#[command(
    name = "hourbank",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal hours bank: log office and remote hours, weigh overtime by calendar day",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Print debug diagnostics on stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, edit or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Report configuration keys missing from the file and add their defaults"
        )]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add or update the record of a day
    Add {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "Office clock-in time (HH:MM)")]
        clock_in: Option<String>,

        #[arg(long = "lunch-out", help = "Lunch start (HH:MM)")]
        lunch_out: Option<String>,

        #[arg(long = "lunch-in", help = "Lunch return (HH:MM)")]
        lunch_in: Option<String>,

        #[arg(long = "out", help = "Office clock-out time (HH:MM)")]
        clock_out: Option<String>,

        #[arg(long = "remote-start", help = "Start of the remote block (HH:MM)")]
        remote_start: Option<String>,

        #[arg(
            long = "remote-end",
            help = "End of the remote block (HH:MM, may be past midnight)"
        )]
        remote_end: Option<String>,

        #[arg(
            long = "day-off",
            num_args = 0..=1,
            default_missing_value = "true",
            help = "Mark the day as an absence: target 0, overtime weight 1"
        )]
        day_off: Option<bool>,

        #[arg(
            long = "remote-day",
            num_args = 0..=1,
            default_missing_value = "true",
            help = "Count the office schedule of this day as remote work"
        )]
        remote_day: Option<bool>,

        #[arg(long = "note", help = "Free-text note")]
        note: Option<String>,

        #[arg(long = "force", help = "Store the record even if the checks reject it")]
        force: bool,
    },

    /// Delete the record of a day
    Del {
        date: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List enriched records with their balance
    List {
        #[arg(long, short, help = "Filter by year/month/day, a custom range or 'all'")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's record")]
        now: bool,
    },

    /// Show the hours bank and aggregate statistics
    Summary {
        #[arg(long, short, help = "Filter by year/month/day, a custom range or 'all'")]
        period: Option<String>,
    },

    /// Show the holidays of a year for the configured jurisdiction
    Calendar {
        /// Year (YYYY)
        year: i32,
    },

    /// Export enriched records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Fill a year with synthetic weekday records
    Demo {
        #[arg(long, help = "Year to fill (default: current year)")]
        year: Option<i32>,

        #[arg(long, help = "Random seed, for reproducible data")]
        seed: Option<u64>,
    },
}

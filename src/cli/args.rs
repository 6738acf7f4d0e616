use crate::config::OutputFormat;
use crate::utils::dates::parse_date_cell;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bikeshare-report")]
#[command(about = "Date-range reports over hourly bike-sharing rentals")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Hide the loading spinner")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        help = "Configuration file [default: bikeshare.toml if present]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the dashboard report for a date range
    Report {
        #[arg(short, long, help = "Hourly rentals CSV [default: data/hour.csv]")]
        data: Option<PathBuf>,

        #[arg(
            short,
            long,
            value_parser = parse_cli_date,
            help = "First day of the range [default: earliest date in data]"
        )]
        start: Option<NaiveDate>,

        #[arg(
            short,
            long,
            value_parser = parse_cli_date,
            help = "Last day of the range [default: latest date in data]"
        )]
        end: Option<NaiveDate>,

        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        #[arg(short, long, help = "Write the report here instead of stdout")]
        output: Option<PathBuf>,

        #[arg(long, help = "Bar chart width in characters (10-200)")]
        chart_width: Option<usize>,

        #[arg(long, help = "Include the per-day table in text output")]
        show_daily: bool,

        #[arg(long, help = "Exit with an error when the range selects no rows")]
        fail_on_empty: bool,
    },

    /// Describe the dataset: rows, date bounds, weather categories
    Info {
        #[arg(short, long, help = "Hourly rentals CSV [default: data/hour.csv]")]
        data: Option<PathBuf>,
    },
}

fn parse_cli_date(value: &str) -> std::result::Result<NaiveDate, String> {
    parse_date_cell(value).ok_or_else(|| format!("invalid date '{}', expected YYYY-MM-DD", value))
}

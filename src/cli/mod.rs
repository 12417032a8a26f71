//! Command-line interface handling using clap.

use crate::constants::{
    APP_DESCRIPTION, APP_NAME, DEFAULT_CITATIONS_OUTPUT, LECTIONARY_BASE_URL, LOG_FORMAT_JSON,
    LOG_FORMAT_TEXT,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Liturgical calendar entries and scripture readings for a given date
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION, author, version, long_about = None)]
pub struct CliArgs {
    /// Print verbose output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, global = true, default_value = LOG_FORMAT_TEXT,
          value_parser = [LOG_FORMAT_TEXT, LOG_FORMAT_JSON])]
    pub log_format: String,

    #[command(subcommand)]
    pub command: Command,
}

/// The available subcommands.
#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Show the calendar entries for a day
    Calendar(DayArgs),
    /// Show the scripture readings for a day in every configured translation
    Readings(DayArgs),
    /// Show the days before and after a date
    Navigate {
        /// Date to navigate from (YYYY-MM-DD); defaults to today
        #[arg(short = 'd', long)]
        date: Option<String>,
    },
    /// Scrape the lectionary index pages into a citation index file
    Scrape {
        /// Where to write the citation index
        #[arg(short = 'o', long, default_value = DEFAULT_CITATIONS_OUTPUT)]
        output: PathBuf,

        /// Base URL of the lectionary index pages
        #[arg(long, default_value = LECTIONARY_BASE_URL)]
        base_url: String,
    },
}

/// Selects a day and an output format.
#[derive(Args, Debug, PartialEq)]
pub struct DayArgs {
    /// Date to query (YYYY-MM-DD); defaults to today
    #[arg(short = 'd', long)]
    pub date: Option<String>,

    /// Query the day before the date
    #[arg(short = 'p', long, conflicts_with = "next")]
    pub previous: bool,

    /// Query the day after the date
    #[arg(short = 'n', long)]
    pub next: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

/// How query results are printed.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON, as a request router would send it
    Json,
    /// Human-readable text
    Text,
}

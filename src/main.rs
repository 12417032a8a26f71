/*!
# ordo

Command-line front end for the liturgical calendar and readings queries.

```text
ordo [OPTIONS] <COMMAND>

Commands:
  calendar  Show the calendar entries for a day
  readings  Show the scripture readings for a day in every configured translation
  navigate  Show the days before and after a date
  scrape    Scrape the lectionary index pages into a citation index file

Options:
  -v, --verbose                 Print verbose output
      --log-format <FORMAT>     Log output format [default: text] [possible values: text, json]
```

## Configuration

- `ORDO_CALENDAR_PATH`: calendar dataset (defaults to `ordo_data/ordo_2025.json`)
- `ORDO_BIBLE_DIR`: scripture dataset directory (defaults to `bible_data/formats/json`)
- `ORDO_TRANSLATIONS`: comma-separated translations (defaults to `DRC,Vulgate,VulgClementine`)
- `RUST_LOG`: log filter (defaults to `info`)
*/

use clap::Parser;
use ordo::api;
use ordo::cli::{CliArgs, Command, DayArgs, OutputFormat};
use ordo::config::Config;
use ordo::constants::{
    DEFAULT_LOG_LEVEL, LOG_FORMAT_JSON, TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
    VERBOSE_LOG_LEVEL,
};
use ordo::context::AppContext;
use ordo::dates::{self, DateKey, DateSpecifier, Navigation};
use ordo::errors::AppResult;
use ordo::render;
use ordo::scrape;
use serde::Serialize;
use tracing::{debug, info, info_span, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// The main entry point for the ordo application.
///
/// Logging is initialised before anything else so that dataset loading is
/// traced; the whole invocation runs inside a root span carrying a
/// correlation id.
fn main() -> AppResult<()> {
    let args = CliArgs::parse();

    init_tracing(&args.log_format, args.verbose);

    let correlation_id = Uuid::new_v4();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );
    let _guard = root_span.enter();

    debug!("CLI arguments: {:?}", args);

    // Obtain today's date once so every query in this invocation agrees on it.
    let today = dates::today();

    run(args.command, today)
}

fn init_tracing(log_format: &str, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_LOG_LEVEL)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log_format == LOG_FORMAT_JSON {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn run(command: Command, today: DateKey) -> AppResult<()> {
    match command {
        Command::Calendar(day) => {
            let spec = day_specifier(&day)?;
            let context = load_context()?;
            let (date, entries) = api::ordo_for(&context, &spec, today)?;
            info!("{} calendar entries for {}", entries.len(), date);
            warn_if_uncovered(&context, date);

            match day.format {
                OutputFormat::Json => print_json(&entries),
                OutputFormat::Text => {
                    print!("{}", render::render_calendar(date, entries));
                    Ok(())
                }
            }
        }
        Command::Readings(day) => {
            let spec = day_specifier(&day)?;
            let context = load_context()?;
            let (date, readings) = api::readings_for(&context, &spec, today)?;
            info!("{} entries with readings for {}", readings.len(), date);
            warn_if_uncovered(&context, date);

            match day.format {
                OutputFormat::Json => print_json(&readings),
                OutputFormat::Text => {
                    print!("{}", render::render_readings(date, &readings));
                    Ok(())
                }
            }
        }
        Command::Navigate { date } => {
            let navigation = match date {
                Some(date) => api::navigation(&date)?,
                None => Navigation::around(today)?,
            };
            print_json(&navigation)
        }
        Command::Scrape { output, base_url } => {
            let index = scrape::run(&base_url, &output)?;
            info!(
                "Scraped {} Sunday and {} weekday citations",
                index.sundays.len(),
                index.weekdays.len()
            );
            Ok(())
        }
    }
}

// The date is validated before any dataset is loaded, so a bad date is
// reported as such even when the datasets are unavailable.
fn day_specifier(day: &DayArgs) -> AppResult<DateSpecifier> {
    DateSpecifier::from_cli_args(day.date.as_deref(), day.previous, day.next)
}

// Flags days the calendar dataset never names.
fn warn_if_uncovered(context: &AppContext, date: DateKey) {
    if !context.calendar().contains_date(date) {
        warn!("{} is not covered by the calendar dataset", date);
    }
}

fn load_context() -> AppResult<AppContext> {
    info!("Loading configuration");
    let config = Config::load()?;
    debug!("Configuration: {:?}", config);
    AppContext::load(&config)
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

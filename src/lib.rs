/*!
# ordo

ordo answers read-only questions about a liturgical calendar: which entries
("ordo") fall on a given day, and what the scripture citations of those
entries say in each configured translation. All data comes from static JSON
datasets loaded once at startup.

## Architecture

Leaf to root:

- `scripture`: one in-memory store per translation, answering verse lookups
- `citation`: parsing of `"<Book> <Chapter>:<Verse>"` citations
- `calendar`: calendar entries grouped by day
- `dates`: validated date keys and previous/next navigation
- `readings`: resolution of a day's citations against every translation
- `context`: the loaded datasets, built once and shared by reference
- `api`: the logical endpoints a request router renders
- `scrape`: the lectionary citation index scraper

## Usage Example

```rust,no_run
use ordo::{api, AppContext, Config};

fn main() -> ordo::AppResult<()> {
    let config = Config::load()?;
    let context = AppContext::load(&config)?;

    for day in api::readings_for_date(&context, "2025-01-06")? {
        for reading in &day.readings {
            println!("{}: {:?}", reading.citation, reading.text("DRC"));
        }
    }
    Ok(())
}
```
*/

/// Logical endpoints over the application context
pub mod api;
/// Calendar dataset loading and per-day lookup
pub mod calendar;
/// Scripture citation parsing
pub mod citation;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// The loaded datasets shared by every query
pub mod context;
/// Date keys and day navigation
pub mod dates;
/// Error types and utilities for error handling
pub mod errors;
/// Readings resolution
pub mod readings;
/// Plain-text rendering of query results
pub mod render;
/// Lectionary citation index scraper
pub mod scrape;
/// Scripture translation stores
pub mod scripture;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use context::AppContext;
pub use dates::DateKey;
pub use errors::{AppError, AppResult};

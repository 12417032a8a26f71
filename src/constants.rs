//! Constants used throughout the application.
//!
//! This module contains all constants used in the ordo application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "ordo";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "Liturgical calendar entries and scripture readings for a given date";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Log level used when `--verbose` is passed.
pub const VERBOSE_LOG_LEVEL: &str = "debug";

// Configuration Keys & Environment Variables
/// Environment variable for the calendar dataset path.
pub const ENV_VAR_CALENDAR_PATH: &str = "ORDO_CALENDAR_PATH";
/// Environment variable for the directory holding scripture datasets.
pub const ENV_VAR_BIBLE_DIR: &str = "ORDO_BIBLE_DIR";
/// Environment variable listing the translations to load, comma-separated.
pub const ENV_VAR_TRANSLATIONS: &str = "ORDO_TRANSLATIONS";
/// Default calendar dataset path.
pub const DEFAULT_CALENDAR_PATH: &str = "ordo_data/ordo_2025.json";
/// Default scripture dataset directory.
pub const DEFAULT_BIBLE_DIR: &str = "bible_data/formats/json";
/// Translations loaded when none are configured, in response order.
pub const DEFAULT_TRANSLATIONS: &[&str] = &["DRC", "Vulgate", "VulgClementine"];
/// File extension of scripture datasets.
pub const TRANSLATION_FILE_EXTENSION: &str = "json";

// Validation
/// Placeholder string for redacted information in debug output.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";
/// Characters forbidden in translation names, which double as file stems.
pub const TRANSLATION_FORBIDDEN_CHARS: &[char] = &['/', '\\', '.', ':'];
/// Key holding the citation in a serialized reading; no translation may share it.
pub const READING_CITATION_KEY: &str = "citation";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format used when rendering dates for people.
pub const DISPLAY_DATE_FORMAT: &str = "%B %-d, %Y";

// Citations
/// Ordinal prefixes that belong to the following word of a book name ("1 Corinthians").
pub const BOOK_ORDINAL_PREFIXES: &[&str] = &["1", "2", "3", "4", "I", "II", "III", "IV"];

// Lectionary Scraper
/// Base URL of the lectionary index pages.
pub const LECTIONARY_BASE_URL: &str = "https://catholic-resources.org/Lectionary";
/// Page listing Sunday readings, relative to the base URL.
pub const LECTIONARY_SUNDAYS_PAGE: &str = "Index-Sundays.htm";
/// Page listing weekday readings, relative to the base URL.
pub const LECTIONARY_WEEKDAYS_PAGE: &str = "Index-Weekdays.htm";
/// Default output path of the scraped citation index.
pub const DEFAULT_CITATIONS_OUTPUT: &str = "citations/felix_citations.json";
/// User agent sent with scraper requests; the site rejects bare clients.
pub const SCRAPER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/118.0.0.0 Safari/537.36";
/// Request timeout for scraper fetches, in seconds.
pub const SCRAPER_TIMEOUT_SECS: u64 = 30;

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "ordo";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";

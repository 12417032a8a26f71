//! Error handling utilities for the ordo application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Citation parse failures have their own type, `CitationError`. They never
//! become an `AppError`: the readings resolver drops the offending citation and
//! carries on.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Represents failures while loading a static dataset at startup.
///
/// Every variant is fatal: the process must not start answering queries with
/// partially loaded calendar or scripture data.
///
/// # Examples
///
/// ```
/// use ordo::errors::DatasetError;
/// use std::path::PathBuf;
///
/// let error = DatasetError::Invalid {
///     path: PathBuf::from("bible_data/DRC.json"),
///     reason: "duplicate book 'Genesis'".to_string(),
/// };
///
/// assert!(format!("{}", error).contains("DRC.json"));
/// assert!(format!("{}", error).contains("duplicate book"));
/// ```
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("Failed to read dataset {path}: {source}. Please check that the file exists and is readable.")]
    Read {
        /// Path of the dataset file
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The dataset file is not valid JSON or does not have the expected shape.
    #[error("Malformed dataset {path}: {source}")]
    Malformed {
        /// Path of the dataset file
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// The dataset parsed but breaks an invariant (bad date key, duplicate identifiers).
    #[error("Invalid dataset {path}: {reason}")]
    Invalid {
        /// Path of the dataset file
        path: PathBuf,
        /// What is wrong with it
        reason: String,
    },
}

/// Represents failures of the lectionary scraper.
///
/// Any of these aborts the scrape run before an output file is written.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// The request could not be sent or the body could not be read.
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        /// The page being fetched
        url: String,
        /// The underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Fetching {url} returned HTTP {status}")]
    Status {
        /// The page being fetched
        url: String,
        /// The HTTP status code
        status: u16,
    },

    /// A CSS selector failed to compile.
    #[error("Invalid selector: {0}")]
    Selector(String),
}

/// Reasons a citation string could not be parsed into book, chapter and verse.
///
/// # Examples
///
/// ```
/// use ordo::citation::parse;
/// use ordo::errors::CitationError;
///
/// match parse("Psalm 23") {
///     Err(CitationError::MissingVerse { raw }) => assert_eq!(raw, "Psalm 23"),
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CitationError {
    /// No whitespace between the book name and the chapter/verse part.
    #[error("Citation '{raw}' has no space between book and chapter")]
    MissingSeparator {
        /// The raw citation
        raw: String,
    },

    /// The chapter/verse part has no ':'.
    #[error("Citation '{raw}' has no verse number")]
    MissingVerse {
        /// The raw citation
        raw: String,
    },

    /// The chapter/verse part has more than one ':'.
    #[error("Citation '{raw}' has more than one ':'")]
    TooManySeparators {
        /// The raw citation
        raw: String,
    },

    /// The chapter or verse is not a positive integer (ranges and lists land here).
    #[error("Citation '{raw}' has a non-numeric chapter or verse: '{token}'")]
    InvalidNumber {
        /// The raw citation
        raw: String,
        /// The offending token
        token: String,
    },
}

/// Represents all possible errors that can occur in the ordo application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use ordo::errors::AppError;
///
/// let error = AppError::Config("Translation list is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Translation list is empty");
/// ```
///
/// Converting from an IO error:
/// ```
/// use ordo::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    ///
    /// This variant automatically converts from `std::io::Error` through the `From` trait.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A date key supplied by the caller is not a well-formed calendar date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Errors loading the calendar or scripture datasets.
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    /// Errors producing the lectionary citation index.
    #[error("Scrape error: {0}")]
    Scrape(#[from] ScrapeError),

    /// Errors serializing query output.
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl AppError {
    /// Returns true when the error was caused by the caller's input rather than
    /// by the service itself.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, AppError::InvalidDate(_))
    }

    /// HTTP-style status code a request router should answer with.
    pub fn status_code(&self) -> u16 {
        if self.is_caller_error() {
            400
        } else {
            500
        }
    }
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// This type alias is used throughout the application to represent operations
/// that may fail with an `AppError`.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let app_error: AppError = io_error.into();

        match app_error {
            AppError::Io(inner) => {
                assert_eq!(inner.kind(), io::ErrorKind::NotFound);
            }
            _ => panic!("Expected AppError::Io variant"),
        }
    }

    #[test]
    fn test_app_error_from_dataset_error() {
        let dataset_error = DatasetError::Invalid {
            path: PathBuf::from("ordo.json"),
            reason: "bad key".to_string(),
        };
        let app_error: AppError = dataset_error.into();

        assert!(matches!(app_error, AppError::Dataset(_)));
        assert!(format!("{}", app_error).starts_with("Dataset error:"));
    }

    #[test]
    fn test_invalid_date_is_caller_error() {
        let error = AppError::InvalidDate("2025-13-01".to_string());
        assert!(error.is_caller_error());
        assert_eq!(error.status_code(), 400);
    }

    #[test]
    fn test_internal_errors_are_not_caller_errors() {
        let errors = vec![
            AppError::Config("missing".to_string()),
            AppError::Io(io::Error::new(io::ErrorKind::Other, "boom")),
            AppError::Scrape(ScrapeError::Status {
                url: "http://example.invalid".to_string(),
                status: 503,
            }),
        ];

        for error in errors {
            assert!(!error.is_caller_error(), "{} should not be a caller error", error);
            assert_eq!(error.status_code(), 500);
        }
    }

    #[test]
    fn test_citation_error_messages_name_the_citation() {
        let error = CitationError::InvalidNumber {
            raw: "Genesis 1:1-5".to_string(),
            token: "1-5".to_string(),
        };
        let message = format!("{}", error);
        assert!(message.contains("Genesis 1:1-5"));
        assert!(message.contains("'1-5'"));
    }

    #[test]
    fn test_scrape_status_error_message() {
        let error = ScrapeError::Status {
            url: "https://example.invalid/Index-Sundays.htm".to_string(),
            status: 404,
        };
        assert!(format!("{}", error).contains("HTTP 404"));
    }
}

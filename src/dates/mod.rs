//! Calendar date keys and day-to-day navigation.
//!
//! This module contains pure date logic: validating `YYYY-MM-DD` keys, and
//! stepping to the previous or next calendar day. Nothing here touches the
//! datasets or the clock except `today()`, and `DateSpecifier::resolve` takes
//! "today" as a parameter so callers can pin it.

use crate::constants::DATE_FORMAT_ISO;
use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Years a four-digit key can spell.
const KEY_YEARS: RangeInclusive<i32> = 0..=9999;

/// A validated calendar date in `YYYY-MM-DD` form.
///
/// # Examples
///
/// ```
/// use ordo::dates::DateKey;
///
/// let key: DateKey = "2025-01-06".parse().unwrap();
/// assert_eq!(key.to_string(), "2025-01-06");
/// assert!("2025-1-6".parse::<DateKey>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Wraps an already valid date.
    pub fn from_date(date: NaiveDate) -> Self {
        DateKey(date)
    }

    /// The underlying date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The day before this one.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidDate` when the day before falls outside years 0000-9999.
    pub fn previous(&self) -> AppResult<DateKey> {
        self.0
            .pred_opt()
            .filter(|d| KEY_YEARS.contains(&d.year()))
            .map(DateKey)
            .ok_or_else(|| AppError::InvalidDate(format!("No day before {}", self)))
    }

    /// The day after this one.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidDate` when the day after falls outside years 0000-9999.
    pub fn next(&self) -> AppResult<DateKey> {
        self.0
            .succ_opt()
            .filter(|d| KEY_YEARS.contains(&d.year()))
            .map(DateKey)
            .ok_or_else(|| AppError::InvalidDate(format!("No day after {}", self)))
    }
}

impl FromStr for DateKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // chrono accepts single-digit months and days; keys must be zero padded.
        let well_shaped = s.len() == 10
            && s.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !well_shaped {
            return Err(AppError::InvalidDate(format!(
                "'{}' is not in YYYY-MM-DD format",
                s
            )));
        }

        NaiveDate::parse_from_str(s, DATE_FORMAT_ISO)
            .map(DateKey)
            .map_err(|e| AppError::InvalidDate(format!("'{}' is not a calendar date: {}", s, e)))
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT_ISO))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Today's date key in the local timezone.
pub fn today() -> DateKey {
    DateKey(Local::now().date_naive())
}

/// Parses `key` and returns the day before it.
///
/// # Examples
///
/// ```
/// use ordo::dates::previous;
///
/// assert_eq!(previous("2025-01-01").unwrap().to_string(), "2024-12-31");
/// assert!(previous("yesterday").is_err());
/// ```
pub fn previous(key: &str) -> AppResult<DateKey> {
    key.parse::<DateKey>()?.previous()
}

/// Parses `key` and returns the day after it.
///
/// # Examples
///
/// ```
/// use ordo::dates::next;
///
/// assert_eq!(next("2024-02-28").unwrap().to_string(), "2024-02-29");
/// ```
pub fn next(key: &str) -> AppResult<DateKey> {
    key.parse::<DateKey>()?.next()
}

/// Which day relative to the anchor a query asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    /// The anchor day itself.
    #[default]
    Current,
    /// The day before the anchor.
    Previous,
    /// The day after the anchor.
    Next,
}

/// Describes the day a query is about: an optional anchor date (today when
/// absent) and a step relative to it.
///
/// # Examples
///
/// ```
/// use ordo::dates::{DateKey, DateSpecifier, Step};
///
/// let today: DateKey = "2025-03-01".parse().unwrap();
///
/// let spec = DateSpecifier::from_cli_args(None, true, false).unwrap();
/// assert_eq!(spec.step, Step::Previous);
/// assert_eq!(spec.resolve(today).unwrap().to_string(), "2025-02-28");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateSpecifier {
    /// The day to navigate from; `None` means today.
    pub anchor: Option<DateKey>,
    /// Where to go from the anchor.
    pub step: Step,
}

impl DateSpecifier {
    /// Builds a specifier from command-line style arguments.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidDate` if `date_str` is not a `YYYY-MM-DD` date.
    /// `previous` and `next` together are rejected as well; clap keeps them
    /// apart, but library callers may not.
    pub fn from_cli_args(date_str: Option<&str>, previous: bool, next: bool) -> AppResult<Self> {
        let anchor = date_str.map(str::parse::<DateKey>).transpose()?;

        let step = match (previous, next) {
            (true, true) => {
                return Err(AppError::InvalidDate(
                    "Cannot ask for both the previous and the next day".to_string(),
                ))
            }
            (true, false) => Step::Previous,
            (false, true) => Step::Next,
            (false, false) => Step::Current,
        };

        Ok(DateSpecifier { anchor, step })
    }

    /// Resolves the specifier to a concrete day, given what "today" is.
    pub fn resolve(&self, today: DateKey) -> AppResult<DateKey> {
        let anchor = self.anchor.unwrap_or(today);
        match self.step {
            Step::Current => Ok(anchor),
            Step::Previous => anchor.previous(),
            Step::Next => anchor.next(),
        }
    }
}

/// A day together with its neighbours, used by front ends to build
/// previous/next links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// The day before `current`.
    pub previous: DateKey,
    /// The day being shown.
    pub current: DateKey,
    /// The day after `current`.
    pub next: DateKey,
}

impl Navigation {
    /// Computes the neighbours of `current`.
    pub fn around(current: DateKey) -> AppResult<Self> {
        Ok(Navigation {
            previous: current.previous()?,
            current,
            next: current.next()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_valid_key() {
        let parsed = key("2025-01-06");
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
    }

    #[test]
    fn test_parse_rejects_malformed_keys() {
        let cases = [
            "",
            "2025-1-6",
            "20250106",
            "2025/01/06",
            "2025-02-30",
            "2025-13-01",
            "not-a-date",
            " 2025-01-06",
            "2025-01-06T00:00:00Z",
        ];

        for case in cases {
            match case.parse::<DateKey>() {
                Err(AppError::InvalidDate(_)) => {}
                other => panic!("Expected InvalidDate for {:?}, got {:?}", case, other),
            }
        }
    }

    #[test]
    fn test_previous_rolls_over_year() {
        assert_eq!(previous("2025-01-01").unwrap(), key("2024-12-31"));
    }

    #[test]
    fn test_next_rolls_over_month_and_leap_day() {
        assert_eq!(next("2025-01-31").unwrap(), key("2025-02-01"));
        assert_eq!(next("2024-02-28").unwrap(), key("2024-02-29"));
        assert_eq!(next("2023-02-28").unwrap(), key("2023-03-01"));
        assert_eq!(next("2024-12-31").unwrap(), key("2025-01-01"));
    }

    #[test]
    fn test_previous_next_round_trip() {
        let mut day = key("2023-12-25");
        // Walk a little over a year, crossing a leap day.
        for _ in 0..400 {
            let text = day.to_string();
            assert_eq!(previous(&next(&text).unwrap().to_string()).unwrap(), day);
            assert_eq!(next(&previous(&text).unwrap().to_string()).unwrap(), day);
            day = day.next().unwrap();
        }
    }

    #[test]
    fn test_navigation_invalid_input() {
        assert!(matches!(previous("2025-00-10"), Err(AppError::InvalidDate(_))));
        assert!(matches!(next("tomorrow"), Err(AppError::InvalidDate(_))));
    }

    #[test]
    fn test_previous_at_min_date_is_error() {
        let min = DateKey::from_date(NaiveDate::MIN);
        assert!(matches!(min.previous(), Err(AppError::InvalidDate(_))));
    }

    #[test]
    fn test_stepping_stays_within_four_digit_years() {
        assert!(matches!(next("9999-12-31"), Err(AppError::InvalidDate(_))));
        assert!(matches!(previous("0000-01-01"), Err(AppError::InvalidDate(_))));

        // The last steppable days still round-trip.
        let last = key("9999-12-30");
        assert_eq!(next("9999-12-30").unwrap().previous().unwrap(), last);
        let first = key("0000-01-02");
        assert_eq!(previous("0000-01-02").unwrap().next().unwrap(), first);
    }

    #[test]
    fn test_date_specifier_from_cli_args() {
        let spec = DateSpecifier::from_cli_args(None, false, false).unwrap();
        assert_eq!(spec, DateSpecifier::default());

        let spec = DateSpecifier::from_cli_args(Some("2025-01-06"), false, true).unwrap();
        assert_eq!(spec.anchor, Some(key("2025-01-06")));
        assert_eq!(spec.step, Step::Next);

        assert!(DateSpecifier::from_cli_args(Some("06/01/2025"), false, false).is_err());
        assert!(DateSpecifier::from_cli_args(None, true, true).is_err());
    }

    #[test]
    fn test_date_specifier_resolve() {
        let today = key("2025-03-01");

        let spec = DateSpecifier::default();
        assert_eq!(spec.resolve(today).unwrap(), today);

        let spec = DateSpecifier {
            anchor: None,
            step: Step::Previous,
        };
        assert_eq!(spec.resolve(today).unwrap(), key("2025-02-28"));

        let spec = DateSpecifier {
            anchor: Some(key("2024-12-31")),
            step: Step::Next,
        };
        assert_eq!(spec.resolve(today).unwrap(), key("2025-01-01"));
    }

    #[test]
    fn test_navigation_around() {
        let nav = Navigation::around(key("2025-01-01")).unwrap();
        assert_eq!(nav.previous, key("2024-12-31"));
        assert_eq!(nav.next, key("2025-01-02"));

        let json = serde_json::to_value(nav).unwrap();
        assert_eq!(json["previous"], "2024-12-31");
        assert_eq!(json["current"], "2025-01-01");
    }

    #[test]
    fn test_today_is_well_formed() {
        let text = today().to_string();
        assert_eq!(text.parse::<DateKey>().unwrap().to_string(), text);
    }
}

//! Read-only queries, shaped for a request router to render as JSON.
//!
//! Each function corresponds to one logical endpoint:
//!
//! | Endpoint               | Function                |
//! |------------------------|-------------------------|
//! | `GET /ordo/today`      | [`ordo_today`]          |
//! | `GET /ordo/{date}`     | [`ordo_for_date`]       |
//! | `GET /readings/today`  | [`readings_today`]      |
//! | `GET /readings/{date}` | [`readings_for_date`]   |
//! | `GET /navigate/{date}` | [`navigation`]          |
//!
//! [`ordo_for`] and [`readings_for`] take a [`DateSpecifier`] instead, for
//! front ends that step to the previous or next day.
//!
//! A day with nothing scheduled is an empty list for both calendar and
//! readings queries. A malformed date is an `AppError::InvalidDate`, which
//! [`ErrorResponse`] turns into a 400 body.

use crate::calendar::CalendarEntry;
use crate::context::AppContext;
use crate::dates::{DateKey, DateSpecifier, Navigation};
use crate::errors::{AppError, AppResult};
use crate::readings::{resolve_readings, DayReadings};
use serde::Serialize;
use tracing::debug;

/// Calendar entries for `today`.
pub fn ordo_today(context: &AppContext, today: DateKey) -> &[CalendarEntry] {
    debug!("Calendar query for today ({})", today);
    context.calendar().entries_for_date(today)
}

/// Calendar entries for a caller-supplied `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `AppError::InvalidDate` when `date` is not a calendar date.
pub fn ordo_for_date<'a>(context: &'a AppContext, date: &str) -> AppResult<&'a [CalendarEntry]> {
    let key = date.parse::<DateKey>()?;
    debug!("Calendar query for {}", key);
    Ok(context.calendar().entries_for_date(key))
}

/// Resolved readings for `today`.
pub fn readings_today(context: &AppContext, today: DateKey) -> Vec<DayReadings<'_>> {
    debug!("Readings query for today ({})", today);
    resolve_readings(context, today)
}

/// Resolved readings for a caller-supplied `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `AppError::InvalidDate` when `date` is not a calendar date.
pub fn readings_for_date<'a>(
    context: &'a AppContext,
    date: &str,
) -> AppResult<Vec<DayReadings<'a>>> {
    let key = date.parse::<DateKey>()?;
    debug!("Readings query for {}", key);
    Ok(resolve_readings(context, key))
}

/// Calendar entries for the day `spec` selects, together with that day.
pub fn ordo_for<'a>(
    context: &'a AppContext,
    spec: &DateSpecifier,
    today: DateKey,
) -> AppResult<(DateKey, &'a [CalendarEntry])> {
    let key = spec.resolve(today)?;
    debug!("Calendar query for {}", key);
    Ok((key, context.calendar().entries_for_date(key)))
}

/// Resolved readings for the day `spec` selects, together with that day.
pub fn readings_for<'a>(
    context: &'a AppContext,
    spec: &DateSpecifier,
    today: DateKey,
) -> AppResult<(DateKey, Vec<DayReadings<'a>>)> {
    let key = spec.resolve(today)?;
    debug!("Readings query for {}", key);
    Ok((key, resolve_readings(context, key)))
}

/// The previous and next days around a caller-supplied date.
///
/// # Errors
///
/// Returns `AppError::InvalidDate` when `date` is not a calendar date.
pub fn navigation(date: &str) -> AppResult<Navigation> {
    Navigation::around(date.parse::<DateKey>()?)
}

/// Body a router sends back when a query fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// HTTP-style status code.
    pub status: u16,
    /// Human-readable description of the failure.
    pub error: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        let message = if error.is_caller_error() {
            error.to_string()
        } else {
            // Internal details (paths, I/O causes) stay in the logs.
            "Internal error".to_string()
        };
        ErrorResponse {
            status: error.status_code(),
            error: message,
        }
    }
}

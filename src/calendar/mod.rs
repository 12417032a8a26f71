//! The liturgical calendar ("ordo") dataset.
//!
//! Two document shapes are accepted and normalised at load time:
//!
//! - a mapping from `YYYY-MM-DD` to the day's entries, and
//! - a flat array of entries, each carrying its own `date` (plain date or an
//!   RFC 3339 timestamp, as romcal emits).
//!
//! Entries keep every field of the source document; only `citations` is
//! interpreted here.

use crate::dates::DateKey;
use crate::errors::{AppResult, DatasetError};
use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// One scheduled liturgical record for a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntry {
    /// Scripture citations for the entry, in document order.
    #[serde(default)]
    pub citations: Vec<String>,

    /// Every other field of the entry, preserved verbatim.
    #[serde(flatten)]
    pub metadata: Map<String, Value>,
}

impl CalendarEntry {
    /// The entry's identifier (romcal's `id`, e.g. `"epiphany"`), if present.
    pub fn id(&self) -> Option<&str> {
        self.text("id")
    }

    /// A string-valued metadata field.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(Value::as_str)
    }

    /// The string items of an array-valued metadata field; empty when absent.
    pub fn list(&self, key: &str) -> Vec<&str> {
        self.metadata
            .get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// An object-valued metadata field.
    pub fn object(&self, key: &str) -> Option<&Map<String, Value>> {
        self.metadata.get(key).and_then(Value::as_object)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CalendarDocument {
    ByDate(BTreeMap<String, Vec<CalendarEntry>>),
    Flat(Vec<CalendarEntry>),
}

/// All calendar entries, grouped by day.
///
/// # Examples
///
/// ```
/// use ordo::calendar::CalendarStore;
///
/// let store = CalendarStore::from_json_str(
///     r#"{"2025-01-06": [{"id": "epiphany", "citations": ["Matthew 2:1"]}]}"#,
/// ).unwrap();
///
/// let day = "2025-01-06".parse().unwrap();
/// assert_eq!(store.entries_for_date(day)[0].id(), Some("epiphany"));
///
/// let blank = "2025-01-07".parse().unwrap();
/// assert!(store.entries_for_date(blank).is_empty());
/// ```
#[derive(Debug, Default)]
pub struct CalendarStore {
    days: BTreeMap<DateKey, Vec<CalendarEntry>>,
}

impl CalendarStore {
    /// Loads the calendar from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Read` if the file cannot be read,
    /// `DatasetError::Malformed` if it matches neither document shape, and
    /// `DatasetError::Invalid` if a date key or `date` field is not a date.
    pub fn load(path: &Path) -> AppResult<Self> {
        debug!("Loading calendar from {:?}", path);

        let content = fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let store = Self::parse(&content, path)?;
        info!(
            "Loaded calendar with {} entries over {} days",
            store.len(),
            store.days.len()
        );
        {
            let mut dates = store.dates();
            if let Some(first) = dates.next() {
                let last = dates.last().unwrap_or(first);
                debug!("Calendar covers {} to {}", first, last);
            }
        }
        Ok(store)
    }

    /// Builds a calendar from an in-memory JSON document.
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        Self::parse(json, Path::new("<memory>"))
    }

    fn parse(json: &str, path: &Path) -> AppResult<Self> {
        let document: CalendarDocument =
            serde_json::from_str(json).map_err(|source| DatasetError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        let invalid = |reason: String| DatasetError::Invalid {
            path: path.to_path_buf(),
            reason,
        };

        let mut days: BTreeMap<DateKey, Vec<CalendarEntry>> = BTreeMap::new();
        match document {
            CalendarDocument::ByDate(by_date) => {
                for (key, entries) in by_date {
                    let date = key
                        .parse::<DateKey>()
                        .map_err(|e| invalid(format!("bad date key '{}': {}", key, e)))?;
                    days.entry(date).or_default().extend(entries);
                }
            }
            CalendarDocument::Flat(entries) => {
                for (index, entry) in entries.into_iter().enumerate() {
                    let raw = entry
                        .text("date")
                        .ok_or_else(|| invalid(format!("entry {} has no 'date' field", index)))?;
                    let date = entry_date(raw).ok_or_else(|| {
                        invalid(format!("entry {} has a malformed date '{}'", index, raw))
                    })?;
                    days.entry(date).or_default().push(entry);
                }
            }
        }

        Ok(CalendarStore { days })
    }

    /// The entries scheduled for `date`, in document order. A day with nothing
    /// scheduled yields an empty slice.
    pub fn entries_for_date(&self, date: DateKey) -> &[CalendarEntry] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the dataset mentions `date` at all, even with no entries.
    pub fn contains_date(&self, date: DateKey) -> bool {
        self.days.contains_key(&date)
    }

    /// The days named by the dataset, in calendar order.
    pub fn dates(&self) -> impl Iterator<Item = DateKey> + '_ {
        self.days.keys().copied()
    }

    /// Total number of entries across all days.
    pub fn len(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }

    /// True when the calendar holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The calendar day of a flat entry's `date`: either `YYYY-MM-DD` or an
/// RFC 3339 timestamp, whose date part (in its own offset) is used.
fn entry_date(raw: &str) -> Option<DateKey> {
    raw.parse::<DateKey>().ok().or_else(|| {
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|timestamp| DateKey::from_date(timestamp.date_naive()))
    })
}
